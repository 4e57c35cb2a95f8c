use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, SystemStatus};

/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SystemStatus>, ApiError> {
    let counts = state.store().counts().await?;
    let key_configured = !state.config().giphy.api_key.is_empty();

    Ok(Json(SystemStatus::new(
        state.start_time.elapsed().as_secs(),
        counts,
        key_configured,
    )))
}
