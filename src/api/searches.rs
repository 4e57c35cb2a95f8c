use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::{ApiError, AppState, UserQuery};
use crate::models::SearchRecord;

pub async fn recent_searches(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<Vec<SearchRecord>>, ApiError> {
    let Query(query) = query?;
    let limit = state.config().history.recent_limit;
    let searches = state.store().recent_searches(query.user_id, limit).await?;
    Ok(Json(searches))
}
