use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;
use tracing::info;

use super::validation::validate_new_favorite;
use super::{ApiError, AppState, MessageResponse, UserQuery};
use crate::constants::messages;
use crate::models::{FavoriteRecord, NewFavorite};

pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<Vec<FavoriteRecord>>, ApiError> {
    let Query(query) = query?;
    let favorites = state.store().favorites(query.user_id).await?;
    Ok(Json(favorites))
}

pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewFavorite>, JsonRejection>,
) -> Result<Json<FavoriteRecord>, ApiError> {
    let Json(payload) = payload?;
    let favorite = validate_new_favorite(payload)?;
    let record = state.store().create_favorite(favorite).await?;

    info!(gif_id = %record.gif_id, id = record.id, "Added favorite");

    Ok(Json(record))
}

pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    gif_id: Result<Path<String>, PathRejection>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(gif_id) = gif_id?;
    let Query(query) = query?;
    let removed = state
        .store()
        .remove_favorite(&gif_id, query.user_id)
        .await?;

    if removed {
        info!(gif_id = %gif_id, "Removed favorite");
        Ok(Json(MessageResponse::new(messages::FAVORITE_REMOVED)))
    } else {
        Err(ApiError::not_found(messages::FAVORITE_NOT_FOUND))
    }
}
