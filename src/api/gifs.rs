//! GIF listing proxy.
//!
//! Responses are the provider's JSON, relayed without reshaping.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::Value;
use std::sync::Arc;

use super::{ApiError, AppState, GifSearchQuery, PageQuery};
use crate::constants::messages;
use crate::services::GifSearch;

/// `GET /api/gifs/search?q=&emotion=&limit=&offset=`
pub async fn search_gifs(
    State(state): State<Arc<AppState>>,
    query: Result<Query<GifSearchQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let request = GifSearch {
        q: query.q,
        emotion: query.emotion,
        limit: query.limit,
        offset: query.offset,
    };

    let data = state
        .gif_service()
        .search(request)
        .await
        .map_err(|e| ApiError::from_gif_error(e, messages::SEARCH_FAILED))?;

    Ok(Json(data))
}

/// `GET /api/gifs/trending?limit=&offset=`
pub async fn trending_gifs(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let data = state
        .gif_service()
        .trending(query.limit, query.offset)
        .await
        .map_err(|e| ApiError::from_gif_error(e, messages::TRENDING_FAILED))?;

    Ok(Json(data))
}
