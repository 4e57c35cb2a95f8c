use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use super::{ApiError, MapEmotionQuery, MapEmotionResponse};
use crate::emotion::{EmotionEntry, PREDEFINED_EMOTIONS, map_emotion_to_keywords};

pub async fn list_emotions() -> Json<&'static [EmotionEntry]> {
    Json(PREDEFINED_EMOTIONS)
}

pub async fn map_emotion(
    query: Result<Query<MapEmotionQuery>, QueryRejection>,
) -> Result<Json<MapEmotionResponse>, ApiError> {
    let Query(query) = query?;
    let Some(input) = query.q.filter(|q| !q.trim().is_empty()) else {
        return Err(ApiError::validation("Emotion text cannot be empty"));
    };

    let keywords = map_emotion_to_keywords(&input);
    Ok(Json(MapEmotionResponse {
        input,
        keywords,
    }))
}
