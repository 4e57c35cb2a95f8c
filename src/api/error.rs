use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::MessageResponse;
use crate::constants::messages;
use crate::services::GifError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    ValidationError(String),

    /// The GIF provider failed. `message` is shown to the client, `detail`
    /// carries the underlying cause.
    UpstreamError { message: String, detail: String },

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            ApiError::UpstreamError { message, detail } => write!(f, "{message}: {detail}"),
            ApiError::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, MessageResponse::new(msg)),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, MessageResponse::new(msg)),
            ApiError::UpstreamError { message, detail } => {
                tracing::warn!("GIPHY error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::with_error(message, detail),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::new("An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    /// Maps a GIF service failure, using `upstream_message` as the client
    /// facing text when the provider was at fault.
    pub fn from_gif_error(err: GifError, upstream_message: &str) -> Self {
        match err {
            GifError::MissingQuery => ApiError::validation(messages::MISSING_QUERY),
            GifError::Upstream(e) => ApiError::UpstreamError {
                message: upstream_message.to_string(),
                detail: e.to_string(),
            },
            GifError::Store(e) => e.into(),
        }
    }
}
