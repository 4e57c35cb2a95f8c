use serde::{Deserialize, Serialize};

use crate::store::StoreCounts;

/// Plain `{ "message": ... }` body used for acknowledgements and errors.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GifSearchQuery {
    pub q: Option<String>,
    pub emotion: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MapEmotionQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MapEmotionResponse {
    pub input: String,
    pub keywords: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub searches: usize,
    pub favorites: usize,
    pub giphy_key_configured: bool,
}

impl SystemStatus {
    #[must_use]
    pub fn new(uptime: u64, counts: StoreCounts, giphy_key_configured: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
            searches: counts.searches,
            favorites: counts.favorites,
            giphy_key_configured,
        }
    }
}
