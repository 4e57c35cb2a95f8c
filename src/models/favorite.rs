use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved reference to a provider GIF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub id: i64,
    pub gif_id: String,
    pub gif_url: String,
    pub title: Option<String>,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub gif_id: String,
    pub gif_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}
