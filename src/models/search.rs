use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One executed search. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: i64,
    pub query: String,
    pub emotion: Option<String>,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSearch {
    pub query: String,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl NewSearch {
    pub fn new(query: impl Into<String>, emotion: Option<String>) -> Self {
        Self {
            query: query.into(),
            emotion,
            user_id: None,
        }
    }
}
