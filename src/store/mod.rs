//! Search history and favorites persistence.
//!
//! Handlers only see the [`HistoryStore`] trait; the backend is chosen when
//! the application state is built.

pub mod memory;

pub use memory::MemoryStore;

use serde::Serialize;
use thiserror::Error;

use crate::models::{FavoriteRecord, NewFavorite, NewSearch, SearchRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub searches: usize,
    pub favorites: usize,
}

#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// Records a search and returns it with its assigned id and timestamp.
    async fn create_search(&self, search: NewSearch) -> Result<SearchRecord, StoreError>;

    /// Newest searches first, at most `limit` entries. When `user_id` is set
    /// only that user's searches are considered.
    async fn recent_searches(
        &self,
        user_id: Option<i64>,
        limit: usize,
    ) -> Result<Vec<SearchRecord>, StoreError>;

    async fn create_favorite(&self, favorite: NewFavorite) -> Result<FavoriteRecord, StoreError>;

    /// All favorites, newest first.
    async fn favorites(&self, user_id: Option<i64>) -> Result<Vec<FavoriteRecord>, StoreError>;

    /// Removes the oldest favorite pointing at `gif_id`.
    ///
    /// Returns `false` when nothing matched.
    async fn remove_favorite(&self, gif_id: &str, user_id: Option<i64>)
    -> Result<bool, StoreError>;

    async fn counts(&self) -> Result<StoreCounts, StoreError>;
}
