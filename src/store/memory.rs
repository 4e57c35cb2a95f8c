use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use super::{HistoryStore, StoreCounts, StoreError};
use crate::models::{FavoriteRecord, NewFavorite, NewSearch, SearchRecord};

/// Process-local store. Everything is lost when the process exits.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

struct Tables {
    searches: BTreeMap<i64, SearchRecord>,
    favorites: BTreeMap<i64, FavoriteRecord>,
    next_search_id: i64,
    next_favorite_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                searches: BTreeMap::new(),
                favorites: BTreeMap::new(),
                next_search_id: 1,
                next_favorite_id: 1,
            }),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn matches_user(record_user: Option<i64>, filter: Option<i64>) -> bool {
    filter.is_none_or(|id| record_user == Some(id))
}

#[async_trait::async_trait]
impl HistoryStore for MemoryStore {
    async fn create_search(&self, search: NewSearch) -> Result<SearchRecord, StoreError> {
        let mut tables = self.tables.write().await;

        let id = tables.next_search_id;
        tables.next_search_id += 1;

        let record = SearchRecord {
            id,
            query: search.query,
            emotion: non_empty(search.emotion),
            user_id: search.user_id,
            created_at: Utc::now(),
        };
        tables.searches.insert(id, record.clone());

        Ok(record)
    }

    async fn recent_searches(
        &self,
        user_id: Option<i64>,
        limit: usize,
    ) -> Result<Vec<SearchRecord>, StoreError> {
        let tables = self.tables.read().await;

        let mut searches: Vec<SearchRecord> = tables
            .searches
            .values()
            .filter(|s| matches_user(s.user_id, user_id))
            .cloned()
            .collect();

        searches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        searches.truncate(limit);

        Ok(searches)
    }

    async fn create_favorite(&self, favorite: NewFavorite) -> Result<FavoriteRecord, StoreError> {
        let mut tables = self.tables.write().await;

        let id = tables.next_favorite_id;
        tables.next_favorite_id += 1;

        let record = FavoriteRecord {
            id,
            gif_id: favorite.gif_id,
            gif_url: favorite.gif_url,
            title: non_empty(favorite.title),
            user_id: favorite.user_id,
            created_at: Utc::now(),
        };
        tables.favorites.insert(id, record.clone());

        Ok(record)
    }

    async fn favorites(&self, user_id: Option<i64>) -> Result<Vec<FavoriteRecord>, StoreError> {
        let tables = self.tables.read().await;

        let mut favorites: Vec<FavoriteRecord> = tables
            .favorites
            .values()
            .filter(|f| matches_user(f.user_id, user_id))
            .cloned()
            .collect();

        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(favorites)
    }

    async fn remove_favorite(
        &self,
        gif_id: &str,
        user_id: Option<i64>,
    ) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;

        let found = tables
            .favorites
            .values()
            .find(|f| f.gif_id == gif_id && matches_user(f.user_id, user_id))
            .map(|f| f.id);

        Ok(found
            .and_then(|id| tables.favorites.remove(&id))
            .is_some())
    }

    async fn counts(&self) -> Result<StoreCounts, StoreError> {
        let tables = self.tables.read().await;
        Ok(StoreCounts {
            searches: tables.searches.len(),
            favorites: tables.favorites.len(),
        })
    }
}
