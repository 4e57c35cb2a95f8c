//! Proxying GIF listings from the provider and recording searches.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::clients::{GifProvider, GiphyError, PageRequest};
use crate::models::NewSearch;
use crate::store::{HistoryStore, StoreError};

#[derive(Debug, Error)]
pub enum GifError {
    #[error("Query or emotion parameter is required")]
    MissingQuery,

    #[error(transparent)]
    Upstream(#[from] GiphyError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parameters of a search request as received from a client.
#[derive(Debug, Clone, Default)]
pub struct GifSearch {
    pub q: Option<String>,
    pub emotion: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl GifSearch {
    /// The text sent upstream: `q` when given, else `emotion`. Blank values
    /// count as absent.
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        non_blank(self.q.as_deref()).or_else(|| non_blank(self.emotion.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct GifService {
    provider: Arc<dyn GifProvider>,
    store: Arc<dyn HistoryStore>,
    default_limit: u32,
}

impl GifService {
    #[must_use]
    pub fn new(
        provider: Arc<dyn GifProvider>,
        store: Arc<dyn HistoryStore>,
        default_limit: u32,
    ) -> Self {
        Self {
            provider,
            store,
            default_limit,
        }
    }

    fn page(&self, limit: Option<u32>, offset: Option<u32>) -> PageRequest {
        PageRequest::new(limit.unwrap_or(self.default_limit), offset.unwrap_or(0))
    }

    /// Forwards a search upstream and, once it succeeds, records it in the
    /// search history. Nothing is recorded for failed searches.
    pub async fn search(&self, request: GifSearch) -> Result<Value, GifError> {
        let term = request.term().ok_or(GifError::MissingQuery)?;
        let page = self.page(request.limit, request.offset);

        info!(term, limit = page.limit, offset = page.offset, "Searching GIFs");

        let data = self.provider.search(term, page).await.map_err(|e| {
            error!(term, error = %e, "GIF search failed");
            e
        })?;

        let query = non_blank(request.q.as_deref()).unwrap_or_default();
        let emotion = non_blank(request.emotion.as_deref()).map(str::to_string);
        self.store
            .create_search(NewSearch::new(query, emotion))
            .await?;

        Ok(data)
    }

    pub async fn trending(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Value, GifError> {
        let page = self.page(limit, offset);

        self.provider.trending(page).await.map_err(|e| {
            error!(error = %e, "Trending GIF fetch failed");
            GifError::from(e)
        })
    }
}
