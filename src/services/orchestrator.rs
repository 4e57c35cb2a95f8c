//! Client-side feed state: what to fetch next and how pages accumulate.

use crate::clients::{GifProvider, GiphyError, PageRequest};
use crate::constants::PAGE_SIZE;
use crate::emotion::map_emotion_to_keywords;
use crate::models::{Gif, GifPage};

/// The fetch the orchestrator wants performed next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedRequest {
    Trending { limit: u32, offset: u32 },
    Search { query: String, limit: u32, offset: u32 },
}

impl FeedRequest {
    #[must_use]
    pub const fn offset(&self) -> u32 {
        match self {
            Self::Trending { offset, .. } | Self::Search { offset, .. } => *offset,
        }
    }
}

/// Performs `request` against `provider` and decodes the listing.
pub async fn fetch_page(
    provider: &dyn GifProvider,
    request: &FeedRequest,
) -> Result<GifPage, GiphyError> {
    let value = match request {
        FeedRequest::Trending { limit, offset } => {
            provider.trending(PageRequest::new(*limit, *offset)).await?
        }
        FeedRequest::Search {
            query,
            limit,
            offset,
        } => {
            provider
                .search(query, PageRequest::new(*limit, *offset))
                .await?
        }
    };

    Ok(GifPage::from_value(value)?)
}

#[derive(Debug, Clone)]
pub struct SearchOrchestrator {
    query: String,
    emotion: Option<String>,
    offset: u32,
    page_size: u32,
    gifs: Vec<Gif>,
    total_count: Option<u64>,
}

impl Default for SearchOrchestrator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl SearchOrchestrator {
    #[must_use]
    pub const fn new(page_size: u32) -> Self {
        Self {
            query: String::new(),
            emotion: None,
            offset: 0,
            page_size,
            gifs: Vec::new(),
            total_count: None,
        }
    }

    /// Starts a search from free text. The text is translated to keywords and
    /// kept as the emotion label.
    pub fn search(&mut self, text: &str) {
        let keywords = map_emotion_to_keywords(text);
        self.reset(keywords, Some(text.to_string()));
    }

    /// Starts a search from a predefined emotion.
    pub fn select_emotion(&mut self, emotion_id: &str, keywords: &str) {
        self.reset(keywords.to_string(), Some(emotion_id.to_string()));
    }

    fn reset(&mut self, query: String, emotion: Option<String>) {
        self.query = query;
        self.emotion = emotion;
        self.offset = 0;
        self.gifs.clear();
        self.total_count = None;
    }

    /// Advances to the next page. The caller fetches `next_request()` after.
    pub fn load_more(&mut self) {
        self.offset += self.page_size;
    }

    #[must_use]
    pub fn next_request(&self) -> FeedRequest {
        if self.query.trim().is_empty() {
            FeedRequest::Trending {
                limit: self.page_size,
                offset: self.offset,
            }
        } else {
            FeedRequest::Search {
                query: self.query.clone(),
                limit: self.page_size,
                offset: self.offset,
            }
        }
    }

    /// Merges a fetched page. Offset zero replaces the list, later offsets
    /// append. Returns `false` and leaves state untouched when `request` is
    /// no longer the current one.
    pub fn apply(&mut self, request: &FeedRequest, page: GifPage) -> bool {
        if *request != self.next_request() {
            return false;
        }

        if request.offset() == 0 {
            self.gifs = page.data;
        } else {
            self.gifs.extend(page.data);
        }
        self.total_count = Some(page.pagination.total_count);

        true
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.total_count
            .is_some_and(|total| total > self.gifs.len() as u64)
    }

    #[must_use]
    pub fn gifs(&self) -> &[Gif] {
        &self.gifs
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn emotion(&self) -> Option<&str> {
        self.emotion.as_deref()
    }

    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }
}
