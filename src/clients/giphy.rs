use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::GiphyConfig;
use crate::models::Gif;

#[derive(Debug, Error)]
pub enum GiphyError {
    /// Transport or body failure. The request URL is stripped since it
    /// carries the API key.
    #[error("GIPHY request failed: {0}")]
    Http(reqwest::Error),

    #[error("GIPHY API error: {status}")]
    Status { status: StatusCode, body: String },

    #[error("Unexpected GIPHY response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("GIF {0} not found")]
    NotFound(String),

    #[error("Invalid GIPHY URL: {0}")]
    InvalidUrl(String),
}

/// Limit/offset pair forwarded to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl From<reqwest::Error> for GiphyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl PageRequest {
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

/// Upstream GIF listing source. Responses are passed through untouched.
#[async_trait::async_trait]
pub trait GifProvider: Send + Sync {
    async fn search(&self, term: &str, page: PageRequest) -> Result<Value, GiphyError>;

    async fn trending(&self, page: PageRequest) -> Result<Value, GiphyError>;

    async fn get_gif(&self, gif_id: &str) -> Result<Gif, GiphyError>;
}

#[derive(Debug, Deserialize)]
struct SingleGifResponse {
    data: Option<Gif>,
}

#[derive(Clone)]
pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: String,
    rating: String,
    lang: String,
}

impl GiphyClient {
    #[must_use]
    pub fn with_shared_client(client: Client, config: &GiphyConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            rating: config.rating.clone(),
            lang: config.lang.clone(),
        }
    }

    /// The pooled HTTP client, for fetching media the API points at.
    #[must_use]
    pub const fn http(&self) -> &Client {
        &self.client
    }

    fn endpoint(&self, path: &str) -> Result<Url, GiphyError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| GiphyError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| GiphyError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v1", "gifs", path]);

        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    fn masked_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(4).collect();
        format!("{prefix}...")
    }

    async fn get_json(&self, url: Url) -> Result<Value, GiphyError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GiphyError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl GifProvider for GiphyClient {
    async fn search(&self, term: &str, page: PageRequest) -> Result<Value, GiphyError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("limit", &page.limit.to_string())
            .append_pair("offset", &page.offset.to_string())
            .append_pair("rating", &self.rating)
            .append_pair("lang", &self.lang);

        debug!(
            term,
            limit = page.limit,
            offset = page.offset,
            api_key = %self.masked_key(),
            "Searching GIPHY"
        );

        self.get_json(url).await
    }

    async fn trending(&self, page: PageRequest) -> Result<Value, GiphyError> {
        let mut url = self.endpoint("trending")?;
        url.query_pairs_mut()
            .append_pair("limit", &page.limit.to_string())
            .append_pair("offset", &page.offset.to_string())
            .append_pair("rating", &self.rating);

        debug!(limit = page.limit, offset = page.offset, "Fetching GIPHY trending");

        self.get_json(url).await
    }

    async fn get_gif(&self, gif_id: &str) -> Result<Gif, GiphyError> {
        let url = self.endpoint(gif_id)?;

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GiphyError::NotFound(gif_id.to_string()));
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GiphyError::Status { status, body });
        }

        let body: SingleGifResponse = response.json().await?;
        body.data
            .filter(|gif| !gif.id.is_empty())
            .ok_or_else(|| GiphyError::NotFound(gif_id.to_string()))
    }
}
