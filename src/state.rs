use std::sync::Arc;

use crate::clients::{GifProvider, GiphyClient};
use crate::config::Config;
use crate::services::GifService;
use crate::store::{HistoryStore, MemoryStore};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// This client should be reused across all HTTP-based services to enable
/// connection pooling and avoid socket exhaustion.
pub fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(concat!("moodgif/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Arc<dyn HistoryStore>,

    pub gif_service: Arc<GifService>,
}

impl SharedState {
    /// Wires the default backends: an in-memory store and the GIPHY client.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = build_shared_http_client(config.giphy.request_timeout_seconds)?;
        let giphy = Arc::new(GiphyClient::with_shared_client(http_client, &config.giphy));

        Ok(Self::with_backends(
            config,
            Arc::new(MemoryStore::new()),
            giphy,
        ))
    }

    #[must_use]
    pub fn with_backends(
        config: Config,
        store: Arc<dyn HistoryStore>,
        giphy: Arc<dyn GifProvider>,
    ) -> Self {
        let gif_service = Arc::new(GifService::new(
            giphy,
            store.clone(),
            config.giphy.default_limit,
        ));

        Self {
            config: Arc::new(config),
            store,
            gif_service,
        }
    }
}
