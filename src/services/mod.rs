pub mod gif_service;
pub use gif_service::{GifError, GifSearch, GifService};

pub mod orchestrator;
pub use orchestrator::{FeedRequest, SearchOrchestrator, fetch_page};
