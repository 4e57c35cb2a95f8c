pub mod giphy;

pub use giphy::{GifProvider, GiphyClient, GiphyError, PageRequest};
