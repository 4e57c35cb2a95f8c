mod download;
mod emotions;
mod init;
mod map;
mod search;
mod share;
mod trending;

pub use download::cmd_download;
pub use emotions::cmd_emotions;
pub use init::cmd_init;
pub use map::cmd_map;
pub use search::cmd_search;
pub use share::cmd_share;
pub use trending::cmd_trending;

use crate::clients::GiphyClient;
use crate::config::Config;
use crate::models::Gif;
use crate::state::build_shared_http_client;

fn giphy_client(config: &Config) -> anyhow::Result<GiphyClient> {
    if config.giphy.api_key.is_empty() {
        anyhow::bail!(
            "No GIPHY API key configured. Set giphy.api_key in config.toml or the {} environment variable",
            crate::config::GIPHY_API_KEY_ENV
        );
    }

    let http = build_shared_http_client(config.giphy.request_timeout_seconds)?;
    Ok(GiphyClient::with_shared_client(http, &config.giphy))
}

fn print_gifs(gifs: &[Gif]) {
    for (index, gif) in gifs.iter().enumerate() {
        let title = if gif.title.trim().is_empty() {
            "(untitled)"
        } else {
            gif.title.as_str()
        };
        println!("{:>3}. {title} [{}]", index + 1, gif.id);
        println!("     {}", gif.images.original.url);
    }
}
