use anyhow::Context;

use super::{giphy_client, print_gifs};
use crate::config::Config;
use crate::services::{SearchOrchestrator, fetch_page};

pub async fn cmd_trending(config: &Config, limit: Option<u32>) -> anyhow::Result<()> {
    let client = giphy_client(config)?;
    let feed = SearchOrchestrator::new(limit.unwrap_or(config.giphy.default_limit));

    let page = fetch_page(&client, &feed.next_request())
        .await
        .context("Could not fetch trending GIFs")?;

    if page.data.is_empty() {
        println!("No trending GIFs right now.");
        return Ok(());
    }

    println!("Trending GIFs:");
    println!("{:-<60}", "");
    print_gifs(&page.data);

    Ok(())
}
