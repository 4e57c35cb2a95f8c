use anyhow::Context;
use tracing::debug;

use super::{giphy_client, print_gifs};
use crate::config::Config;
use crate::emotion::find_emotion;
use crate::services::{SearchOrchestrator, fetch_page};

pub async fn cmd_search(
    config: &Config,
    query: &str,
    emotion: Option<&str>,
    pages: u32,
) -> anyhow::Result<()> {
    let client = giphy_client(config)?;
    let mut feed = SearchOrchestrator::new(config.giphy.default_limit);

    match emotion {
        Some(id) => {
            let entry = find_emotion(id).with_context(|| {
                format!("Unknown emotion '{id}'. Run 'moodgif emotions' to list them")
            })?;
            feed.select_emotion(entry.id, entry.keywords);
        }
        None => feed.search(query),
    }

    if feed.query().trim().is_empty() {
        println!("Nothing to search for, showing trending GIFs.");
    } else {
        println!("Searching for: {}", feed.query());
    }

    for page_number in 0..pages.max(1) {
        if page_number > 0 {
            if !feed.has_more() {
                break;
            }
            feed.load_more();
        }

        let request = feed.next_request();
        debug!(?request, "Fetching page");

        let page = fetch_page(&client, &request)
            .await
            .context("Could not fetch GIFs")?;
        feed.apply(&request, page);
    }

    if feed.gifs().is_empty() {
        println!("No GIFs found.");
        return Ok(());
    }

    println!();
    print_gifs(feed.gifs());

    if feed.has_more() {
        println!();
        println!("More results available, use --pages to fetch further.");
    }

    Ok(())
}
