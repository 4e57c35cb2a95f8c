use anyhow::Context;

use super::giphy_client;
use crate::clients::GifProvider;
use crate::config::Config;

pub async fn cmd_share(config: &Config, gif_id: &str) -> anyhow::Result<()> {
    let client = giphy_client(config)?;
    let gif = client
        .get_gif(gif_id)
        .await
        .with_context(|| format!("Could not look up GIF {gif_id}"))?;

    println!("{}", gif.share_text());
    println!("{}", gif.url);

    Ok(())
}
