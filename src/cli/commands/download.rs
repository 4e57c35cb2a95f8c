use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

use super::giphy_client;
use crate::clients::{GifProvider, GiphyClient};
use crate::config::Config;

pub async fn cmd_download(
    config: &Config,
    gif_id: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let client = giphy_client(config)?;
    let (path, size) = download_gif(&client, gif_id, output.as_deref()).await?;

    println!("Saved {} ({size} bytes)", path.display());
    Ok(())
}

/// Fetches the original rendition of `gif_id` and writes it to `output`, or
/// to a file named after the GIF title.
async fn download_gif(
    client: &GiphyClient,
    gif_id: &str,
    output: Option<&Path>,
) -> anyhow::Result<(PathBuf, usize)> {
    let gif = client
        .get_gif(gif_id)
        .await
        .with_context(|| format!("Could not look up GIF {gif_id}"))?;

    if gif.images.original.url.is_empty() {
        anyhow::bail!("GIF {gif_id} has no downloadable rendition");
    }

    let bytes = client
        .http()
        .get(&gif.images.original.url)
        .send()
        .await?
        .error_for_status()
        .context("Could not download GIF")?
        .bytes()
        .await?;

    let path = output.map_or_else(|| PathBuf::from(gif.download_file_name()), Path::to_path_buf);
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(gif_id, bytes = bytes.len(), "Downloaded GIF");
    Ok((path, bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GiphyConfig;
    use axum::{Json, Router, extract::Path as UrlPath, routing::get};
    use serde_json::{Value, json};

    const GIF_BYTES: &[u8] = b"GIF89a-test";

    async fn spawn_giphy() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let media_url = format!("{base}/media/cat.gif");
        let app = Router::new()
            .route(
                "/v1/gifs/{id}",
                get(move |UrlPath(id): UrlPath<String>| {
                    let media_url = media_url.clone();
                    async move {
                        Json::<Value>(json!({
                            "data": {
                                "id": id,
                                "title": "Happy Cat",
                                "images": { "original": { "url": media_url } }
                            }
                        }))
                    }
                }),
            )
            .route("/media/cat.gif", get(|| async { GIF_BYTES }));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        base
    }

    #[tokio::test]
    async fn test_download_writes_original_rendition() {
        let base_url = spawn_giphy().await;
        let config = GiphyConfig {
            api_key: "key".to_string(),
            base_url,
            ..GiphyConfig::default()
        };
        let client = GiphyClient::with_shared_client(reqwest::Client::new(), &config);

        let output = std::env::temp_dir().join(format!("moodgif-{}.gif", uuid::Uuid::new_v4()));
        let (path, size) = download_gif(&client, "cat1", Some(output.as_path())).await.unwrap();

        assert_eq!(path, output);
        assert_eq!(size, GIF_BYTES.len());
        assert_eq!(tokio::fs::read(&output).await.unwrap(), GIF_BYTES);

        tokio::fs::remove_file(&output).await.unwrap();
    }
}
