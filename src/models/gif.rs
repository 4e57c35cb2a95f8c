//! Typed view over the parts of a GIPHY listing response that clients read.
//!
//! The proxy relays the raw JSON; these types are only used where results are
//! consumed (the terminal client and the feed state machine). Unknown fields
//! are ignored and missing ones default, so a sparse payload still parses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gif {
    pub id: String,
    pub title: String,
    /// Provider page for the GIF, used when sharing.
    pub url: String,
    pub images: GifImages,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GifImages {
    pub fixed_height: FixedHeightImage,
    pub original: OriginalImage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedHeightImage {
    pub url: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginalImage {
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total_count: u64,
    pub count: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GifPage {
    pub data: Vec<Gif>,
    pub pagination: Pagination,
}

impl Gif {
    /// File name used when saving the original rendition to disk.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        let stem: String = self
            .title
            .trim()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let stem = stem.trim();
        if stem.is_empty() {
            "gif.gif".to_string()
        } else {
            format!("{stem}.gif")
        }
    }

    /// Text offered when sharing a GIF.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!("I liked this GIF: {}", self.title)
    }
}

impl GifPage {
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_sparse_provider_payload() {
        let value = serde_json::json!({
            "data": [
                {
                    "id": "abc",
                    "title": "Happy Dance",
                    "url": "https://giphy.com/gifs/abc",
                    "rating": "g",
                    "images": {
                        "original": { "url": "https://media.giphy.com/abc.gif", "size": "100" },
                        "fixed_height": { "url": "https://media.giphy.com/abc-200.gif", "width": "356", "height": "200" }
                    }
                },
                { "id": "def" }
            ],
            "pagination": { "total_count": 4213, "count": 2, "offset": 0 },
            "meta": { "status": 200 }
        });

        let page = GifPage::from_value(value).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].images.original.url, "https://media.giphy.com/abc.gif");
        assert_eq!(page.data[0].images.fixed_height.height, "200");
        assert_eq!(page.data[1].title, "");
        assert_eq!(page.pagination.total_count, 4213);
    }

    #[test]
    fn test_download_file_name() {
        let gif = Gif {
            title: "Happy Dance GIF by Studio/Name".to_string(),
            ..Default::default()
        };
        assert_eq!(gif.download_file_name(), "Happy Dance GIF by Studio_Name.gif");

        let untitled = Gif::default();
        assert_eq!(untitled.download_file_name(), "gif.gif");
    }
}
