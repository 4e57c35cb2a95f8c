use super::ApiError;
use crate::models::NewFavorite;

const MAX_GIF_ID_LEN: usize = 128;

pub fn validate_gif_id(gif_id: &str) -> Result<&str, ApiError> {
    let trimmed = gif_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("gifId cannot be empty"));
    }

    if trimmed.len() > MAX_GIF_ID_LEN {
        return Err(ApiError::validation(format!(
            "gifId must be {MAX_GIF_ID_LEN} characters or less"
        )));
    }

    Ok(trimmed)
}

pub fn validate_gif_url(gif_url: &str) -> Result<&str, ApiError> {
    let trimmed = gif_url.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|_| ApiError::validation(format!("Invalid gifUrl: {gif_url}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::validation("gifUrl must be an http(s) URL"));
    }

    Ok(trimmed)
}

pub fn validate_new_favorite(favorite: NewFavorite) -> Result<NewFavorite, ApiError> {
    let gif_id = validate_gif_id(&favorite.gif_id)?.to_string();
    let gif_url = validate_gif_url(&favorite.gif_url)?.to_string();

    Ok(NewFavorite {
        gif_id,
        gif_url,
        title: favorite.title.map(|t| t.trim().to_string()),
        user_id: favorite.user_id,
    })
}
