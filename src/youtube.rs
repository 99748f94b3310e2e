//! Video lookup against the public YouTube results page.
//!
//! The Remote Video Search collaborator: resolves a free-text query to the
//! single best-matching watch URL. YouTube's search endpoint requires an API
//! key, so this fetches the public results page and extracts the first
//! `videoId` from the embedded result data instead; the first occurrence is
//! the top-ranked match. No match resolves to `None`, never an error.

use reqwest::Client;

use crate::{types::Track, utils};

const RESULTS_URL: &str = "https://www.youtube.com/results";
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Resolves a free-text query to the top matching watch URL.
pub async fn search_video(query: &str) -> Result<Option<String>, reqwest::Error> {
    let client = Client::new();
    let body = client
        .get(RESULTS_URL)
        .query(&[("search_query", query)])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(extract_first_video_id(&body).map(|id| format!("{}{}", WATCH_URL, id)))
}

/// Resolves a track to its top video match, building the query from the
/// track name, its artists and a fixed `audio` suffix.
pub async fn resolve_track(track: &Track) -> Result<Option<String>, reqwest::Error> {
    let query = utils::video_query(&track.name, &track.artists);
    search_video(&query).await
}

/// Pulls the first `"videoId":"..."` value out of a results page body.
///
/// Returns `None` when the marker is absent or the candidate id contains
/// characters a video id never has, which guards against matching inside
/// unrelated script content.
pub fn extract_first_video_id(body: &str) -> Option<String> {
    let marker = "\"videoId\":\"";
    let start = body.find(marker)? + marker.len();
    let rest = &body[start..];
    let end = rest.find('"')?;
    let id = &rest[..end];

    if id.is_empty()
        || !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }

    Some(id.to_string())
}
