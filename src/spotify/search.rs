use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{SearchTracksResponse, TopTracksResponse, Track},
};

/// Searches tracks carrying the given genre tag.
///
/// Issues a track search with a `genre:"..."` filter and maps the results
/// into the domain shape, dropping entries without an id. An empty result
/// is not an error; the generation workflow decides what to do with it.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
pub async fn tracks_by_genre(
    token: &str,
    genre: &str,
    limit: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    loop {
        let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[
                ("q", format!("genre:\"{}\"", genre)),
                ("type", "track".to_string()),
                ("limit", limit.to_string()),
            ])
            .bearer_auth(token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<SearchTracksResponse>().await?;

        return Ok(res
            .tracks
            .items
            .into_iter()
            .filter_map(Track::from_object)
            .collect());
    }
}

/// Retrieves the user's top tracks, most-listened first.
///
/// Used as the fallback source when a genre search comes back empty.
/// Requires the `user-top-read` scope.
pub async fn top_tracks(token: &str, limit: u32) -> Result<Vec<Track>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/top/tracks?limit={limit}",
            uri = &config::spotify_apiurl(),
            limit = limit
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err);
                }
            },
            Err(err) => {
                return Err(err);
            }
        };

        let res = response.json::<TopTracksResponse>().await?;

        return Ok(res
            .items
            .into_iter()
            .filter_map(Track::from_object)
            .collect());
    }
}
