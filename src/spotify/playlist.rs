use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        PlaylistSummary, PlaylistTracksResponse, Track, UserPlaylistsResponse,
    },
};

/// How many playlists one listing call asks for.
pub const PLAYLIST_PAGE_LIMIT: u32 = 50;

/// Creates a public playlist for the given user.
pub async fn create(
    token: &str,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Generated with JUNO".to_string(),
        public: true,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds track uris to a playlist in a single batch.
///
/// The caller is expected to have clamped the batch with
/// `utils::cap_track_batch`; the endpoint rejects more than 100 uris.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&AddTracksRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}

/// Retrieves the user's playlists as summaries, up to
/// [`PLAYLIST_PAGE_LIMIT`] at a time.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
pub async fn user_playlists(
    token: &str,
    limit: u32,
) -> Result<Vec<PlaylistSummary>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/playlists?limit={limit}",
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
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<UserPlaylistsResponse>().await?;

        return Ok(res
            .items
            .into_iter()
            .map(PlaylistSummary::from_object)
            .collect());
    }
}

/// Retrieves a playlist's track listing in one call.
///
/// Items without a playable track (removed or local entries) are skipped
/// instead of failing the listing.
pub async fn playlist_tracks(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<PlaylistTracksResponse>().await?;

    Ok(res
        .items
        .into_iter()
        .filter_map(|item| item.track)
        .filter_map(Track::from_object)
        .collect())
}
