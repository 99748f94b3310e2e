use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{Track, TrackObject},
    warning,
};

/// Retrieves full metadata for a single track.
///
/// The generation workflow calls this once per added track in a sequential
/// loop, which makes it the endpoint most likely to hit the rate limiter;
/// 429 responses are waited out according to the `Retry-After` header
/// before retrying the request.
pub async fn get_track(token: &str, track_id: &str) -> Result<Track, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/tracks/{id}",
            uri = &config::spotify_apiurl(),
            id = track_id
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(1);
            if retry_after <= 120 {
                sleep(Duration::from_secs(retry_after)).await;
                continue;
            }
            warning!(
                "Retry after has reached an abnormal high of {} seconds.",
                retry_after
            );
        }

        let response = response.error_for_status()?;
        let obj = response.json::<TrackObject>().await?;

        // a directly addressed track always carries its id back
        return Ok(Track::from_object(obj).unwrap_or_else(|| Track {
            id: track_id.to_string(),
            uri: format!("spotify:track:{}", track_id),
            name: String::new(),
            artists: Vec::new(),
            url: format!("https://open.spotify.com/track/{}", track_id),
            art_url: None,
        }));
    }
}
