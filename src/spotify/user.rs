use reqwest::Client;

use crate::{config, types::CurrentUserResponse};

/// Retrieves the authenticated user's profile.
///
/// The user id is needed as the owner of newly created playlists; the
/// display name is only used for greeting output.
pub async fn current_user(token: &str) -> Result<CurrentUserResponse, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUserResponse>().await
}
