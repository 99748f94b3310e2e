//! Configuration management for the JUNO playlist terminal.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the platform's local data
//! directory. Three values are credentials the application cannot run
//! without (client id, client secret, redirect URI); everything else has a
//! built-in default targeting the public Spotify endpoints and only needs to
//! be set to point the client somewhere else.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (for the non-credential values)

use dotenv;
use std::{env, path::PathBuf};

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// OAuth scopes requested during the consent flow.
///
/// `user-top-read` is included because the generation fallback reads the
/// user's top tracks when a genre search comes back empty.
const DEFAULT_SCOPE: &str =
    "user-library-read playlist-modify-public playlist-read-private user-top-read";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `juno/.env`. A missing file is not an error;
/// the credentials may just as well come from the process environment and
/// are checked separately by [`ensure_credentials`].
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/juno/.env`
/// - macOS: `~/Library/Application Support/juno/.env`
/// - Windows: `%LOCALAPPDATA%/juno/.env`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("juno/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

/// Verifies that the required Spotify credentials are present.
///
/// The application refuses to bring up any surface (CLI command or TUI)
/// without a client id, a client secret and a redirect URI, so `main` calls
/// this right after [`load_env`] and aborts on the first missing value.
///
/// # Returns
///
/// Returns `Ok(())` when all three credentials are set, or the name of the
/// first missing environment variable as the error value.
pub fn ensure_credentials() -> Result<(), String> {
    for var in [
        "SPOTIFY_API_AUTH_CLIENT_ID",
        "SPOTIFY_API_AUTH_CLIENT_SECRET",
        "SPOTIFY_API_REDIRECT_URI",
    ] {
        if env::var(var).map(|v| v.trim().is_empty()).unwrap_or(true) {
            return Err(var.to_string());
        }
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not
/// set. [`ensure_credentials`] runs before any surface, so reaching this
/// panic indicates a programming error rather than a user mistake.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is
/// not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// This must match the redirect URI registered in the Spotify application
/// settings and is where the local callback server receives the
/// authorization code.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the server address for the local OAuth callback server.
///
/// Defaults to `127.0.0.1:8888`, which matches the default redirect URI in
/// `.env.example`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API scope permissions requested during OAuth.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}
