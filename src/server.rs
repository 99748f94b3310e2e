//! Local HTTP server for the OAuth consent flow.
//!
//! Brought up by `juno auth` only; serves the `/callback` route Spotify
//! redirects to plus a `/health` probe, bound to the configured loopback
//! address. The in-flight PKCE state travels into the callback handler as an
//! axum extension.

use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use crate::{api, config, error, types::PkceToken};

/// Binds the callback server and serves until the process ends.
///
/// The consent flow spawns this as a background task; there is no shutdown
/// of its own because the whole process exits once authentication finishes.
pub async fn start_api_server(state: Arc<Mutex<Option<PkceToken>>>) {
    let router = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Invalid SERVER_ADDRESS: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot bind the callback server on {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Callback server failed: {}", e);
    }
}
