//! # API Module
//!
//! HTTP endpoints for the temporary local server the authentication flow
//! brings up. Two routes exist:
//!
//! - [`callback`] - receives the OAuth redirect from Spotify's authorization
//!   server and completes the code-for-token exchange
//! - [`health`] - a trivial liveness probe returning status and version
//!
//! The server only runs for the duration of `juno auth`; nothing else in the
//! application serves HTTP.
//!
//! ## Related Modules
//!
//! - [`crate::server`] - router construction and listener lifecycle
//! - [`crate::spotify::auth`] - the consent flow that spawns the server

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
