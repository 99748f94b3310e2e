//! # Spotify Integration Module
//!
//! This module is the Remote Music Client: every HTTP interaction with the
//! Spotify Web API lives here, behind per-endpoint async functions that the
//! CLI handlers, the TUI command dispatch and the generation workflow call.
//!
//! ## Architecture
//!
//! ```text
//! Surfaces (CLI, TUI) and management::generate
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 authorization code + PKCE)
//!     ├── User (current profile)
//!     ├── Search (genre search, top tracks)
//!     ├── Playlist (create, add tracks, list, playlist tracks)
//!     └── Track (single-track metadata)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 authorization-code flow with a PKCE
//! challenge on top. The application holds a client secret (sent as HTTP
//! basic auth on the token endpoints), and the PKCE verifier additionally
//! binds the callback code to this process:
//!
//! 1. **Code Verifier Generation**: cryptographically random verifier
//! 2. **Challenge Creation**: SHA-256 challenge derived from the verifier
//! 3. **Authorization Request**: browser consent with the challenge attached
//! 4. **Local Callback**: temporary HTTP server receives the code
//! 5. **Token Exchange**: code + verifier + client secret for a token
//! 6. **Token Storage**: persisted for future runs, refreshed transparently
//!
//! ## Error Handling
//!
//! - 502 Bad Gateway responses are retried after a 10-second delay on the
//!   listing endpoints, which Spotify occasionally serves under load.
//! - 429 Too Many Requests honours the `Retry-After` header on the
//!   single-track endpoint, the one hit in a sequential loop during
//!   generation.
//! - Everything else propagates as `reqwest::Error` (HTTP layer) or
//!   `String` (token management) to the calling surface.
//!
//! ## API Coverage
//!
//! - `GET /me` - current user profile
//! - `GET /search?type=track` - genre-filtered track search
//! - `GET /me/top/tracks` - the user's ranked top tracks
//! - `POST /users/{user_id}/playlists` - create a public playlist
//! - `POST /playlists/{playlist_id}/tracks` - add up to 100 uris
//! - `GET /tracks/{id}` - single-track metadata
//! - `GET /me/playlists` - the user's playlists (50 per listing)
//! - `GET /playlists/{id}/tracks` - a playlist's track listing
//! - `POST /api/token` - token exchange and refresh

pub mod auth;
pub mod playlist;
pub mod search;
pub mod track;
pub mod user;
