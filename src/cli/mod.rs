//! # CLI Module
//!
//! One handler per subcommand, each a thin layer over the Spotify client,
//! the generation workflow and the export writer. The handlers own the
//! terminal presentation of their command: indicatif spinners while a remote
//! call is outstanding, tabled tables for listings, and the crate's status
//! macros for everything else.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth consent flow, prints the authenticated account
//! - [`generate`] - one-shot playlist generation with phase status text
//! - [`playlists`] - table of the user's playlists
//! - [`tracks`] - table of one playlist's track listing
//! - [`play`] - resolve a track on YouTube and open the default browser
//!
//! ## Error Presentation
//!
//! Empty results and recoverable remote failures surface as `warning!`
//! lines and leave the process alive with exit code 0; a missing token
//! cache is fatal for every command except `auth` and points the user at
//! it. Nothing here pops interactive prompts.

mod auth;
mod generate;
mod play;
mod playlists;
mod tracks;

pub use auth::auth;
pub use generate::generate;
pub use play::play;
pub use playlists::playlists;
pub use tracks::tracks;
