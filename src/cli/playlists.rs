use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::TokenManager,
    spotify::{self, playlist::PLAYLIST_PAGE_LIMIT},
    types::PlaylistTableRow,
    warning,
};

pub async fn playlists() {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run juno auth\n Error: {}",
                e
            );
        }
    };
    let token = token_mgr.get_valid_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match spotify::playlist::user_playlists(&token, PLAYLIST_PAGE_LIMIT).await {
        Ok(summaries) => {
            pb.finish_and_clear();

            let rows: Vec<PlaylistTableRow> = summaries
                .into_iter()
                .map(|s| PlaylistTableRow {
                    name: s.name,
                    tracks: s.total_tracks,
                    // missing artwork renders as a placeholder cell
                    cover: s.cover_url.unwrap_or_else(|| "—".to_string()),
                })
                .collect();

            let table = Table::new(rows);
            println!("{}", table);
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to load playlists. Err: {}", e);
        }
    }
}
