use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, management::TokenManager, spotify, types::TrackTableRow, utils, warning,
};

pub async fn tracks(playlist_id: String) {
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
    pb.set_message("Loading songs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match spotify::playlist::playlist_tracks(&token, &playlist_id).await {
        Ok(tracks) => {
            pb.finish_and_clear();

            let rows: Vec<TrackTableRow> = tracks
                .iter()
                .enumerate()
                .map(|(i, t)| TrackTableRow {
                    nr: i + 1,
                    title: t.name.clone(),
                    artists: utils::join_artists(&t.artists),
                    url: t.url.clone(),
                })
                .collect();

            let table = Table::new(rows);
            println!("{}", table);
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to load playlist tracks. Err: {}", e);
        }
    }
}
