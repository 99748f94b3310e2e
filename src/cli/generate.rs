use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    management::{self, GeneratePhase, GenerateRequest},
    success, warning,
};

pub async fn generate(genre: String, mood: Option<String>, energy: Option<String>, name: String) {
    let req = GenerateRequest::from_raw(
        &genre,
        mood.as_deref().unwrap_or(""),
        energy.as_deref().unwrap_or(""),
        &name,
    );

    if req.genre.is_empty() || req.name.is_empty() {
        warning!("Genre and playlist name must not be empty.");
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = management::generate(&req, |phase| {
        pb.set_message(match phase {
            GeneratePhase::Searching => format!(
                "Searching tracks for genre '{}' (mood {:.1}, energy {:.1})...",
                req.genre, req.mood, req.energy
            ),
            GeneratePhase::FallingBack => "No tracks found. Using your top tracks...".to_string(),
            GeneratePhase::Creating => format!("Creating playlist '{}'...", req.name),
            GeneratePhase::Saving => "Saving playlist...".to_string(),
        });
    })
    .await;

    pb.finish_and_clear();

    match result {
        Ok(outcome) => {
            success!(
                "Playlist '{}' created with {} tracks.",
                outcome.playlist_name,
                outcome.tracks.len()
            );
            success!("Saved playlist to {}", outcome.export_path.display());
        }
        Err(e) => warning!("No playlist created: {}", e),
    }
}
