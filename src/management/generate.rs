use std::path::PathBuf;

use crate::{Res, export, management::TokenManager, spotify, types::Track, utils};

/// How many tracks a genre search asks for.
pub const GENRE_SEARCH_LIMIT: u32 = 7;

/// How many of the user's top tracks the fallback path draws on. The
/// fallback is deliberately broader than the genre path since it samples a
/// ranked personal list instead of an open search.
pub const TOP_TRACKS_LIMIT: u32 = 30;

/// Validated input of one generation run.
///
/// Mood and energy are carried for status output; the search endpoint has
/// no tuning parameters, so they stay advisory.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub genre: String,
    pub mood: f64,
    pub energy: f64,
    pub name: String,
}

impl GenerateRequest {
    /// Builds a request from raw form/flag input, coercing the tuning
    /// fields as [`utils::parse_tuning`] does.
    pub fn from_raw(genre: &str, mood_raw: &str, energy_raw: &str, name: &str) -> GenerateRequest {
        GenerateRequest {
            genre: genre.trim().to_string(),
            mood: utils::parse_tuning(mood_raw),
            energy: utils::parse_tuning(energy_raw),
            name: name.trim().to_string(),
        }
    }
}

/// Progressive status reported while a generation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratePhase {
    Searching,
    FallingBack,
    Creating,
    Saving,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub playlist_id: String,
    pub playlist_name: String,
    pub tracks: Vec<Track>,
    pub export_path: PathBuf,
}

/// Runs the whole generation workflow: genre search, top-tracks fallback,
/// playlist creation, capped track add, sequential detail fetch and CSV
/// export. `on_phase` fires once per phase transition so the caller can
/// surface progress however it likes (spinner text, TUI status line).
///
/// When both the genre search and the fallback come back empty the run
/// aborts before anything is created: no playlist, no file.
pub async fn generate(
    req: &GenerateRequest,
    mut on_phase: impl FnMut(GeneratePhase),
) -> Res<GenerateOutcome> {
    let mut token_mgr = TokenManager::load()
        .await
        .map_err(|e| format!("failed to load token ({}); run `juno auth` first", e))?;
    let token = token_mgr.get_valid_token().await;

    on_phase(GeneratePhase::Searching);
    let mut found = spotify::search::tracks_by_genre(&token, &req.genre, GENRE_SEARCH_LIMIT).await?;

    if found.is_empty() {
        on_phase(GeneratePhase::FallingBack);
        found = spotify::search::top_tracks(&token, TOP_TRACKS_LIMIT).await?;
    }

    if found.is_empty() {
        return Err("no tracks found for this genre and no top tracks to fall back on".into());
    }

    on_phase(GeneratePhase::Creating);
    let user = spotify::user::current_user(&token).await?;
    let playlist = spotify::playlist::create(&token, &user.id, &req.name).await?;

    let uris: Vec<String> = found.iter().map(|t| t.uri.clone()).collect();
    let batch = utils::cap_track_batch(&uris);
    spotify::playlist::add_tracks(&token, &playlist.id, batch.to_vec()).await?;

    on_phase(GeneratePhase::Saving);

    // one detail fetch per added track, issued sequentially
    let added = &found[..batch.len()];
    let mut detailed: Vec<Track> = Vec::with_capacity(added.len());
    for track in added {
        let token = token_mgr.get_valid_token().await;
        detailed.push(spotify::track::get_track(&token, &track.id).await?);
    }

    let export_path = export::write_export(&playlist.name, &detailed).await?;

    Ok(GenerateOutcome {
        playlist_id: playlist.id,
        playlist_name: playlist.name,
        tracks: detailed,
        export_path,
    })
}
