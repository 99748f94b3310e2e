//! Background command dispatch.
//!
//! Translates [`UiCommand`]s into tasks on the tokio runtime so the event
//! loop never blocks on the network. Each task reports its outcome as one or
//! more [`UiEvent`]s; commands that load view data carry the epoch of the
//! issuing view so stale results can be discarded at delivery.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::{
    Res,
    management::{self, GenerateRequest, TokenManager},
    spotify::{self, playlist::PLAYLIST_PAGE_LIMIT},
    types::{PlaylistSummary, Track},
    utils, youtube,
};

use super::{CoverArt, events::UiEvent};

#[derive(Debug)]
pub(crate) enum UiCommand {
    LoadPlaylists { epoch: u64 },
    LoadPlaylistTracks { epoch: u64, playlist_id: String },
    Generate { epoch: u64, request: GenerateRequest },
    ActivateTrack { track: Track },
}

/// Spawns the background task for one command.
pub(crate) fn dispatch(handle: &Handle, command: UiCommand, event_tx: Sender<UiEvent>) {
    match command {
        UiCommand::LoadPlaylists { epoch } => {
            handle.spawn(async move {
                match load_playlists().await {
                    Ok(playlists) => {
                        spawn_cover_fetches(epoch, &playlists, &event_tx);
                        let _ = event_tx.send(UiEvent::PlaylistsLoaded { epoch, playlists });
                    }
                    Err(e) => {
                        let _ = event_tx
                            .send(UiEvent::Status(format!("Failed to load playlists: {}", e)));
                    }
                }
            });
        }
        UiCommand::LoadPlaylistTracks { epoch, playlist_id } => {
            handle.spawn(async move {
                match load_tracks(&playlist_id).await {
                    Ok(tracks) => {
                        let _ = event_tx.send(UiEvent::TracksLoaded { epoch, tracks });
                    }
                    Err(e) => {
                        let _ =
                            event_tx.send(UiEvent::Status(format!("Failed to load songs: {}", e)));
                    }
                }
            });
        }
        UiCommand::Generate { epoch, request } => {
            handle.spawn(async move {
                let phase_tx = event_tx.clone();
                let result = management::generate(&request, move |phase| {
                    let _ = phase_tx.send(UiEvent::GeneratePhaseChanged { epoch, phase });
                })
                .await;

                match result {
                    Ok(outcome) => {
                        let _ = event_tx.send(UiEvent::GenerateFinished {
                            epoch,
                            name: outcome.playlist_name,
                            tracks: outcome.tracks,
                            export_path: outcome.export_path,
                        });
                    }
                    Err(e) => {
                        let _ = event_tx.send(UiEvent::GenerateFailed {
                            epoch,
                            message: format!("No playlist created: {}", e),
                        });
                    }
                }
            });
        }
        UiCommand::ActivateTrack { track } => {
            handle.spawn(async move {
                match youtube::resolve_track(&track).await {
                    Ok(Some(url)) => {
                        if webbrowser::open(&url).is_err() {
                            let _ = event_tx
                                .send(UiEvent::Status(format!("Failed to open browser for {}", url)));
                        } else {
                            let _ = event_tx.send(UiEvent::Status(format!("Opening {}", url)));
                        }
                    }
                    Ok(None) => {
                        // diagnostic only; activation without a match is a no-op
                        let _ = event_tx.send(UiEvent::Status(format!(
                            "No YouTube result found for: {}",
                            utils::video_query(&track.name, &track.artists)
                        )));
                    }
                    Err(e) => {
                        let _ =
                            event_tx.send(UiEvent::Status(format!("Video search failed: {}", e)));
                    }
                }
            });
        }
    }
}

async fn load_playlists() -> Res<Vec<PlaylistSummary>> {
    let mut token_mgr = TokenManager::load().await?;
    let token = token_mgr.get_valid_token().await;
    Ok(spotify::playlist::user_playlists(&token, PLAYLIST_PAGE_LIMIT).await?)
}

async fn load_tracks(playlist_id: &str) -> Res<Vec<Track>> {
    let mut token_mgr = TokenManager::load().await?;
    let token = token_mgr.get_valid_token().await;
    Ok(spotify::playlist::playlist_tracks(&token, playlist_id).await?)
}

/// One fetch per cover. A failed download only blanks its own cell; the
/// rest of the grid keeps rendering. Playlists without artwork get their
/// placeholder immediately.
fn spawn_cover_fetches(epoch: u64, playlists: &[PlaylistSummary], event_tx: &Sender<UiEvent>) {
    for playlist in playlists {
        let playlist_id = playlist.id.clone();
        let tx = event_tx.clone();

        match playlist.cover_url.clone() {
            Some(url) => {
                tokio::spawn(async move {
                    let art = match fetch_cover(&url).await {
                        Ok(bytes) => CoverArt::Loaded(bytes),
                        Err(_) => CoverArt::Placeholder,
                    };
                    let _ = tx.send(UiEvent::CoverLoaded {
                        epoch,
                        playlist_id,
                        art,
                    });
                });
            }
            None => {
                let _ = tx.send(UiEvent::CoverLoaded {
                    epoch,
                    playlist_id,
                    art: CoverArt::Placeholder,
                });
            }
        }
    }
}

async fn fetch_cover(url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let bytes = reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}
