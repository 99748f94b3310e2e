//! Event distribution for the interface.
//!
//! [`apply`] is the single place application state changes: key events are
//! routed to the active view's handler, background results are checked
//! against the current view epoch before they may touch state, and status
//! messages land in the transient status line. Rendering happens after
//! every applied event, in the caller's loop.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    management::{GeneratePhase, GenerateRequest},
    types::{PlaylistSummary, Track},
};

use super::{App, CoverArt, MainView, TracksState, commands::UiCommand, views::grid};

#[derive(Debug)]
pub(crate) enum UiEvent {
    Key(KeyEvent),
    Tick,

    PlaylistsLoaded {
        epoch: u64,
        playlists: Vec<PlaylistSummary>,
    },
    CoverLoaded {
        epoch: u64,
        playlist_id: String,
        art: CoverArt,
    },
    TracksLoaded {
        epoch: u64,
        tracks: Vec<Track>,
    },

    GeneratePhaseChanged {
        epoch: u64,
        phase: GeneratePhase,
    },
    GenerateFinished {
        epoch: u64,
        name: String,
        tracks: Vec<Track>,
        export_path: PathBuf,
    },
    GenerateFailed {
        epoch: u64,
        message: String,
    },

    Status(String),
    Exit,
}

/// Applies one event to the application state.
pub(crate) fn apply(app: &mut App, event: UiEvent) {
    match event {
        UiEvent::Key(key) => handle_key(app, key),
        UiEvent::Tick => {}

        UiEvent::PlaylistsLoaded { epoch, playlists } => {
            // results for a dismantled view are dropped, never rendered
            if epoch != app.epoch {
                return;
            }
            app.playlists.loading = false;
            app.playlists.items = playlists;
            app.playlists.selected = 0;
        }
        UiEvent::CoverLoaded {
            epoch,
            playlist_id,
            art,
        } => {
            if epoch != app.epoch {
                return;
            }
            app.playlists.art.insert(playlist_id, art);
        }
        UiEvent::TracksLoaded { epoch, tracks } => {
            if epoch != app.epoch {
                return;
            }
            app.tracks.loading = false;
            app.tracks.items = tracks;
            let initial = if app.tracks.items.is_empty() {
                None
            } else {
                Some(0)
            };
            app.tracks.list_state.select(initial);
        }

        UiEvent::GeneratePhaseChanged { epoch, phase } => {
            if epoch != app.epoch {
                return;
            }
            app.status = Some(
                match phase {
                    GeneratePhase::Searching => "Searching tracks...",
                    GeneratePhase::FallingBack => "No tracks found. Using top tracks...",
                    GeneratePhase::Creating => "Creating playlist...",
                    GeneratePhase::Saving => "Saving playlist...",
                }
                .to_string(),
            );
        }
        UiEvent::GenerateFinished {
            epoch,
            name,
            tracks,
            export_path,
        } => {
            if epoch != app.epoch {
                return;
            }
            app.generating = false;
            app.status = Some(format!("Saved playlist to {}", export_path.display()));

            let mut state = TracksState {
                playlist_name: name,
                items: tracks,
                ..TracksState::default()
            };
            if !state.items.is_empty() {
                state.list_state.select(Some(0));
            }
            app.tracks = state;
            app.main_view = MainView::Tracks;
        }
        UiEvent::GenerateFailed { epoch, message } => {
            if epoch != app.epoch {
                return;
            }
            app.generating = false;
            app.status = Some(message);
        }

        UiEvent::Status(message) => app.status = Some(message),
        UiEvent::Exit => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl-C quits from anywhere, including the form
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        let _ = app.event_tx.send(UiEvent::Exit);
        return;
    }

    match app.main_view {
        MainView::Playlists => playlists_key(app, key),
        MainView::Tracks => tracks_key(app, key),
        MainView::Form => form_key(app, key),
    }
}

fn playlists_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            let _ = app.event_tx.send(UiEvent::Exit);
        }
        KeyCode::Char('g') | KeyCode::Char('2') => {
            app.main_view = MainView::Form;
        }
        KeyCode::Char('r') | KeyCode::Char('1') => app.enter_playlists(),

        KeyCode::Left | KeyCode::Char('h') => {
            app.playlists.selected = grid::left(app.playlists.selected);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.playlists.selected = grid::right(app.playlists.selected, app.playlists.items.len());
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.playlists.selected = grid::up(app.playlists.selected);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.playlists.selected = grid::down(app.playlists.selected, app.playlists.items.len());
        }

        KeyCode::Enter => {
            if let Some(playlist) = app.playlists.items.get(app.playlists.selected) {
                let (id, name) = (playlist.id.clone(), playlist.name.clone());
                app.open_playlist(id, name);
            }
        }
        _ => {}
    }
}

fn tracks_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            let _ = app.event_tx.send(UiEvent::Exit);
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('1') => app.enter_playlists(),
        KeyCode::Char('g') | KeyCode::Char('2') => {
            app.main_view = MainView::Form;
        }

        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.tracks.items.len();
            if len > 0 {
                let next = match app.tracks.list_state.selected() {
                    Some(i) if i + 1 < len => i + 1,
                    Some(i) => i,
                    None => 0,
                };
                app.tracks.list_state.select(Some(next));
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if !app.tracks.items.is_empty() {
                let previous = match app.tracks.list_state.selected() {
                    Some(i) => i.saturating_sub(1),
                    None => 0,
                };
                app.tracks.list_state.select(Some(previous));
            }
        }

        KeyCode::Enter => {
            if let Some(track) = app
                .tracks
                .list_state
                .selected()
                .and_then(|i| app.tracks.items.get(i))
            {
                let track = track.clone();
                app.dispatch(UiCommand::ActivateTrack { track });
            }
        }
        _ => {}
    }
}

fn form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.enter_playlists(),
        KeyCode::Tab | KeyCode::Down => app.form.focus = (app.form.focus + 1) % 4,
        KeyCode::BackTab | KeyCode::Up => app.form.focus = (app.form.focus + 3) % 4,
        KeyCode::Enter => submit_form(app),
        _ => {
            let event = crossterm::event::Event::Key(key);
            app.form.focused_mut().handle_event(&event);
        }
    }
}

fn submit_form(app: &mut App) {
    if app.generating {
        return;
    }

    let request = GenerateRequest::from_raw(
        app.form.genre.value(),
        app.form.mood.value(),
        app.form.energy.value(),
        app.form.name.value(),
    );

    if request.genre.is_empty() || request.name.is_empty() {
        app.status = Some("Genre and playlist name must not be empty.".to_string());
        return;
    }

    app.generating = true;
    app.status = Some("Loading tracks...".to_string());
    app.dispatch(UiCommand::Generate {
        epoch: app.epoch,
        request,
    });
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use tokio::runtime::Handle;

    use super::*;

    fn summary(id: &str) -> PlaylistSummary {
        PlaylistSummary {
            id: id.to_string(),
            name: format!("Playlist {}", id),
            cover_url: None,
            total_tracks: 3,
        }
    }

    #[tokio::test]
    async fn stale_listing_results_are_dropped() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(Handle::current(), tx);
        app.epoch = 3;
        app.playlists.loading = true;

        apply(
            &mut app,
            UiEvent::PlaylistsLoaded {
                epoch: 2,
                playlists: vec![summary("a")],
            },
        );
        assert!(app.playlists.items.is_empty());
        assert!(app.playlists.loading);

        apply(
            &mut app,
            UiEvent::PlaylistsLoaded {
                epoch: 3,
                playlists: vec![summary("a")],
            },
        );
        assert_eq!(app.playlists.items.len(), 1);
        assert!(!app.playlists.loading);
    }

    #[tokio::test]
    async fn stale_cover_results_never_enter_the_cache() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(Handle::current(), tx);
        app.epoch = 5;

        apply(
            &mut app,
            UiEvent::CoverLoaded {
                epoch: 4,
                playlist_id: "a".to_string(),
                art: CoverArt::Placeholder,
            },
        );
        assert!(app.playlists.art.is_empty());

        apply(
            &mut app,
            UiEvent::CoverLoaded {
                epoch: 5,
                playlist_id: "a".to_string(),
                art: CoverArt::Placeholder,
            },
        );
        assert!(app.playlists.art.contains_key("a"));
    }

    #[tokio::test]
    async fn failed_cover_blanks_only_its_own_cell() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(Handle::current(), tx);

        apply(
            &mut app,
            UiEvent::PlaylistsLoaded {
                epoch: 0,
                playlists: vec![summary("a"), summary("b")],
            },
        );
        apply(
            &mut app,
            UiEvent::CoverLoaded {
                epoch: 0,
                playlist_id: "a".to_string(),
                art: CoverArt::Placeholder,
            },
        );
        apply(
            &mut app,
            UiEvent::CoverLoaded {
                epoch: 0,
                playlist_id: "b".to_string(),
                art: CoverArt::Loaded(vec![0xFF]),
            },
        );

        // the failed fetch blanks one cell; the listing itself is untouched
        assert_eq!(app.playlists.items.len(), 2);
        assert!(matches!(
            app.playlists.art.get("a"),
            Some(CoverArt::Placeholder)
        ));
        assert!(matches!(
            app.playlists.art.get("b"),
            Some(CoverArt::Loaded(_))
        ));
    }

    #[tokio::test]
    async fn stale_generation_outcome_does_not_steal_the_view() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(Handle::current(), tx);
        app.epoch = 2;
        app.generating = true;

        apply(
            &mut app,
            UiEvent::GenerateFinished {
                epoch: 1,
                name: "Old Mix".to_string(),
                tracks: vec![],
                export_path: std::path::PathBuf::from("Old_Mix.csv"),
            },
        );
        assert_eq!(app.main_view, MainView::Playlists);
        assert!(app.generating);
    }

    #[tokio::test]
    async fn finished_generation_switches_to_the_track_listing() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(Handle::current(), tx);
        app.main_view = MainView::Form;
        app.generating = true;

        apply(
            &mut app,
            UiEvent::GenerateFinished {
                epoch: 0,
                name: "New Mix".to_string(),
                tracks: vec![],
                export_path: std::path::PathBuf::from("New_Mix.csv"),
            },
        );
        assert_eq!(app.main_view, MainView::Tracks);
        assert_eq!(app.tracks.playlist_name, "New Mix");
        assert!(!app.generating);
    }
}
