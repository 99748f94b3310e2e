//! # Interactive terminal interface.
//!
//! The browse-and-generate surface of JUNO, built with `ratatui`.
//!
//! It uses an event-driven architecture where:
//!
//! * The **main thread** owns the terminal, applies events to the
//!   application state and re-draws after every event.
//! * An **input thread** forwards crossterm key events and a **tick
//!   thread** emits a periodic redraw pulse, both over an `std::sync::mpsc`
//!   channel.
//! * **Background tasks** on the tokio runtime perform the network work
//!   (playlist listing, per-cover fetches, track listing, generation,
//!   video resolution) and report back as events.
//!
//! Every view transition increments an epoch; commands carry the epoch they
//! were issued under and the event loop drops results whose epoch no longer
//! matches. A fetch that outlives its view therefore never touches state
//! that belongs to a different screen. The cover-art cache lives inside the
//! playlists view state and is dropped wholesale when the view is
//! re-entered.

mod commands;
mod events;
mod theme;
mod views;

use std::{
    collections::HashMap,
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::ListState};
use tokio::runtime::Handle;
use tui_input::Input;

use crate::{
    Res,
    management::TokenManager,
    types::{PlaylistSummary, Track},
};

use self::{commands::UiCommand, events::UiEvent, theme::Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Playlists,
    Tracks,
    Form,
}

/// Fetched cover image bytes, or the blank stand-in for a missing or
/// failed fetch.
#[derive(Debug)]
pub(crate) enum CoverArt {
    Loaded(Vec<u8>),
    Placeholder,
}

#[derive(Default)]
pub(crate) struct FormState {
    pub genre: Input,
    pub mood: Input,
    pub energy: Input,
    pub name: Input,
    pub focus: usize,
}

impl FormState {
    pub(crate) fn focused_mut(&mut self) -> &mut Input {
        match self.focus {
            0 => &mut self.genre,
            1 => &mut self.mood,
            2 => &mut self.energy,
            _ => &mut self.name,
        }
    }
}

#[derive(Default)]
pub(crate) struct PlaylistsState {
    pub items: Vec<PlaylistSummary>,
    pub selected: usize,
    pub loading: bool,
    /// Cover cache scoped to this listing; replaced together with the view.
    pub art: HashMap<String, CoverArt>,
}

#[derive(Default)]
pub(crate) struct TracksState {
    pub playlist_name: String,
    pub items: Vec<Track>,
    pub list_state: ListState,
    pub loading: bool,
}

/// Application state.
pub(crate) struct App {
    handle: Handle,
    pub event_tx: Sender<UiEvent>,

    pub main_view: MainView,
    pub epoch: u64,
    pub status: Option<String>,
    pub generating: bool,

    pub theme: Theme,
    pub form: FormState,
    pub playlists: PlaylistsState,
    pub tracks: TracksState,
}

impl App {
    pub(crate) fn new(handle: Handle, event_tx: Sender<UiEvent>) -> Self {
        Self {
            handle,
            event_tx,
            main_view: MainView::Playlists,
            epoch: 0,
            status: None,
            generating: false,
            theme: Theme::default(),
            form: FormState::default(),
            playlists: PlaylistsState::default(),
            tracks: TracksState::default(),
        }
    }

    pub(crate) fn dispatch(&self, command: UiCommand) {
        commands::dispatch(&self.handle, command, self.event_tx.clone());
    }

    /// Switches to the playlists view and starts a fresh listing fetch.
    ///
    /// The view is always re-fetched on entry; the previous listing and its
    /// cover cache are dropped here, and the epoch bump retires any fetch
    /// still in flight for the old view.
    pub(crate) fn enter_playlists(&mut self) {
        self.epoch += 1;
        self.generating = false;
        self.main_view = MainView::Playlists;
        self.playlists = PlaylistsState {
            loading: true,
            ..PlaylistsState::default()
        };
        self.dispatch(UiCommand::LoadPlaylists { epoch: self.epoch });
    }

    /// Drills into a playlist's track listing.
    pub(crate) fn open_playlist(&mut self, playlist_id: String, playlist_name: String) {
        self.epoch += 1;
        self.main_view = MainView::Tracks;
        self.tracks = TracksState {
            playlist_name,
            loading: true,
            ..TracksState::default()
        };
        self.dispatch(UiCommand::LoadPlaylistTracks {
            epoch: self.epoch,
            playlist_id,
        });
    }
}

/// Brings up the interface and blocks until the user quits.
///
/// Refuses to start without a cached token, mirroring the fail-fast
/// behaviour of the CLI commands.
pub fn run() -> Res<()> {
    let handle = Handle::current();

    // the event loop blocks this thread; step out of the async context once
    tokio::task::block_in_place(move || {
        handle
            .block_on(TokenManager::load())
            .map_err(|_| String::from("no cached token found; run `juno auth` first"))?;

        let (event_tx, event_rx) = mpsc::channel();
        let mut app = App::new(handle.clone(), event_tx);

        let mut terminal = setup_terminal()?;
        let res = run_loop(&mut terminal, &mut app, event_rx);
        restore_terminal(&mut terminal);

        res
    })
}

/// Prepares the terminal: raw mode plus the alternate screen buffer.
fn setup_terminal() -> Res<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// Best-effort by design; this runs during cleanup where a secondary
/// failure has nowhere useful to go.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Spawns the input and tick threads, kicks off the initial playlist
/// listing and processes events until the user quits.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: Receiver<UiEvent>,
) -> Res<()> {
    // Forward raw key events to the application channel.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(UiEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Periodic tick, effectively the minimum frame rate of the interface.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if tx_tick.send(UiEvent::Tick).is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(250));
        }
    });

    // The interface opens on the playlist listing.
    app.enter_playlists();

    while let Ok(event) = event_rx.recv() {
        if matches!(event, UiEvent::Exit) {
            break;
        }

        events::apply(app, event);

        terminal.draw(|f| views::draw(f, app))?;
    }

    Ok(())
}
