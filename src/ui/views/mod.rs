//! Rendering pipeline for the interface.
//!
//! One `draw` entry point splits the frame into header, body and status
//! line and delegates the body to the active view's renderer.

mod form;
pub(crate) mod grid;
mod tracks;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::Paragraph,
};

use super::{App, MainView};

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.main_view {
        MainView::Playlists => grid::draw(f, app, chunks[1]),
        MainView::Tracks => tracks::draw(f, app, chunks[1]),
        MainView::Form => form::draw(f, app, chunks[1]),
    }

    draw_status(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.main_view {
        MainView::Playlists => {
            " JUNO | Your Playlists   [enter] open  [g] generate  [r] reload  [q] quit"
        }
        MainView::Tracks => {
            " JUNO | Songs   [enter] play on YouTube  [esc] back  [g] generate  [q] quit"
        }
        MainView::Form => " JUNO | Generate Playlist   [tab] next field  [enter] generate  [esc] back",
    };

    let header = Paragraph::new(title).style(Style::default().fg(app.theme.accent).bold());
    f.render_widget(header, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let text = app.status.clone().unwrap_or_default();
    let status = Paragraph::new(format!(" {}", text)).style(Style::default().fg(app.theme.status_fg));
    f.render_widget(status, area);
}
