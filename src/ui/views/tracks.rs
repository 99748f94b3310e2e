//! The vertical track listing of an opened playlist.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::utils;

use super::super::App;

pub(crate) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    if app.tracks.loading {
        let loading = Paragraph::new("Loading songs...").alignment(Alignment::Center);
        f.render_widget(loading, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tracks
        .items
        .iter()
        .map(|track| {
            ListItem::new(format!(
                " ♪  {} - {}",
                track.name,
                utils::join_artists(&track.artists)
            ))
            .style(Style::default().fg(app.theme.title_fg))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(format!(" Playlist: {} ", app.tracks.playlist_name)),
        )
        .highlight_style(Style::default().bg(app.theme.accent).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.tracks.list_state);
}
