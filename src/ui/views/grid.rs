//! The playlists grid: a fixed three-column layout over the fetched
//! summaries, with a cover cell per playlist fed from the view-scoped art
//! cache.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::types::PlaylistSummary;

use super::super::{App, CoverArt, theme::Theme};

pub(crate) const GRID_COLUMNS: usize = 3;

const CELL_HEIGHT: u16 = 5;

pub(crate) fn left(selected: usize) -> usize {
    selected.saturating_sub(1)
}

pub(crate) fn right(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if selected + 1 < len {
        selected + 1
    } else {
        selected
    }
}

pub(crate) fn up(selected: usize) -> usize {
    if selected >= GRID_COLUMNS {
        selected - GRID_COLUMNS
    } else {
        selected
    }
}

pub(crate) fn down(selected: usize, len: usize) -> usize {
    if selected + GRID_COLUMNS < len {
        selected + GRID_COLUMNS
    } else {
        selected
    }
}

pub(crate) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    if app.playlists.loading {
        let loading = Paragraph::new("Loading playlists...").alignment(Alignment::Center);
        f.render_widget(loading, area);
        return;
    }
    if app.playlists.items.is_empty() {
        let empty = Paragraph::new("No playlists found.").alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let visible_rows = ((area.height / CELL_HEIGHT).max(1)) as usize;
    let selected_row = app.playlists.selected / GRID_COLUMNS;

    // keep the selected row in the visible window
    let first_row = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };

    for row_offset in 0..visible_rows {
        let row_index = first_row + row_offset;
        if row_index * GRID_COLUMNS >= app.playlists.items.len() {
            break;
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + (row_offset as u16) * CELL_HEIGHT,
            width: area.width,
            height: CELL_HEIGHT,
        };
        if row_area.y + row_area.height > area.y + area.height {
            break;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(row_area);

        for col in 0..GRID_COLUMNS {
            let index = row_index * GRID_COLUMNS + col;
            let Some(playlist) = app.playlists.items.get(index) else {
                break;
            };
            let art = app.playlists.art.get(&playlist.id);
            draw_cell(
                f,
                &app.theme,
                playlist,
                art,
                columns[col],
                index == app.playlists.selected,
            );
        }
    }
}

fn draw_cell(
    f: &mut Frame,
    theme: &Theme,
    playlist: &PlaylistSummary,
    art: Option<&CoverArt>,
    area: Rect,
    selected: bool,
) {
    let border_style = if selected {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };

    let cover = match art {
        Some(CoverArt::Loaded(_)) => {
            Line::from("▗▄▄▖ ♪").style(Style::default().fg(theme.accent))
        }
        // blank placeholder: failed or missing artwork
        Some(CoverArt::Placeholder) => {
            Line::from("      ").style(Style::default().fg(theme.placeholder_fg))
        }
        None => Line::from("......").style(Style::default().fg(theme.placeholder_fg)),
    };

    let text = vec![
        Line::from(playlist.name.clone()).style(Style::default().fg(theme.title_fg)),
        cover,
        Line::from(format!("{} tracks", playlist.total_tracks))
            .style(Style::default().fg(theme.placeholder_fg)),
    ];

    let cell = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(cell, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_navigation_stays_in_bounds() {
        assert_eq!(left(0), 0);
        assert_eq!(left(4), 3);
        assert_eq!(right(0, 0), 0);
        assert_eq!(right(0, 1), 0);
        assert_eq!(right(3, 5), 4);
        assert_eq!(right(4, 5), 4);
    }

    #[test]
    fn vertical_navigation_moves_by_one_row() {
        assert_eq!(up(0), 0);
        assert_eq!(up(2), 2);
        assert_eq!(up(4), 1);
        assert_eq!(down(0, 7), 3);
        assert_eq!(down(4, 7), 4); // no full row below
        assert_eq!(down(3, 7), 6);
    }

    #[test]
    fn navigation_composes_without_escaping_the_grid() {
        let len = 8;
        let mut selected = 0;
        for _ in 0..20 {
            selected = down(selected, len);
            selected = right(selected, len);
        }
        assert!(selected < len);
    }
}
