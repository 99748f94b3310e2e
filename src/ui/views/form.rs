//! The generation form: genre, mood, energy and playlist name inputs.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

use super::super::{App, theme::Theme};

const FIELD_WIDTH: u16 = 46;

pub(crate) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(FIELD_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(horizontal[1]);

    let fields: [(&str, &Input); 4] = [
        ("Genre", &app.form.genre),
        ("Mood (0 to 1)", &app.form.mood),
        ("Energy (0 to 1)", &app.form.energy),
        ("Playlist Name", &app.form.name),
    ];

    for (i, (label, input)) in fields.into_iter().enumerate() {
        draw_field(
            f,
            &app.theme,
            label,
            input,
            rows[i + 1],
            app.form.focus == i,
        );
    }

    let hint = Paragraph::new("Blank or invalid mood/energy falls back to 0.5")
        .style(Style::default().fg(app.theme.placeholder_fg));
    f.render_widget(hint, rows[5]);
}

fn draw_field(
    f: &mut Frame,
    theme: &Theme,
    label: &str,
    input: &Input,
    area: Rect,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };

    let width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(width);

    let field = Paragraph::new(input.value())
        .style(Style::default().fg(theme.title_fg))
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", label)),
        );
    f.render_widget(field, area);

    if focused {
        let x = area.x + 1 + (input.visual_cursor().saturating_sub(scroll)) as u16;
        f.set_cursor_position((x, area.y + 1));
    }
}
