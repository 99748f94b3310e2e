//! Visual styling for the interface.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub accent: Color,
    pub border: Color,
    pub title_fg: Color,
    pub placeholder_fg: Color,
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            // the green the streaming service brands itself with
            accent: Color::Rgb(29, 185, 84),
            border: Color::Rgb(102, 102, 102),
            title_fg: Color::Rgb(255, 255, 255),
            placeholder_fg: Color::Rgb(120, 120, 120),
            status_fg: Color::Rgb(162, 161, 166),
        }
    }
}
