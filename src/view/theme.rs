//! Colors used by the panel renderers

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub border_fg: Color,
    pub focused_border_fg: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub row_alt_bg: Color,
    pub gutter_fg: Color,

    pub cursor_cell_fg: Color,
    pub cursor_cell_bg: Color,
    pub cursor_cell_unfocused_bg: Color,
    pub editing_cell_fg: Color,
    pub editing_cell_bg: Color,

    pub selection_fg: Color,
    pub selection_bg: Color,
    pub active_table_fg: Color,

    pub indicator_fg: Color,
    pub placeholder_fg: Color,
    pub help_fg: Color,

    pub tab_active_fg: Color,
    pub tab_active_bg: Color,
    pub tab_inactive_fg: Color,

    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
    pub status_badge_fg: Color,
    pub status_badge_bg: Color,
    pub status_edit_badge_bg: Color,

    pub modal_border_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_fg: Color::DarkGray,
            focused_border_fg: Color::Cyan,

            header_fg: Color::Black,
            header_bg: Color::Cyan,
            row_alt_bg: Color::Rgb(30, 30, 40),
            gutter_fg: Color::DarkGray,

            cursor_cell_fg: Color::Black,
            cursor_cell_bg: Color::LightBlue,
            cursor_cell_unfocused_bg: Color::Gray,
            editing_cell_fg: Color::Black,
            editing_cell_bg: Color::Yellow,

            selection_fg: Color::Black,
            selection_bg: Color::LightBlue,
            active_table_fg: Color::Green,

            indicator_fg: Color::DarkGray,
            placeholder_fg: Color::Gray,
            help_fg: Color::Gray,

            tab_active_fg: Color::Black,
            tab_active_bg: Color::Cyan,
            tab_inactive_fg: Color::Gray,

            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(40, 40, 60),
            status_badge_fg: Color::Black,
            status_badge_bg: Color::Green,
            status_edit_badge_bg: Color::Yellow,

            modal_border_fg: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn border(&self, focused: bool) -> Style {
        let fg = if focused {
            self.focused_border_fg
        } else {
            self.border_fg
        };
        Style::default().fg(fg)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Alternating row background; odd rows get the tinted one.
    pub fn row(&self, index: usize) -> Style {
        if index % 2 == 1 {
            Style::default().bg(self.row_alt_bg)
        } else {
            Style::default()
        }
    }

    pub fn cursor_cell(&self, focused: bool) -> Style {
        let bg = if focused {
            self.cursor_cell_bg
        } else {
            self.cursor_cell_unfocused_bg
        };
        Style::default().fg(self.cursor_cell_fg).bg(bg)
    }

    pub fn editing_cell(&self) -> Style {
        Style::default()
            .fg(self.editing_cell_fg)
            .bg(self.editing_cell_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selection(&self) -> Style {
        Style::default().fg(self.selection_fg).bg(self.selection_bg)
    }

    pub fn dim(&self, color: Color) -> Style {
        Style::default().fg(color)
    }
}
