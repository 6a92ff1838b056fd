//! Status bar rendering

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::panel::put_span;
use crate::primitives::str_width;
use crate::view::theme::Theme;

/// Everything the status bar shows, prepared by the application.
#[derive(Debug, Clone, Default)]
pub struct StatusLine<'a> {
    /// Mode badge, e.g. `TABLES`, `DATA`, `EDIT`
    pub badge: &'a str,
    pub editing: bool,
    pub table: Option<&'a str>,
    /// Cursor position text on the data tab
    pub position: Option<String>,
    pub message: Option<&'a str>,
    /// Where the data came from
    pub source: &'a str,
}

/// Renders the single-line status bar
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    pub fn render(buf: &mut Buffer, area: Rect, status: &StatusLine<'_>, theme: &Theme) {
        let base = Style::default()
            .fg(theme.status_bar_fg)
            .bg(theme.status_bar_bg);
        buf.set_style(area, base);
        let right = area.x + area.width;

        let badge_bg = if status.editing {
            theme.status_edit_badge_bg
        } else {
            theme.status_badge_bg
        };
        let badge_style = Style::default()
            .fg(theme.status_badge_fg)
            .bg(badge_bg)
            .add_modifier(Modifier::BOLD);
        let mut x = put_span(buf, area.x, area.y, right, &format!(" {} ", status.badge), badge_style);

        let mut left = String::new();
        if let Some(table) = status.table {
            left.push(' ');
            left.push_str(table);
        }
        if let Some(position) = &status.position {
            left.push_str("  ");
            left.push_str(position);
        }
        if let Some(message) = status.message {
            left.push_str("  ");
            left.push_str(message);
        }
        x = put_span(buf, x, area.y, right, &left, base);

        let hints = format!("{} · ? help · q quit ", status.source);
        let hints_width = str_width(&hints) as u16;
        if x + 1 + hints_width <= right {
            put_span(buf, right - hints_width, area.y, right, &hints, base);
        }
    }
}
