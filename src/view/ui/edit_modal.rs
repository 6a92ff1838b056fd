//! Floating editor for a single cell

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Clear, Widget};

use super::panel::put_line;
use crate::model::ColumnMetadata;
use crate::primitives::display_width::tail_to_width;
use crate::primitives::str_width;
use crate::view::layout::{centered, inner};
use crate::view::theme::Theme;

const MODAL_WIDTH: u16 = 60;
/// Border, type line, blank, input, blank, hint, border
const MODAL_HEIGHT: u16 = 7;
const PROMPT: &str = "> ";

pub struct EditModalRenderer;

impl EditModalRenderer {
    /// Draw the overlay centered on `screen`; returns the caret position.
    pub fn render(
        buf: &mut Buffer,
        screen: Rect,
        table: &str,
        column: &ColumnMetadata,
        buffer: &str,
        theme: &Theme,
    ) -> Option<Position> {
        let area = centered(screen, MODAL_WIDTH.min(screen.width.saturating_sub(4)), MODAL_HEIGHT);
        Clear.render(area, buf);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.modal_border_fg))
            .title(format!(" Edit {}.{} ", table, column.name))
            .render(area, buf);

        let content = inner(area);
        if content.width == 0 || content.height < 5 {
            return None;
        }

        let nullable = if column.nullable { "NULL" } else { "NOT NULL" };
        put_line(
            buf,
            content,
            0,
            &format!("Type: {}  {}", column.declared_type, nullable),
            theme.dim(theme.help_fg),
        );

        let room = (content.width as usize).saturating_sub(PROMPT.len() + 1);
        let shown = tail_to_width(buffer, room);
        put_line(buf, content, 2, &format!("{PROMPT}{shown}"), Style::default());

        put_line(buf, content, 4, "Enter save · Esc cancel", theme.dim(theme.help_fg));

        Some(Position::new(
            content.x + (PROMPT.len() + str_width(shown)) as u16,
            content.y + 2,
        ))
    }
}
