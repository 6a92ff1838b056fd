//! Shared drawing helpers for bordered panels

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Widget};

use crate::view::layout::inner;
use crate::view::theme::Theme;

pub const SCROLL_UP_MARK: &str = "  ↑ more";
pub const SCROLL_DOWN_MARK: &str = "  ↓ more";

/// Draw a rounded border around `area` and return the content area.
pub fn draw_panel(buf: &mut Buffer, area: Rect, title: &str, focused: bool, theme: &Theme) -> Rect {
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border(focused));
    if !title.is_empty() {
        block = block.title(title.to_string());
    }
    block.render(area, buf);
    inner(area)
}

/// Write `text` on content line `row`, clipped to the area width.
///
/// Rows outside the area are ignored.
pub fn put_line(buf: &mut Buffer, area: Rect, row: usize, text: &str, style: Style) {
    if row >= area.height as usize || area.width == 0 {
        return;
    }
    let y = area.y + row as u16;
    buf.set_style(Rect::new(area.x, y, area.width, 1), style);
    buf.set_stringn(area.x, y, text, area.width as usize, style);
}

/// Write `text` at `(x, y)` without crossing `right` (exclusive).
///
/// Returns the x just past what was written.
pub fn put_span(buf: &mut Buffer, x: u16, y: u16, right: u16, text: &str, style: Style) -> u16 {
    if x >= right {
        return x;
    }
    let (end, _) = buf.set_stringn(x, y, text, (right - x) as usize, style);
    end
}
