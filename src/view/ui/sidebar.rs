//! Table list rendering
//!
//! ```text
//! Tables
//!   ↑ more
//! > orders
//! ● products
//!   ↓ more
//! 2-4 of 9
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::panel::{draw_panel, put_line, SCROLL_DOWN_MARK, SCROLL_UP_MARK};
use crate::primitives::truncate_with_ellipsis;
use crate::view::theme::Theme;
use crate::view::viewport::{Chrome, Viewport};

/// Title line plus pagination footer, with scroll indicators.
pub const SIDEBAR_CHROME: Chrome = Chrome::new(2, true);

pub struct SidebarRenderer;

impl SidebarRenderer {
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        tables: &[&str],
        selected: usize,
        active: usize,
        viewport: &Viewport,
        focused: bool,
        theme: &Theme,
    ) {
        let inner = draw_panel(buf, area, "", focused, theme);
        if inner.height == 0 {
            return;
        }

        put_line(buf, inner, 0, "Tables", theme.title());

        if tables.is_empty() {
            put_line(buf, inner, 1, "No tables", theme.dim(theme.placeholder_fg));
        }

        let mut row = 1;
        if viewport.show_up_indicator() {
            put_line(buf, inner, row, SCROLL_UP_MARK, theme.dim(theme.indicator_fg));
            row += 1;
        }

        for idx in viewport.visible_range() {
            let Some(name) = tables.get(idx) else { break };
            let glyph = item_glyph(idx == selected, idx == active);
            let text = format!(
                "{glyph} {}",
                truncate_with_ellipsis(name, (inner.width as usize).saturating_sub(2))
            );
            let mut style = Style::default();
            if idx == active {
                style = style.fg(theme.active_table_fg).add_modifier(Modifier::BOLD);
            }
            if idx == selected && focused {
                style = theme.selection();
            }
            put_line(buf, inner, row, &text, style);
            row += 1;
        }

        if viewport.show_down_indicator() {
            put_line(buf, inner, row, SCROLL_DOWN_MARK, theme.dim(theme.indicator_fg));
        }

        let footer = truncate_with_ellipsis(&pagination_footer(viewport), inner.width as usize);
        if inner.height > 1 {
            put_line(
                buf,
                inner,
                inner.height as usize - 1,
                &footer,
                theme.dim(theme.indicator_fg),
            );
        }
    }
}

/// `●` active and selected, `>` selected, blank otherwise.
pub fn item_glyph(selected: bool, active: bool) -> char {
    match (selected, active) {
        (true, true) => '●',
        (true, false) => '>',
        _ => ' ',
    }
}

/// `start-end of total`, one-based.
pub fn pagination_footer(viewport: &Viewport) -> String {
    let range = viewport.visible_range();
    if range.is_empty() {
        return format!("0-0 of {}", viewport.total_count());
    }
    format!("{}-{} of {}", range.start + 1, range.end, viewport.total_count())
}
