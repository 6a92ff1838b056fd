//! Data grid rendering
//!
//! ```text
//!     # │ ID  │ NAME       │ PRICE   │
//!     1 │ 201 │ Laptop     │ 999.99  │
//!     2 │ 202 │ Headphones │ 129.99  │
//! Rows 1-2 of 5  ↓ More
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

use super::panel::{put_line, put_span};
use crate::app::types::CursorState;
use crate::model::TableSession;
use crate::primitives::display_width::tail_to_width;
use crate::primitives::{allocate_widths, pad_to_width, str_width, Overhead};
use crate::view::theme::Theme;
use crate::view::viewport::{Chrome, Viewport};

/// Header row plus pagination footer, and the help lines when shown.
pub fn data_grid_chrome(help_lines: usize) -> Chrome {
    Chrome::new(2 + help_lines, false)
}

/// Cell being edited, drawn from the buffer instead of the stored value.
#[derive(Debug, Clone, Copy)]
pub struct CellEdit<'a> {
    pub row: usize,
    pub col: usize,
    pub buffer: &'a str,
}

pub struct DataGridRenderer;

impl DataGridRenderer {
    /// Draw the grid into the panel content area.
    ///
    /// Returns where the terminal cursor belongs while editing inline.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        table: &TableSession,
        viewport: &Viewport,
        cursor: CursorState,
        edit: Option<CellEdit<'_>>,
        focused: bool,
        theme: &Theme,
    ) -> Option<Position> {
        if !table.has_data() {
            put_line(
                buf,
                area,
                0,
                &format!("No data available for table: {}", table.name),
                theme.dim(theme.placeholder_fg),
            );
            return None;
        }

        let digits = gutter_digits(table.row_count());
        let widths = column_widths(table, area.width as usize, digits);
        let right = area.x + area.width;
        let border_style = theme.dim(theme.border_fg);
        let mut caret = None;

        // header
        let y = area.y;
        buf.set_style(Rect::new(area.x, y, area.width, 1), theme.header());
        let mut x = put_span(buf, area.x, y, right, &format!(" {:>digits$} ", "#"), theme.header());
        for (column, width) in table.columns.iter().zip(&widths) {
            x = put_span(buf, x, y, right, "│ ", theme.header());
            x = put_span(
                buf,
                x,
                y,
                right,
                &pad_to_width(&column.name.to_uppercase(), *width),
                theme.header(),
            );
            x = put_span(buf, x, y, right, " ", theme.header());
        }
        put_span(buf, x, y, right, "│", theme.header());

        // rows
        for (line, row_idx) in viewport.visible_range().enumerate() {
            let y = area.y + 1 + line as u16;
            if y >= area.y + area.height {
                break;
            }
            let row_style = theme.row(row_idx);
            buf.set_style(Rect::new(area.x, y, area.width, 1), row_style);

            let gutter_style = row_style.fg(theme.gutter_fg);
            let mut x = put_span(
                buf,
                area.x,
                y,
                right,
                &format!(" {:>digits$} ", row_idx + 1),
                gutter_style,
            );

            for (col_idx, width) in widths.iter().enumerate() {
                x = put_span(buf, x, y, right, "│ ", border_style.patch(row_style));

                let editing = edit.filter(|e| e.row == row_idx && e.col == col_idx);
                let (text, style) = match editing {
                    Some(e) => {
                        let shown = tail_to_width(e.buffer, width.saturating_sub(1));
                        let caret_x = x + str_width(shown) as u16;
                        if caret_x < right {
                            caret = Some(Position::new(caret_x, y));
                        }
                        (pad_to_width(shown, *width), theme.editing_cell())
                    }
                    None => {
                        let value = table
                            .cell(row_idx, col_idx)
                            .map(|v| v.to_string())
                            .unwrap_or_default();
                        let style = if row_idx == cursor.row && col_idx == cursor.col {
                            theme.cursor_cell(focused)
                        } else {
                            row_style
                        };
                        (pad_to_width(&value, *width), style)
                    }
                };
                x = put_span(buf, x, y, right, &text, style);
                x = put_span(buf, x, y, right, " ", row_style);
            }
            put_span(buf, x, y, right, "│", border_style.patch(row_style));
        }

        let footer_row = 1 + viewport.visible_count();
        put_line(
            buf,
            area,
            footer_row,
            &scroll_footer(viewport),
            theme.dim(theme.indicator_fg),
        );

        caret
    }
}

/// Digits reserved for row numbers: at least four.
pub fn gutter_digits(rows: usize) -> usize {
    rows.to_string().len().max(4)
}

/// Concrete column widths for a grid `available` cells wide.
pub fn column_widths(table: &TableSession, available: usize, digits: usize) -> Vec<usize> {
    let min: Vec<usize> = table.columns.iter().map(|c| c.min_width()).collect();
    let ideal: Vec<usize> = table.columns.iter().map(|c| c.ideal_width()).collect();
    allocate_widths(available, &min, &ideal, Overhead::data_grid(digits + 2))
}

/// `Rows start-end of total` plus `↑ Prev` / `↓ More` markers.
pub fn scroll_footer(viewport: &Viewport) -> String {
    let range = viewport.visible_range();
    let mut footer = if range.is_empty() {
        format!("Rows 0-0 of {}", viewport.total_count())
    } else {
        format!(
            "Rows {}-{} of {}",
            range.start + 1,
            range.end,
            viewport.total_count()
        )
    };
    if viewport.offset() > 0 {
        footer.push_str("  ↑ Prev");
    }
    if range.end < viewport.total_count() {
        footer.push_str("  ↓ More");
    }
    footer
}
