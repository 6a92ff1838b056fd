//! Titled multi-column listing used by the structure and indices tabs
//!
//! ```text
//! users Structure
//!  NAME      TYPE          NULL      KEY
//!   ↑ more
//!  Email     varchar(100)  NOT NULL  UNI
//!   ↓ more
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::panel::{put_line, SCROLL_DOWN_MARK, SCROLL_UP_MARK};
use crate::primitives::{allocate_widths, pad_to_width, str_width, Overhead};
use crate::view::theme::Theme;
use crate::view::viewport::{Chrome, Viewport};

/// Title and header lines, plus help lines when shown.
pub fn listing_chrome(help_lines: usize) -> Chrome {
    Chrome::new(2 + help_lines, true)
}

pub struct ListingRenderer;

impl ListingRenderer {
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        viewport: &Viewport,
        theme: &Theme,
    ) {
        put_line(buf, area, 0, title, theme.title());

        let widths = listing_widths(area.width as usize, headers, rows);
        let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        put_line(buf, area, 1, &format_row(&header, &widths), theme.header());

        let mut line = 2;
        if viewport.show_up_indicator() {
            put_line(buf, area, line, SCROLL_UP_MARK, theme.dim(theme.indicator_fg));
            line += 1;
        }
        for idx in viewport.visible_range() {
            let Some(row) = rows.get(idx) else { break };
            put_line(buf, area, line, &format_row(row, &widths), theme.row(idx));
            line += 1;
        }
        if viewport.show_down_indicator() {
            put_line(buf, area, line, SCROLL_DOWN_MARK, theme.dim(theme.indicator_fg));
        }
    }
}

/// Header widths are the minimums, the longest value in each column the ideal.
pub fn listing_widths(available: usize, headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let min: Vec<usize> = headers.iter().map(|h| str_width(h)).collect();
    let ideal: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|v| str_width(v))
                .chain(std::iter::once(str_width(h)))
                .max()
                .unwrap_or(0)
        })
        .collect();
    allocate_widths(available, &min, &ideal, Overhead::LISTING)
}

/// One leading space, each field truncated and padded, two spaces between.
pub fn format_row(fields: &[String], widths: &[usize]) -> String {
    let mut out = String::from(" ");
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&pad_to_width(fields.get(i).map(String::as_str).unwrap_or(""), *width));
    }
    out
}
