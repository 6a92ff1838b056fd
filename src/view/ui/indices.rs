//! Indices tab: index name, guessed kind and guessed columns

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::listing::ListingRenderer;
use super::panel::put_line;
use crate::model::{IndexSummary, TableSession};
use crate::view::theme::Theme;
use crate::view::viewport::Viewport;

pub const INDICES_HEADERS: [&str; 3] = ["NAME", "KIND", "COLUMNS"];

pub struct IndicesRenderer;

impl IndicesRenderer {
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        table: &TableSession,
        viewport: &Viewport,
        theme: &Theme,
    ) {
        if table.indices.is_empty() {
            put_line(
                buf,
                area,
                0,
                &format!("No index information available for table: {}", table.name),
                theme.dim(theme.placeholder_fg),
            );
            return;
        }
        let rows: Vec<Vec<String>> = table
            .indices
            .iter()
            .map(|name| index_row(&IndexSummary::infer(name, &table.columns)))
            .collect();
        ListingRenderer::render(
            buf,
            area,
            &format!("{} Indices", table.name),
            &INDICES_HEADERS,
            &rows,
            viewport,
            theme,
        );
    }
}

pub fn index_row(summary: &IndexSummary) -> Vec<String> {
    vec![
        summary.name.clone(),
        summary.kind.label().to_string(),
        summary.columns.join(", "),
    ]
}
