//! Structure tab: one line per column of the active table

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::listing::ListingRenderer;
use super::panel::put_line;
use crate::model::{ColumnMetadata, TableSession};
use crate::view::theme::Theme;
use crate::view::viewport::Viewport;

pub const STRUCTURE_HEADERS: [&str; 4] = ["NAME", "TYPE", "NULL", "KEY"];

pub struct StructureRenderer;

impl StructureRenderer {
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        table: &TableSession,
        viewport: &Viewport,
        theme: &Theme,
    ) {
        if table.columns.is_empty() {
            put_line(
                buf,
                area,
                0,
                &format!("No metadata available for table: {}", table.name),
                theme.dim(theme.placeholder_fg),
            );
            return;
        }
        let rows: Vec<Vec<String>> = table.columns.iter().map(structure_row).collect();
        ListingRenderer::render(
            buf,
            area,
            &format!("{} Structure", table.name),
            &STRUCTURE_HEADERS,
            &rows,
            viewport,
            theme,
        );
    }
}

pub fn structure_row(column: &ColumnMetadata) -> Vec<String> {
    let nullable = if column.nullable { "NULL" } else { "NOT NULL" };
    vec![
        column.name.clone(),
        column.declared_type.clone(),
        nullable.to_string(),
        column.key.clone(),
    ]
}
