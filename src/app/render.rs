use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use super::types::{Focus, MainTab};
use super::{App, EditMode};
use crate::primitives::str_width;
use crate::view::layout::{ScreenLayout, MIN_HEIGHT, MIN_WIDTH};
use crate::view::ui::help::{help_lines, reserved_help_lines};
use crate::view::ui::panel::{draw_panel, put_line};
use crate::view::ui::{
    CellEdit, DataGridRenderer, EditModalRenderer, HelpRenderer, IndicesRenderer,
    SidebarRenderer, StatusBarRenderer, StatusLine, StructureRenderer, TabsRenderer,
};

impl App {
    /// Render the application to the terminal frame
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if let Some(caret) = self.render_into(area, frame.buffer_mut()) {
            frame.set_cursor_position(caret);
        }
    }

    /// Draw the whole screen into `buf`.
    ///
    /// Reads state only. Returns where the terminal cursor should sit while a
    /// cell is being edited.
    pub fn render_into(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let Some(layout) = ScreenLayout::compute(area, &self.config.ui) else {
            self.render_too_small(area, buf);
            return None;
        };

        TabsRenderer::render(buf, layout.tab_bar, layout.sidebar.width, self.tab, &self.theme);

        let names: Vec<&str> = self
            .workspace
            .tables
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        SidebarRenderer::render(
            buf,
            layout.sidebar,
            &names,
            self.selected_table,
            self.active_table,
            &self.sidebar_viewport,
            self.focus == Focus::Sidebar,
            &self.theme,
        );

        let inline_caret = self.render_main(buf, layout.main);
        StatusBarRenderer::render(buf, layout.status_bar, &self.status_line(), &self.theme);

        match self.edit.mode() {
            EditMode::Modal => self.render_modal(buf, area),
            EditMode::Inline => inline_caret,
            EditMode::Browsing => None,
        }
    }

    /// Screen contents as text, one line per row
    pub fn render_to_string(&self) -> String {
        let area = Rect::new(0, 0, self.width, self.height);
        let mut buf = Buffer::empty(area);
        self.render_into(area, &mut buf);
        buffer_to_string(&buf)
    }

    fn render_main(&self, buf: &mut Buffer, area: Rect) -> Option<Position> {
        let focused = self.focus == Focus::Main;
        let Some(table) = self.active_table() else {
            let content = draw_panel(buf, area, " No tables ", focused, &self.theme);
            put_line(
                buf,
                content,
                0,
                "No tables to show",
                self.theme.dim(self.theme.placeholder_fg),
            );
            return None;
        };

        let title = format!(" {} · {} ", table.name, self.tab.label());
        let content = draw_panel(buf, area, &title, focused, &self.theme);

        let caret = match self.tab {
            MainTab::Data => {
                let edit = self
                    .edit
                    .target()
                    .filter(|t| t.table == self.active_table)
                    .map(|t| CellEdit {
                        row: t.row,
                        col: t.col,
                        buffer: self.edit.buffer(),
                    });
                DataGridRenderer::render(
                    buf,
                    content,
                    table,
                    &self.data_viewport,
                    self.cursor,
                    edit,
                    focused,
                    &self.theme,
                )
            }
            MainTab::Structure => {
                StructureRenderer::render(buf, content, table, &self.structure_viewport, &self.theme);
                None
            }
            MainTab::Indices => {
                IndicesRenderer::render(buf, content, table, &self.indices_viewport, &self.theme);
                None
            }
        };

        if reserved_help_lines(self.show_help, content.height as usize) > 0 {
            HelpRenderer::render(
                buf,
                content,
                help_lines(self.tab, self.edit.is_editing()),
                &self.theme,
            );
        }
        caret
    }

    fn render_modal(&self, buf: &mut Buffer, screen: Rect) -> Option<Position> {
        let target = self.edit.target()?;
        let table = self.workspace.table(target.table)?;
        let column = table.columns.get(target.col)?;
        EditModalRenderer::render(
            buf,
            screen,
            &table.name,
            column,
            self.edit.buffer(),
            &self.theme,
        )
    }

    fn status_line(&self) -> StatusLine<'_> {
        let badge = match (self.edit.mode(), self.focus, self.tab) {
            (EditMode::Inline, _, _) => "EDIT",
            (EditMode::Modal, _, _) => "MODAL",
            (EditMode::Browsing, Focus::Sidebar, _) => "TABLES",
            (EditMode::Browsing, Focus::Main, MainTab::Data) => "DATA",
            (EditMode::Browsing, Focus::Main, MainTab::Structure) => "STRUCTURE",
            (EditMode::Browsing, Focus::Main, MainTab::Indices) => "INDICES",
        };

        let table = self.active_table();
        let position = table
            .filter(|t| self.tab == MainTab::Data && t.has_data())
            .map(|t| {
                format!(
                    "R{}/{} C{}/{}",
                    self.cursor.row + 1,
                    t.row_count(),
                    self.cursor.col + 1,
                    t.column_count()
                )
            });

        StatusLine {
            badge,
            editing: self.edit.is_editing(),
            table: table.map(|t| t.name.as_str()),
            position,
            message: self.status_message.as_deref(),
            source: &self.source_label,
        }
    }

    fn render_too_small(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.theme.placeholder_fg)
            .add_modifier(Modifier::BOLD);
        put_line(buf, area, 0, "Terminal too small", style);
        put_line(
            buf,
            area,
            1,
            &format!(
                "{}x{}, need {}x{}",
                area.width, area.height, MIN_WIDTH, MIN_HEIGHT
            ),
            self.theme.dim(self.theme.placeholder_fg),
        );
    }
}

/// Flatten a buffer into text, one line per row.
///
/// Cells hidden behind a double-width character are skipped, so each line
/// reads the way it looks on screen.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut x = area.left();
        while x < area.right() {
            let symbol = buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" ");
            line.push_str(symbol);
            x += str_width(symbol).max(1) as u16;
        }
        lines.push(line);
    }
    lines.join("\n")
}
