//! Cell edit actions: begin, commit, cancel and set-null on the data grid.

use super::types::{Focus, MainTab};
use super::{App, EditMode, EditTarget};
use crate::model::{coerce, Coercion, RowValue};

impl App {
    /// Edits start only from the data tab of the main panel, on a table
    /// that has both columns and rows.
    fn can_edit(&self) -> bool {
        self.focus == Focus::Main
            && self.tab == MainTab::Data
            && !self.edit.is_editing()
            && self.active_table().is_some_and(|t| t.has_data())
    }

    pub(super) fn begin_edit(&mut self, mode: EditMode) {
        if !self.can_edit() {
            return;
        }
        let Some(table) = self.workspace.table(self.active_table) else {
            return;
        };
        let row = self.cursor.row;
        let col = self.cursor.col;
        let Some(column) = table.columns.get(col) else {
            return;
        };
        if row >= table.row_count() {
            return;
        }

        let seed = table
            .cell(row, col)
            .map(RowValue::edit_seed)
            .unwrap_or_default();
        let target = EditTarget {
            table: self.active_table,
            row,
            col,
            field_name: column.name.clone(),
        };
        self.edit.begin(mode, target, seed);
    }

    /// Coerce the buffer against the target column and write it back.
    pub(super) fn commit_edit(&mut self) {
        let Some((target, buffer)) = self.edit.finish() else {
            return;
        };
        let Some(table) = self.workspace.table_mut(target.table) else {
            return;
        };
        let Some(column) = table.columns.get(target.col).cloned() else {
            return;
        };

        let message = match coerce(&buffer, &column) {
            Coercion::Write(value) => {
                tracing::info!(
                    "Set {}.{} row {} = {:?}",
                    table.name,
                    target.field_name,
                    target.row + 1,
                    value
                );
                let shown = value.to_string();
                if table.set_cell(target.row, &target.field_name, value) {
                    format!(
                        "Updated {}.{} (row {}) to {}",
                        table.name,
                        target.field_name,
                        target.row + 1,
                        shown
                    )
                } else {
                    format!("Row {} of {} no longer exists", target.row + 1, table.name)
                }
            }
            Coercion::Keep => {
                tracing::warn!(
                    "Rejected {:?} for {}.{} ({})",
                    buffer,
                    table.name,
                    column.name,
                    column.declared_type
                );
                format!(
                    "'{}' is not a valid {} for {}; value unchanged",
                    buffer, column.declared_type, column.name
                )
            }
        };
        self.set_status_message(message);
    }

    pub(super) fn cancel_edit(&mut self) {
        if !self.edit.is_editing() {
            return;
        }
        self.edit.cancel();
        self.set_status_message("Edit cancelled");
    }

    /// Store Null in the cell under the cursor, if its column allows it.
    pub(super) fn set_null_at_cursor(&mut self) {
        if !self.can_edit() {
            return;
        }
        let row = self.cursor.row;
        let col = self.cursor.col;
        let Some(table) = self.workspace.table_mut(self.active_table) else {
            return;
        };
        let Some(column) = table.columns.get(col) else {
            return;
        };

        let message = if !column.nullable {
            format!("{} is NOT NULL", column.name)
        } else {
            let field = column.name.clone();
            tracing::info!("Set {}.{} row {} = NULL", table.name, field, row + 1);
            table.set_cell(row, &field, RowValue::Null);
            format!("Set {}.{} (row {}) to NULL", table.name, field, row + 1)
        };
        self.set_status_message(message);
    }
}
