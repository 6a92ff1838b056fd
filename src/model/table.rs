use std::collections::BTreeSet;

use super::column::ColumnMetadata;
use super::value::RowValue;

/// One fetched row: column name to value, in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowRecord {
    fields: Vec<(String, RowValue)>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RowValue>) -> Self {
        self.set(&name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&RowValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Replace the value of `name`, appending the field if the row lacks it.
    pub fn set(&mut self, name: &str, value: RowValue) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Everything loaded for one table. Created once at startup, never unloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSession {
    pub name: String,
    pub columns: Vec<ColumnMetadata>,
    pub rows: Vec<RowRecord>,
    /// Index names, `PRIMARY` first and the rest in lexicographic order
    pub indices: Vec<String>,
}

impl TableSession {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<ColumnMetadata>,
        rows: Vec<RowRecord>,
        indices: BTreeSet<String>,
    ) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
            indices: order_index_names(indices),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Both metadata and at least one row are needed to draw a grid.
    pub fn has_data(&self) -> bool {
        !self.columns.is_empty() && !self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&RowValue> {
        let column = self.columns.get(col)?;
        self.rows.get(row)?.get(&column.name)
    }

    /// Write `value` into `field` of row `row`. Returns false when the row is gone.
    pub fn set_cell(&mut self, row: usize, field: &str, value: RowValue) -> bool {
        match self.rows.get_mut(row) {
            Some(record) => {
                record.set(field, value);
                true
            }
            None => false,
        }
    }
}

fn order_index_names(names: BTreeSet<String>) -> Vec<String> {
    let (mut primary, rest): (Vec<String>, Vec<String>) =
        names.into_iter().partition(|n| n == "PRIMARY");
    primary.extend(rest);
    primary
}

/// All tables, in the order the data source listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workspace {
    pub tables: Vec<TableSession>,
}

impl Workspace {
    pub fn new(tables: Vec<TableSession>) -> Self {
        Self { tables }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, idx: usize) -> Option<&TableSession> {
        self.tables.get(idx)
    }

    pub fn table_mut(&mut self, idx: usize) -> Option<&mut TableSession> {
        self.tables.get_mut(idx)
    }
}
