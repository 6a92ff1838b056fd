//! JSON dataset files
//!
//! ```json
//! {"tables": [{
//!     "name": "users",
//!     "columns": [{"name": "ID", "type": "int", "nullable": false, "key": "PRI"}],
//!     "indices": ["PRIMARY"],
//!     "rows": [{"ID": 1}]
//! }]}
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{DataProvider, ProviderError};
use crate::model::{ColumnMetadata, RowRecord, RowValue};

#[derive(Debug, Deserialize)]
struct Dataset {
    tables: Vec<TableSpec>,
}

#[derive(Debug, Deserialize)]
struct TableSpec {
    name: String,
    #[serde(default)]
    columns: Vec<ColumnMetadata>,
    #[serde(default)]
    indices: Vec<String>,
    #[serde(default)]
    rows: Vec<Map<String, Value>>,
}

impl TableSpec {
    /// Convert one JSON object to a row, keeping declared column order first.
    fn record(&self, object: &Map<String, Value>) -> RowRecord {
        let mut record = RowRecord::new();
        for column in &self.columns {
            if let Some(value) = object.get(&column.name) {
                record.set(&column.name, RowValue::from_json(value));
            }
        }
        for (key, value) in object {
            if record.get(key).is_none() {
                record.set(key, RowValue::from_json(value));
            }
        }
        record
    }
}

/// Serves tables from a JSON dataset loaded into memory.
#[derive(Debug)]
pub struct JsonFileProvider {
    label: String,
    dataset: Dataset,
}

impl JsonFileProvider {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ProviderError::Io(e.to_string()))?;
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_json_str(label, &contents)
    }

    pub fn from_json_str(label: impl Into<String>, contents: &str) -> Result<Self, ProviderError> {
        let dataset: Dataset =
            serde_json::from_str(contents).map_err(|e| ProviderError::Parse(e.to_string()))?;

        let mut seen = BTreeSet::new();
        for table in &dataset.tables {
            if table.name.is_empty() {
                return Err(ProviderError::Invalid("table with empty name".to_string()));
            }
            if !seen.insert(table.name.as_str()) {
                return Err(ProviderError::Invalid(format!(
                    "duplicate table '{}'",
                    table.name
                )));
            }
        }

        Ok(Self {
            label: label.into(),
            dataset,
        })
    }

    fn table(&self, name: &str) -> Result<&TableSpec, ProviderError> {
        self.dataset
            .tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ProviderError::MissingTable(name.to_string()))
    }
}

impl DataProvider for JsonFileProvider {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn list_tables(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.dataset.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn fetch_columns(&self, table: &str) -> Result<Vec<ColumnMetadata>, ProviderError> {
        Ok(self.table(table)?.columns.clone())
    }

    fn fetch_index_names(&self, table: &str) -> Result<BTreeSet<String>, ProviderError> {
        Ok(self.table(table)?.indices.iter().cloned().collect())
    }

    fn fetch_rows(&self, table: &str, limit: usize) -> Result<Vec<RowRecord>, ProviderError> {
        let spec = self.table(table)?;
        Ok(spec
            .rows
            .iter()
            .take(limit)
            .map(|object| spec.record(object))
            .collect())
    }
}
