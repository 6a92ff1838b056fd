use serde::{Deserialize, Serialize};

use crate::primitives::{str_width, MIN_COLUMN_WIDTH};

/// Schema of one column as reported by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    /// Declared SQL type, e.g. `varchar(50)` or `decimal(10,2)`
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(default)]
    pub nullable: bool,
    /// Key role such as `PRI`, `UNI` or `MUL`; empty when the column has none
    #[serde(default)]
    pub key: String,
}

/// How a declared type is treated for coercion and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Boolean,
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Classify a declared type by substring, first match wins.
    ///
    /// `int` is tested first, so `tinyint(1)` is an Integer column even though
    /// it often stores flags; only `bool`/`boolean` types are Boolean.
    pub fn from_declared_type(declared: &str) -> Self {
        let ty = declared.to_ascii_lowercase();
        if ty.contains("int") {
            ColumnKind::Integer
        } else if ty.contains("float") || ty.contains("double") || ty.contains("decimal") {
            ColumnKind::Float
        } else if ty.contains("bool") {
            ColumnKind::Boolean
        } else {
            ColumnKind::Text
        }
    }
}

impl ColumnMetadata {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        nullable: bool,
        key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable,
            key: key.into(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        ColumnKind::from_declared_type(&self.declared_type)
    }

    pub fn is_primary_key(&self) -> bool {
        self.key.eq_ignore_ascii_case("PRI")
    }

    /// Narrowest useful width: the header must stay readable.
    pub fn min_width(&self) -> usize {
        str_width(&self.name).max(MIN_COLUMN_WIDTH)
    }

    /// Width the column would like when space allows, by declared type.
    pub fn ideal_width(&self) -> usize {
        let ty = self.declared_type.to_ascii_lowercase();
        let ideal = match self.kind() {
            ColumnKind::Integer | ColumnKind::Boolean => 8,
            ColumnKind::Float => 12,
            ColumnKind::Text if ty.contains("varchar") => {
                declared_length(&ty).map(|n| n.min(30)).unwrap_or(20)
            }
            ColumnKind::Text if ty.contains("text") => 30,
            ColumnKind::Text => 15,
        };
        ideal.max(self.min_width())
    }
}

/// The `N` in `varchar(N)`, if present and numeric.
fn declared_length(ty: &str) -> Option<usize> {
    let start = ty.find('(')?;
    let end = start + ty[start..].find(')')?;
    ty[start + 1..end].trim().parse().ok()
}
