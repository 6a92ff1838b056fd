use std::fmt;

/// A single cell value.
///
/// Every value coming from a data source or an edit commit is one of these
/// variants; formatting and coercion match on them exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RowValue {
    /// Initial edit buffer for this value.
    ///
    /// Null seeds an empty buffer rather than the word "NULL", so committing an
    /// untouched buffer on a nullable column keeps the cell Null.
    pub fn edit_seed(&self) -> String {
        match self {
            RowValue::Null => String::new(),
            RowValue::Boolean(b) => bool_word(*b).to_string(),
            other => other.to_string(),
        }
    }

    /// Build a value from a JSON scalar. Arrays and objects keep their JSON text.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => RowValue::Null,
            Value::Bool(b) => RowValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RowValue::Integer(i),
                None => n.as_f64().map(RowValue::Float).unwrap_or(RowValue::Null),
            },
            Value::String(s) => RowValue::Text(s.clone()),
            other => RowValue::Text(other.to_string()),
        }
    }
}

fn bool_word(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

/// Canonical display form.
///
/// Floats use the shortest representation that round-trips, so re-committing a
/// displayed float yields the same value.
impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Null => f.write_str("NULL"),
            RowValue::Boolean(b) => f.write_str(bool_word(*b)),
            RowValue::Integer(i) => write!(f, "{i}"),
            RowValue::Float(x) => write!(f, "{x}"),
            RowValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowValue {
    fn from(value: i64) -> Self {
        RowValue::Integer(value)
    }
}

impl From<f64> for RowValue {
    fn from(value: f64) -> Self {
        RowValue::Float(value)
    }
}

impl From<bool> for RowValue {
    fn from(value: bool) -> Self {
        RowValue::Boolean(value)
    }
}

impl From<&str> for RowValue {
    fn from(value: &str) -> Self {
        RowValue::Text(value.to_string())
    }
}
