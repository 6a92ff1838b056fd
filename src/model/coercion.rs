//! Edit buffer coercion
//!
//! Parses free text typed into a cell against the target column's declared
//! type and nullability. Coercion never fails outright: unparsable input
//! resolves to Null, to `false`, or to leaving the cell as it was.

use super::column::{ColumnKind, ColumnMetadata};
use super::value::RowValue;

/// Outcome of coercing an edit buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// Store this value in the cell
    Write(RowValue),
    /// Input did not parse and the column cannot hold Null; keep the old value
    Keep,
}

/// Coerce `buffer` into a value for `column`.
///
/// Numeric and boolean buffers are trimmed before parsing. Text buffers are
/// taken verbatim: an empty buffer stays an empty string and the word `NULL`
/// stays the word.
pub fn coerce(buffer: &str, column: &ColumnMetadata) -> Coercion {
    let kind = column.kind();
    let input = buffer.trim();
    let parsed = match kind {
        ColumnKind::Text => return Coercion::Write(RowValue::Text(buffer.to_string())),
        _ if input.is_empty() && column.nullable => return Coercion::Write(RowValue::Null),
        ColumnKind::Integer => input.parse::<i64>().ok().map(RowValue::Integer),
        ColumnKind::Float => input
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .map(RowValue::Float),
        ColumnKind::Boolean => parse_bool(input).map(RowValue::Boolean),
    };

    match parsed {
        Some(value) => Coercion::Write(value),
        None if column.nullable => Coercion::Write(RowValue::Null),
        None if kind == ColumnKind::Boolean => Coercion::Write(RowValue::Boolean(false)),
        None => Coercion::Keep,
    }
}

fn parse_bool(input: &str) -> Option<bool> {
    let lower = input.to_ascii_lowercase();
    match lower.as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
