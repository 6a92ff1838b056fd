//! Core data model
//!
//! Typed cell values, column metadata, per-table sessions and the coercion
//! rules that turn edit buffers back into typed values.

pub mod coercion;
pub mod column;
pub mod index;
pub mod table;
pub mod value;

pub use coercion::{coerce, Coercion};
pub use column::{ColumnKind, ColumnMetadata};
pub use index::{IndexKind, IndexSummary};
pub use table::{RowRecord, TableSession, Workspace};
pub use value::RowValue;
