//! Low-level primitives
//!
//! Display-width aware text helpers and the column width allocator used by
//! every panel renderer.

pub mod display_width;
pub mod width_allocator;

pub use display_width::{pad_to_width, str_width, truncate_with_ellipsis};
pub use width_allocator::{allocate_widths, Overhead, MIN_COLUMN_WIDTH};
