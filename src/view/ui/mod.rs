//! UI rendering modules
//!
//! Each renderer draws one part of the screen straight into a ratatui
//! [`Buffer`](ratatui::buffer::Buffer):
//! - `tabs` - Tab bar
//! - `sidebar` - Table list
//! - `data_grid` - Data tab grid with row gutter and inline editing
//! - `structure` / `indices` - Schema listings built on `listing`
//! - `status_bar` - Mode badge, position, messages and key hints
//! - `edit_modal` - Floating cell editor
//! - `help` - Key help lines

pub mod data_grid;
pub mod edit_modal;
pub mod help;
pub mod indices;
pub mod listing;
pub mod panel;
pub mod sidebar;
pub mod status_bar;
pub mod structure;
pub mod tabs;

pub use data_grid::{CellEdit, DataGridRenderer};
pub use edit_modal::EditModalRenderer;
pub use help::HelpRenderer;
pub use indices::IndicesRenderer;
pub use sidebar::SidebarRenderer;
pub use status_bar::{StatusBarRenderer, StatusLine};
pub use structure::StructureRenderer;
pub use tabs::TabsRenderer;
