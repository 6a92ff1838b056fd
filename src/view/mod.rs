//! View and UI layer
//!
//! Layout, scroll windows and the panel renderers.

pub mod layout;
pub mod theme;
pub mod ui;
pub mod viewport;
