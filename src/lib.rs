//! tabletop - browse and edit tabular data in the terminal
//!
//! - [`model`] - typed values, columns, tables and edit coercion
//! - [`provider`] - where tables come from (sample dataset or a JSON file)
//! - [`primitives`] - display width and column width allocation
//! - [`view`] - layout, scroll windows and panel renderers
//! - [`input`] - key bindings
//! - [`app`] - application state, key handling and rendering

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod primitives;
pub mod provider;
pub mod services;
pub mod view;
