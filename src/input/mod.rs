//! Keyboard input
//!
//! Maps crossterm key events to [`keybindings::Action`]s through a
//! context-aware transition table.

pub mod keybindings;

pub use keybindings::{describe_key, Action, KeyContext, KeybindingResolver};
