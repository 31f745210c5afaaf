//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any renderer. It maps `crossterm`
//! key events into raw [`Key`] codes, normalizes them through a [`KeyMap`], and
//! tracks per-frame key state in an [`InputTracker`] suitable for terminal
//! environments (including terminals without key-release events).

pub mod keymap;
pub mod map;
pub mod tracker;

pub use tui_arcade_types as types;
pub use tui_arcade_types::Key;

pub use keymap::KeyMap;
pub use map::{event_to_input, is_quit_key, key_event_to_input, InputEvent};
pub use tracker::InputTracker;
