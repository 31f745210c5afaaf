//! tui-arcade (workspace facade crate).
//!
//! Re-exports the engine crates under one name, `tui_arcade::{types,input,term,engine,entities,snake}`,
//! and holds the command-line options shared by the bundled games.

pub mod cli;

pub use tui_arcade_engine as engine;
pub use tui_arcade_entities as entities;
pub use tui_arcade_input as input;
pub use tui_arcade_snake as snake;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
