//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Games draw into a fixed-size [`ScreenBuffer`]; once per frame the loop hands
//! a [`Snapshot`] of it to a [`Renderer`] that flushes it to the terminal.
//!
//! Two terminal strategies exist, chosen once at startup by [`Capabilities`]:
//! - [`InteractiveRenderer`]: raw mode, alternate screen, hidden cursor,
//!   cursor-addressed diff updates, non-blocking key polling (crossterm)
//! - [`AnsiRenderer`]: cursor-home and reprint with inline ANSI colors, for
//!   terminals that cannot do raw mode
//!
//! Both install a SIGINT handler while acquired (see [`signal`]) so an
//! interrupt stops the loop cleanly instead of killing the process.
//!
//! [`HeadlessRenderer`] implements the same trait without a terminal, for tests.

pub mod ansi;
pub mod capabilities;
pub mod fb;
pub mod headless;
pub mod renderer;
pub mod signal;

pub use tui_arcade_input as input;
pub use tui_arcade_types as types;

pub use ansi::{encode_frame_into, AnsiRenderer, FallbackInput};
pub use capabilities::{create_renderer, BackendPreference, Capabilities};
pub use fb::{Cell, ScreenBuffer, Snapshot};
pub use headless::{HeadlessRenderer, RecordedFrame};
pub use renderer::{
    encode_diff_into, encode_full_into, InteractiveRenderer, Renderer, RendererKind, Session,
};
