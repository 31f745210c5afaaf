//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data with no external dependencies, so they can be used
//! from input mapping, screen drawing, the game loop, and the games themselves.
//!
//! # Logical Key Codes
//!
//! Keys are plain integer codes. The named codes follow curses numbering so that
//! arrows and other special keys never collide with printable characters:
//!
//! | Key | Code |
//! |-----|------|
//! | `UP` / `DOWN` / `LEFT` / `RIGHT` | 259 / 258 / 260 / 261 |
//! | `ENTER` | 10 |
//! | `SPACE` | 32 |
//! | `ESCAPE` | 27 |
//! | `BACKSPACE` | 127 |
//! | `TAB` | 9 |
//! | `A`..`Z` | `'a'`..`'z'` |
//! | `NUM_0`..`NUM_9` | `'0'`..`'9'` |
//!
//! Any other code is carried through untouched, so games can bind to keys the
//! engine has no name for.
//!
//! # Colors
//!
//! Cells carry a small palette index: 0 is the terminal default, 1..=7 are the
//! named colors. Out-of-range indices fall back to [`Color::Default`].
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Color, GameConfig, Key};
//!
//! assert_eq!(Key::from_char('q'), Key::Q);
//! assert_eq!(Key::UP.direction(), (0, -1));
//! assert_eq!(Color::from_index(3), Color::Yellow);
//! assert_eq!(Color::from_index(42), Color::Default);
//!
//! let config = GameConfig::new(40, 15).with_target_fps(15).with_title("Minimal");
//! assert_eq!(config.width, 40);
//! ```

use std::fmt;
use std::time::Duration;

/// Default screen width in cells.
pub const DEFAULT_WIDTH: u16 = 80;

/// Default screen height in cells.
pub const DEFAULT_HEIGHT: u16 = 24;

/// Default target frame rate. Terminal games are slow by nature.
pub const DEFAULT_FPS: u32 = 15;

/// Default window title (display only).
pub const DEFAULT_TITLE: &str = "tui-arcade";

/// A logical (or raw) key code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub u32);

impl Key {
    // Directions (curses values)
    pub const UP: Key = Key(259);
    pub const DOWN: Key = Key(258);
    pub const LEFT: Key = Key(260);
    pub const RIGHT: Key = Key(261);

    // Control keys
    pub const ENTER: Key = Key(10);
    pub const SPACE: Key = Key(32);
    pub const ESCAPE: Key = Key(27);
    pub const BACKSPACE: Key = Key(127);
    pub const TAB: Key = Key(9);

    // Extended keys (curses values)
    pub const HOME: Key = Key(262);
    pub const END: Key = Key(360);
    pub const PAGE_UP: Key = Key(339);
    pub const PAGE_DOWN: Key = Key(338);
    pub const DELETE: Key = Key(330);
    pub const INSERT: Key = Key(331);
    pub const BACKTAB: Key = Key(353);
    /// `F0`; function key `n` is `F0 + n`.
    pub const F0: Key = Key(264);

    // Letters (lowercase)
    pub const A: Key = Key(b'a' as u32);
    pub const B: Key = Key(b'b' as u32);
    pub const C: Key = Key(b'c' as u32);
    pub const D: Key = Key(b'd' as u32);
    pub const E: Key = Key(b'e' as u32);
    pub const F: Key = Key(b'f' as u32);
    pub const G: Key = Key(b'g' as u32);
    pub const H: Key = Key(b'h' as u32);
    pub const I: Key = Key(b'i' as u32);
    pub const J: Key = Key(b'j' as u32);
    pub const K: Key = Key(b'k' as u32);
    pub const L: Key = Key(b'l' as u32);
    pub const M: Key = Key(b'm' as u32);
    pub const N: Key = Key(b'n' as u32);
    pub const O: Key = Key(b'o' as u32);
    pub const P: Key = Key(b'p' as u32);
    pub const Q: Key = Key(b'q' as u32);
    pub const R: Key = Key(b'r' as u32);
    pub const S: Key = Key(b's' as u32);
    pub const T: Key = Key(b't' as u32);
    pub const U: Key = Key(b'u' as u32);
    pub const V: Key = Key(b'v' as u32);
    pub const W: Key = Key(b'w' as u32);
    pub const X: Key = Key(b'x' as u32);
    pub const Y: Key = Key(b'y' as u32);
    pub const Z: Key = Key(b'z' as u32);

    // Digits
    pub const NUM_0: Key = Key(b'0' as u32);
    pub const NUM_1: Key = Key(b'1' as u32);
    pub const NUM_2: Key = Key(b'2' as u32);
    pub const NUM_3: Key = Key(b'3' as u32);
    pub const NUM_4: Key = Key(b'4' as u32);
    pub const NUM_5: Key = Key(b'5' as u32);
    pub const NUM_6: Key = Key(b'6' as u32);
    pub const NUM_7: Key = Key(b'7' as u32);
    pub const NUM_8: Key = Key(b'8' as u32);
    pub const NUM_9: Key = Key(b'9' as u32);

    pub const fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    /// Function key `F<n>`.
    pub const fn function(n: u8) -> Self {
        Self(Self::F0.0 + n as u32)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    /// The character this code stands for, if it is a plain character code.
    ///
    /// Named special keys (arrows, function keys, ...) return `None` even though
    /// their codes are valid scalar values.
    pub fn as_char(self) -> Option<char> {
        if self.is_special() {
            return None;
        }
        char::from_u32(self.0)
    }

    pub fn is_direction(self) -> bool {
        matches!(self, Key::UP | Key::DOWN | Key::LEFT | Key::RIGHT)
    }

    /// Unit vector `(dx, dy)` for a direction key, `(0, 0)` for anything else.
    ///
    /// `y` grows downwards, matching screen rows.
    pub fn direction(self) -> (i32, i32) {
        match self {
            Key::UP => (0, -1),
            Key::DOWN => (0, 1),
            Key::LEFT => (-1, 0),
            Key::RIGHT => (1, 0),
            _ => (0, 0),
        }
    }

    fn is_special(self) -> bool {
        (256..=511).contains(&self.0)
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Key::from_char(ch)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Key::UP => "Up",
            Key::DOWN => "Down",
            Key::LEFT => "Left",
            Key::RIGHT => "Right",
            Key::ENTER => "Enter",
            Key::SPACE => "Space",
            Key::ESCAPE => "Escape",
            Key::BACKSPACE => "Backspace",
            Key::TAB => "Tab",
            _ => {
                return match self.as_char() {
                    Some(ch) if !ch.is_control() => write!(f, "Key({ch:?})"),
                    _ => write!(f, "Key({})", self.0),
                };
            }
        };
        f.write_str(name)
    }
}

/// Cell color: a closed palette, index 0 is the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Default = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// All palette entries in index order.
    pub const ALL: [Color; 8] = [
        Color::Default,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Look up a palette index. Indices outside the palette map to `Default`.
    pub fn from_index(index: u8) -> Self {
        Self::ALL
            .get(index as usize)
            .copied()
            .unwrap_or(Color::Default)
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Color::Default)
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color::from_index(index)
    }
}

/// Construction parameters for a game.
///
/// Everything except `target_fps` is fixed once the loop starts; the game may
/// change its frame rate at runtime through the loop context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Screen width in cells.
    pub width: u16,
    /// Screen height in cells.
    pub height: u16,
    /// Target frames per second. Zero is treated as one.
    pub target_fps: u32,
    /// Title (display only).
    pub title: String,
    /// Remap WASD to the arrow keys.
    pub alt_keymap: bool,
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_alt_keymap(mut self, alt_keymap: bool) -> Self {
        self.alt_keymap = alt_keymap;
        self
    }

    /// Frame budget for the configured rate.
    pub fn frame_duration(&self) -> Duration {
        frame_duration(self.target_fps)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_FPS,
            title: DEFAULT_TITLE.to_string(),
            alt_keymap: true,
        }
    }
}

/// `1 / fps` as a duration, with `fps` clamped to at least 1.
pub fn frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}
