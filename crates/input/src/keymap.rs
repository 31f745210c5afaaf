//! Raw key code normalization.

use crate::types::Key;

/// How raw codes are turned into logical codes.
///
/// Normalization is total: codes without a mapping pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMap {
    /// Identity mapping.
    Direct,
    /// `w`/`a`/`s`/`d` (either case) act as the arrow keys.
    #[default]
    Wasd,
}

impl KeyMap {
    pub fn from_alt_keymap(alt_keymap: bool) -> Self {
        if alt_keymap {
            KeyMap::Wasd
        } else {
            KeyMap::Direct
        }
    }

    pub fn normalize(self, raw: Key) -> Key {
        match self {
            KeyMap::Direct => raw,
            KeyMap::Wasd => wasd_direction(raw).unwrap_or(raw),
        }
    }
}

/// Direction key for a WASD code, if `raw` is one.
pub fn wasd_direction(raw: Key) -> Option<Key> {
    match raw.as_char()? {
        'w' | 'W' => Some(Key::UP),
        'a' | 'A' => Some(Key::LEFT),
        's' | 'S' => Some(Key::DOWN),
        'd' | 'D' => Some(Key::RIGHT),
        _ => None,
    }
}
