//! Per-frame key state for terminal environments.
//!
//! Terminals report key-down events only (no reliable release), so "pressed"
//! here means "seen since the last [`InputTracker::clear`]". Edge-triggered
//! logic should use [`InputTracker::is_just_pressed`], which is accurate for the
//! single frame in which the event arrived.

use std::collections::HashSet;

use crate::keymap::KeyMap;
use crate::types::Key;

#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    keymap: KeyMap,
    pressed: HashSet<Key>,
    just_pressed: HashSet<Key>,
    last_key: Option<Key>,
}

impl InputTracker {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            ..Self::default()
        }
    }

    pub fn keymap(&self) -> KeyMap {
        self.keymap
    }

    /// Record one raw key event and return its logical code.
    ///
    /// `None` is a no-op.
    pub fn process_key(&mut self, raw: Option<Key>) -> Option<Key> {
        let key = self.keymap.normalize(raw?);
        self.last_key = Some(key);
        if self.pressed.insert(key) {
            self.just_pressed.insert(key);
        }
        Some(key)
    }

    /// Advance to the next frame: forget the just-pressed edges.
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset everything, e.g. on scene change.
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.last_key = None;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }
}
