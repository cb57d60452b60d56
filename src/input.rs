//! Keyboard state
//!
//! Browser key events write here; the tick reads it once per frame.

use std::collections::HashMap;

use crate::sim::TickInput;

/// Keys that steer left
pub const LEFT_KEYS: [&str; 2] = ["ArrowLeft", "a"];
/// Keys that steer right
pub const RIGHT_KEYS: [&str; 2] = ["ArrowRight", "d"];

/// Pressed/released state per key identifier (`KeyboardEvent.key`)
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    keys: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_owned(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.keys.insert(key.to_owned(), false);
    }

    /// Keys never seen read as released
    pub fn is_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn any_down(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_down(k))
    }

    /// Drop all held keys (e.g. on window blur, where keyup never arrives)
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Whether a key steers the car (the page should not scroll on it)
pub fn is_steering_key(key: &str) -> bool {
    LEFT_KEYS.contains(&key) || RIGHT_KEYS.contains(&key)
}

impl From<&KeyState> for TickInput {
    fn from(keys: &KeyState) -> Self {
        TickInput {
            left: keys.any_down(&LEFT_KEYS),
            right: keys.any_down(&RIGHT_KEYS),
        }
    }
}
