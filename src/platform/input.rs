//! Keyboard polling

use serde::{Deserialize, Serialize};

/// The keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Serve: reset ball and paddle
    Space,
    /// Quit
    Escape,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Space, Key::Escape];

    const fn bit(self) -> u8 {
        match self {
            Key::Left => 1 << 0,
            Key::Right => 1 << 1,
            Key::Space => 1 << 2,
            Key::Escape => 1 << 3,
        }
    }
}

/// "Is this key currently held?" as answered by the host
pub trait Keyboard {
    fn is_down(&self, key: Key) -> bool;
}

/// Held-key snapshot, updated from host key events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    held: u8,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given keys held
    pub fn with(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.press(key);
        }
        state
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn release_all(&mut self) {
        self.held = 0;
    }
}

impl Keyboard for KeyState {
    fn is_down(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }
}
