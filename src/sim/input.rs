//! Keyboard state tracking
//!
//! The host feeds raw key codes (DOM `KeyboardEvent.code` strings) in as they
//! arrive; the simulation only ever sees a `TickInput` snapshot.

use std::collections::HashMap;

use super::tick::TickInput;

/// Logical controls the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Jump,
    Duck,
}

impl Control {
    /// Map a key code to a control. Unknown codes yield `None`.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "Space" | "KeyW" | "ArrowUp" => Some(Control::Jump),
            "ShiftLeft" | "KeyS" | "ArrowDown" => Some(Control::Duck),
            _ => None,
        }
    }
}

/// Held state per recognized key code (last writer wins per key)
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: &str) {
        self.set(code, true);
    }

    pub fn key_up(&mut self, code: &str) {
        self.set(code, false);
    }

    fn set(&mut self, code: &str, held: bool) {
        if Control::from_key_code(code).is_none() {
            return;
        }
        self.keys.insert(code.to_string(), held);
    }

    /// True if any key aliased to `control` is currently held
    pub fn is_held(&self, control: Control) -> bool {
        self.keys
            .iter()
            .any(|(code, &held)| held && Control::from_key_code(code) == Some(control))
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Freeze the current state for one simulation tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            jump: self.is_held(Control::Jump),
            duck: self.is_held(Control::Duck),
        }
    }
}
