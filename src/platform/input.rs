//! Raw input events and the adapter that turns them into flaps
//!
//! Pointer clicks and the designated key are both "primary activation" and
//! reduce to one `GameState::flap()` call. Everything else is ignored.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Keys the game cares about; anything else maps to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Enter,
    Up,
    Escape,
    Other,
}

/// Host input, already translated from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer pressed and released on the playfield (mouse or touch)
    Click { button: MouseButton },
    KeyDown { key: Key },
    KeyUp { key: Key },
    PointerMove { x: f32, y: f32 },
}

/// Maps input events to simulation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAdapter {
    /// Key that flaps (and restarts after a crash)
    pub flap_key: Key,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self {
            flap_key: Key::Space,
        }
    }
}

impl InputAdapter {
    pub fn new(flap_key: Key) -> Self {
        Self { flap_key }
    }

    /// Whether `event` is a primary activation
    pub fn is_activation(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click { .. } => true,
            InputEvent::KeyDown { key } => *key == self.flap_key,
            InputEvent::KeyUp { .. } | InputEvent::PointerMove { .. } => false,
        }
    }

    /// Apply `event` to the game. Returns true if it was turned into a flap.
    pub fn handle(&self, state: &mut GameState, event: &InputEvent) -> bool {
        if !self.is_activation(event) {
            return false;
        }
        state.flap();
        true
    }
}
