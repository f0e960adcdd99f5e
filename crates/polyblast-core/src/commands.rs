//! Input events delivered by the platform layer to the simulation.
//!
//! Events are queued and applied during the input-read phase of a frame.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Fires a bullet.
    Left,
    /// Special weapon. Not implemented; the click is ignored.
    Right,
}

/// Discrete input from the keyboard, mouse, or window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyPressed { key: Key },
    KeyReleased { key: Key },
    MouseClicked { button: MouseButton, target: Vec2 },
    /// Window close request. Stops the run loop.
    Close,
}
