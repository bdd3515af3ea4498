//! Input events delivered to the canvas.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Control modifier only.
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Whether the platform command modifier is held (Ctrl, or Cmd on macOS).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event type, in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// Release anywhere, on or off the canvas.
    Up,
    Wheel {
        position: Point,
        delta_y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    DoubleClick {
        position: Point,
    },
}

/// A key press with the modifiers held at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key value as reported by the platform ("c", "V", "0", "Escape", ...).
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Key combined with the command modifier.
    pub fn command(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::CTRL)
    }

    /// Whether this is `key` (case-insensitive) with the command modifier held.
    pub fn is_command(&self, key: &str) -> bool {
        self.modifiers.command() && self.key.eq_ignore_ascii_case(key)
    }
}
