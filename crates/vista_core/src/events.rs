//! Host event vocabulary
//!
//! The subset of pointer, keyboard and layout events a scroll viewport
//! reacts to, in a platform-agnostic form.

use serde::{Deserialize, Serialize};

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer interaction aborted by the platform (touch cancel, capture lost)
    pub const POINTER_CANCEL: EventType = 8;
    pub const KEY_DOWN: EventType = 20;
    pub const SCROLL: EventType = 30;
    pub const RESIZE: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A position in client (window) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A measured element size, as reported by a size observer
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);

    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const TAB: KeyCode = KeyCode(0x09);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Map a web-style `KeyboardEvent.key` name to a key code.
    ///
    /// Unrecognized names map to [`KeyCode::UNKNOWN`].
    pub fn from_name(name: &str) -> KeyCode {
        match name {
            "ArrowLeft" | "Left" => KeyCode::LEFT,
            "ArrowUp" | "Up" => KeyCode::UP,
            "ArrowRight" | "Right" => KeyCode::RIGHT,
            "ArrowDown" | "Down" => KeyCode::DOWN,
            "Home" => KeyCode::HOME,
            "End" => KeyCode::END,
            "PageUp" => KeyCode::PAGE_UP,
            "PageDown" => KeyCode::PAGE_DOWN,
            " " | "Space" => KeyCode::SPACE,
            "Tab" => KeyCode::TAB,
            _ => KeyCode::UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::from_name("ArrowLeft"), KeyCode::LEFT);
        assert_eq!(KeyCode::from_name("Down"), KeyCode::DOWN);
        assert_eq!(KeyCode::from_name("End"), KeyCode::END);
        assert_eq!(KeyCode::from_name("F13"), KeyCode::UNKNOWN);
    }
}
