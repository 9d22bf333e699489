//! Input events delivered by the host.
//!
//! Positions are in screen coordinates, the same space as the
//! [`ViewportRect`](crate::geometry::ViewportRect) measured for each event.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Raw input the gallery responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel scrolled. Positive `delta_y` scrolls down (zooms out).
    Wheel { delta_y: f32, position: Point },
    /// Pointer button pressed.
    PointerPressed { button: MouseButton, position: Point },
    /// Pointer moved anywhere in the window.
    PointerMoved { position: Point },
    /// Pointer button released anywhere in the window.
    PointerReleased { button: MouseButton, position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys the gallery can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Delete,
    Backspace,
    Tab,
    Space,
}

/// Whether the gallery consumed an event.
///
/// Captured wheel events must not scroll the surrounding page, and a captured
/// pointer press must not start a text selection: the host suppresses the
/// platform default for every captured event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Captured,
    Ignored,
}

impl EventStatus {
    pub fn is_captured(&self) -> bool {
        matches!(self, EventStatus::Captured)
    }

    pub(crate) fn from_handled(handled: bool) -> Self {
        if handled {
            EventStatus::Captured
        } else {
            EventStatus::Ignored
        }
    }
}
