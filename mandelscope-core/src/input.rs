//! Discrete input events delivered by a display surface, and the view
//! commands they map to.

use serde::{Deserialize, Serialize};

/// Pointer button identifiers, numbered the way browsers and most windowing
/// libraries do (0 = primary).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl PointerButton {
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// Keys the explorer understands. Anything else arrives as `Unknown`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Char(char),
    Unknown(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` style identifier.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => Key::Unknown(other.to_string()),
                }
            }
        }
    }
}

/// An event from the display surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    PointerPress {
        button: PointerButton,
        px: f64,
        py: f64,
    },
    KeyPress(Key),
}

/// Named view transitions, independent of how they were triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    DumpState,
    IncreaseIterations,
    DecreaseIterations,
    IncreaseStride,
    DecreaseStride,
}

impl ViewCommand {
    /// Default key binding. Returns `None` for unbound keys.
    pub fn for_key(key: &Key) -> Option<Self> {
        let command = match key {
            Key::ArrowLeft => ViewCommand::PanLeft,
            Key::ArrowRight => ViewCommand::PanRight,
            Key::ArrowUp => ViewCommand::PanUp,
            Key::ArrowDown => ViewCommand::PanDown,
            Key::Char('z') => ViewCommand::ZoomIn,
            Key::Char('x') => ViewCommand::ZoomOut,
            Key::Char('e') => ViewCommand::DumpState,
            Key::Char('a') => ViewCommand::IncreaseIterations,
            Key::Char('s') => ViewCommand::DecreaseIterations,
            Key::Char('w') => ViewCommand::IncreaseStride,
            Key::Char('q') => ViewCommand::DecreaseStride,
            _ => return None,
        };
        Some(command)
    }
}
