//! Pointer input.
//!
//! Button presses become [`InputEvent`]s named `"button1"`..`"button5"`,
//! carrying the pointer position and the current modifier mask.

use crate::capture::InputEvent;
use crate::keymap::KeyTables;
use crate::keys::ModifierMask;

/// A pointer button, numbered the way the core expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Back,
    Forward,
}

impl MouseButton {
    pub fn number(&self) -> u32 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::Back => 4,
            MouseButton::Forward => 5,
        }
    }

    /// DOM `MouseEvent.button` value. Other values have no core name.
    pub fn from_dom(button: i64) -> Option<Self> {
        match button {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            3 => Some(MouseButton::Back),
            4 => Some(MouseButton::Forward),
            _ => None,
        }
    }

    pub fn key_string(&self) -> String {
        format!("button{}", self.number())
    }
}

/// Build the event pushed for a button press at (`x`, `y`).
pub fn pointer_event(
    tables: &KeyTables,
    window_id: &str,
    button: MouseButton,
    modifiers: ModifierMask,
    x: f64,
    y: f64,
) -> InputEvent {
    let code = button.number();
    InputEvent {
        key_code: i64::from(code),
        key_string: button.key_string(),
        modifiers: tables.modifiers_from_mask(modifiers),
        x,
        y,
        low_level_data: i64::from(code),
        window_id: window_id.to_string(),
    }
}
