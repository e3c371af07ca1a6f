use serde::{Deserialize, Serialize};

use crate::keys::{KeyCode, ModifierMask};

/// `x`/`y` value for events that did not come from a pointer.
pub const POINTER_NONE: f64 = -1.0;

/// Identifies one synthetic injection from dispatch until it is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntheticToken(pub u64);

impl std::fmt::Display for SyntheticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "synthetic#{}", self.0)
    }
}

/// Where a key event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOrigin {
    #[default]
    User,
    Synthetic(SyntheticToken),
}

/// A key event as delivered by the toolkit, after key-name decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeKeyEvent {
    pub key: KeyCode,
    pub modifiers: ModifierMask,
    /// Text the toolkit produced for the press. May be empty or a control
    /// character (`"\u{1}"` for C-a).
    pub text: String,
    pub origin: EventOrigin,
}

impl NativeKeyEvent {
    pub fn user(key: KeyCode, modifiers: ModifierMask, text: impl Into<String>) -> Self {
        Self {
            key,
            modifiers,
            text: text.into(),
            origin: EventOrigin::User,
        }
    }

    pub fn synthetic(key: KeyCode, modifiers: ModifierMask, token: SyntheticToken) -> Self {
        Self {
            key,
            modifiers,
            text: String::new(),
            origin: EventOrigin::Synthetic(token),
        }
    }

    pub fn token(&self) -> Option<SyntheticToken> {
        match self.origin {
            EventOrigin::Synthetic(token) => Some(token),
            EventOrigin::User => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.token().is_some()
    }
}

/// Normalized input event pushed to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub key_code: i64,
    pub key_string: String,
    /// Never empty: `[""]` stands for "no modifiers".
    pub modifiers: Vec<String>,
    pub x: f64,
    pub y: f64,
    pub low_level_data: i64,
    pub window_id: String,
}

impl InputEvent {
    /// A keyboard event; `low_level_data` defaults to the key code.
    pub fn key(
        window_id: impl Into<String>,
        key_code: KeyCode,
        key_string: impl Into<String>,
        modifiers: Vec<String>,
    ) -> Self {
        Self {
            key_code: i64::from(key_code),
            key_string: key_string.into(),
            modifiers: non_empty(modifiers),
            x: POINTER_NONE,
            y: POINTER_NONE,
            low_level_data: i64::from(key_code),
            window_id: window_id.into(),
        }
    }

    pub fn is_pointer(&self) -> bool {
        self.x != POINTER_NONE || self.y != POINTER_NONE
    }
}

pub(crate) fn non_empty(modifiers: Vec<String>) -> Vec<String> {
    if modifiers.is_empty() {
        vec![String::new()]
    } else {
        modifiers
    }
}
