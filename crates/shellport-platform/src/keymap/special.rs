//! Platform-independent key tables: special keys and modifier keys.

use crate::keys::{key, KeyCode};

/// Keys the core knows by a fixed name instead of their text.
pub const SPECIAL_KEYS: &[(KeyCode, &str)] = &[
    (key::BACKSPACE, "BACKSPACE"),
    (key::DELETE, "DELETE"),
    (key::ESCAPE, "ESCAPE"),
    (key::HYPHEN, "HYPHEN"),
    (key::RETURN, "RETURN"),
    (key::SPACE, "SPACE"),
    (key::TAB, "TAB"),
    (key::RIGHT, "Right"),
    (key::LEFT, "Left"),
    (key::UP, "Up"),
    (key::DOWN, "Down"),
];

/// Modifier keys and the name pushed for them while held.
pub const MODIFIER_KEYS: &[(KeyCode, &str)] = &[
    (key::SHIFT, "s"),
    (key::CONTROL, "C"),
    (key::CAPS_LOCK, "Lock"),
    (key::ALT, "M"),
    (key::ALT_GR, "M"),
    (key::META, "Meta"),
    (key::SUPER_L, "S"),
    (key::SUPER_R, "S"),
    (key::HYPER_L, "H"),
    (key::HYPER_R, "H"),
];

/// Fold key codes that share a protocol name onto one code.
///
/// Keypad enter reports as `RETURN`; folding it first keeps
/// [`SPECIAL_KEYS`] one-to-one.
pub fn canonical_key(code: KeyCode) -> KeyCode {
    match code {
        key::ENTER => key::RETURN,
        other => other,
    }
}

pub fn native_to_special_string(code: KeyCode) -> Option<&'static str> {
    let code = canonical_key(code);
    SPECIAL_KEYS
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, name)| *name)
}

pub fn special_string_to_native(name: &str) -> Option<KeyCode> {
    SPECIAL_KEYS
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(k, _)| *k)
}

pub fn is_special(code: KeyCode) -> bool {
    native_to_special_string(code).is_some()
}

/// Name of a held modifier key, `None` for ordinary keys.
pub fn modifier_key_string(code: KeyCode) -> Option<&'static str> {
    MODIFIER_KEYS
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, name)| *name)
}

pub fn is_modifier_key(code: KeyCode) -> bool {
    modifier_key_string(code).is_some()
}
