//! Key name decoding.
//!
//! Web content and winit both name keys with the DOM `KeyboardEvent.key`
//! vocabulary (`"ArrowUp"`, `"Backspace"`, `" "`, `"a"`). This module maps
//! those names onto native key codes, and back again for synthetic events.

use crate::keymap::PlatformProfile;
use crate::keys::{key, KeyCode, ModifierMask};

/// DOM `KeyboardEvent.location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyLocation {
    #[default]
    Standard,
    Left,
    Right,
    Numpad,
}

impl KeyLocation {
    pub fn from_dom(location: u32) -> Self {
        match location {
            1 => KeyLocation::Left,
            2 => KeyLocation::Right,
            3 => KeyLocation::Numpad,
            _ => KeyLocation::Standard,
        }
    }
}

/// A decoded key: native code plus the text it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKey {
    pub code: KeyCode,
    pub text: String,
}

impl DecodedKey {
    fn named(code: KeyCode) -> Self {
        Self {
            code,
            text: String::new(),
        }
    }
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Escape", key::ESCAPE),
    ("Tab", key::TAB),
    ("Backspace", key::BACKSPACE),
    ("Enter", key::RETURN),
    ("Insert", key::INSERT),
    ("Delete", key::DELETE),
    ("Home", key::HOME),
    ("End", key::END),
    ("PageUp", key::PAGE_UP),
    ("PageDown", key::PAGE_DOWN),
    ("ArrowLeft", key::LEFT),
    ("ArrowUp", key::UP),
    ("ArrowRight", key::RIGHT),
    ("ArrowDown", key::DOWN),
    ("Shift", key::SHIFT),
    ("Alt", key::ALT),
    ("AltGraph", key::ALT_GR),
    ("CapsLock", key::CAPS_LOCK),
];

/// Decode a key name, `None` for names with no native code.
///
/// On macOS the toolkit reports the Command key as Control and the
/// physical Control key as Meta.
pub fn decode_key(profile: PlatformProfile, name: &str, location: KeyLocation) -> Option<DecodedKey> {
    if let Some((_, code)) = NAMED_KEYS.iter().find(|(n, _)| *n == name) {
        let code = match (*code, location) {
            (key::RETURN, KeyLocation::Numpad) => key::ENTER,
            (code, _) => code,
        };
        return Some(DecodedKey::named(code));
    }

    let right = location == KeyLocation::Right;
    let code = match name {
        "Control" if profile.swaps_control_and_meta() => key::META,
        "Control" => key::CONTROL,
        "Meta" | "Super" | "OS" if profile.swaps_control_and_meta() => key::CONTROL,
        "Meta" | "Super" | "OS" if right => key::SUPER_R,
        "Meta" | "Super" | "OS" => key::SUPER_L,
        "Hyper" if right => key::HYPER_R,
        "Hyper" => key::HYPER_L,
        " " | "Space" => {
            return Some(DecodedKey {
                code: key::SPACE,
                text: " ".to_string(),
            })
        }
        _ => return decode_function_key(name).or_else(|| decode_character(name)),
    };
    Some(DecodedKey::named(code))
}

fn decode_function_key(name: &str) -> Option<DecodedKey> {
    let n: u32 = name.strip_prefix('F')?.parse().ok()?;
    if (1..=35).contains(&n) {
        Some(DecodedKey::named(key::F1 + n - 1))
    } else {
        None
    }
}

/// Printable keys: the code is the uppercase character, the text is the
/// character as typed.
fn decode_character(name: &str) -> Option<DecodedKey> {
    let mut chars = name.chars();
    let c = chars.next()?;
    if chars.next().is_some() || c.is_control() {
        return None;
    }
    let mut upper = c.to_uppercase();
    let code = match (upper.next(), upper.next()) {
        (Some(u), None) => u as KeyCode,
        _ => c as KeyCode,
    };
    Some(DecodedKey {
        code,
        text: c.to_string(),
    })
}

/// DOM key name used when dispatching a synthetic event into web content.
pub fn dom_key_name(profile: PlatformProfile, code: KeyCode, modifiers: ModifierMask) -> String {
    let code = crate::keymap::canonical_key(code);
    if let Some((name, _)) = NAMED_KEYS.iter().find(|(_, k)| *k == code) {
        return (*name).to_string();
    }
    let swapped = profile.swaps_control_and_meta();
    match code {
        key::CONTROL if swapped => return "Meta".to_string(),
        key::CONTROL => return "Control".to_string(),
        key::META if swapped => return "Control".to_string(),
        key::META | key::SUPER_L | key::SUPER_R => return "Meta".to_string(),
        key::HYPER_L | key::HYPER_R => return "Hyper".to_string(),
        key::SPACE => return " ".to_string(),
        _ => {}
    }
    if (key::F1..key::F1 + 35).contains(&code) {
        return format!("F{}", code - key::F1 + 1);
    }
    match char::from_u32(code) {
        Some(c) if !c.is_control() => {
            if modifiers.contains(ModifierMask::SHIFT) {
                c.to_string()
            } else {
                c.to_lowercase().collect()
            }
        }
        _ => "Unidentified".to_string(),
    }
}
