use crate::keys::{key, ModifierMask};

use super::event::NativeKeyEvent;

/// Key chords the window handles itself when the core replays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Copy,
    Cut,
    Escape,
    Backspace,
    Delete,
}

impl Shortcut {
    pub fn matching(event: &NativeKeyEvent) -> Option<Self> {
        let mods = event.modifiers;
        match event.key {
            key::C if mods == ModifierMask::CONTROL => Some(Shortcut::Copy),
            key::X if mods == ModifierMask::CONTROL => Some(Shortcut::Cut),
            key::ESCAPE if mods.is_empty() => Some(Shortcut::Escape),
            key::BACKSPACE if mods.is_empty() => Some(Shortcut::Backspace),
            key::DELETE if mods.is_empty() => Some(Shortcut::Delete),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shortcut::Copy => "C-c",
            Shortcut::Cut => "C-x",
            Shortcut::Escape => "ESCAPE",
            Shortcut::Backspace => "BACKSPACE",
            Shortcut::Delete => "DELETE",
        }
    }
}
