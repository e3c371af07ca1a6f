//! Native key codes and modifier masks.
//!
//! The numeric values are those of the Qt toolkit the core was first
//! written against, so codes on the wire stay compatible: printable keys use
//! their (uppercase) character code, everything else lives above
//! `0x0100_0000`.

/// A native key code.
pub type KeyCode = u32;

/// Native key code constants.
pub mod key {
    use super::KeyCode;

    pub const ESCAPE: KeyCode = 0x0100_0000;
    pub const TAB: KeyCode = 0x0100_0001;
    pub const BACKTAB: KeyCode = 0x0100_0002;
    pub const BACKSPACE: KeyCode = 0x0100_0003;
    pub const RETURN: KeyCode = 0x0100_0004;
    /// Keypad enter.
    pub const ENTER: KeyCode = 0x0100_0005;
    pub const INSERT: KeyCode = 0x0100_0006;
    pub const DELETE: KeyCode = 0x0100_0007;
    pub const HOME: KeyCode = 0x0100_0010;
    pub const END: KeyCode = 0x0100_0011;
    pub const LEFT: KeyCode = 0x0100_0012;
    pub const UP: KeyCode = 0x0100_0013;
    pub const RIGHT: KeyCode = 0x0100_0014;
    pub const DOWN: KeyCode = 0x0100_0015;
    pub const PAGE_UP: KeyCode = 0x0100_0016;
    pub const PAGE_DOWN: KeyCode = 0x0100_0017;

    pub const SHIFT: KeyCode = 0x0100_0020;
    pub const CONTROL: KeyCode = 0x0100_0021;
    pub const META: KeyCode = 0x0100_0022;
    pub const ALT: KeyCode = 0x0100_0023;
    pub const CAPS_LOCK: KeyCode = 0x0100_0024;
    pub const SUPER_L: KeyCode = 0x0100_0053;
    pub const SUPER_R: KeyCode = 0x0100_0054;
    pub const HYPER_L: KeyCode = 0x0100_0056;
    pub const HYPER_R: KeyCode = 0x0100_0057;
    pub const ALT_GR: KeyCode = 0x0100_1103;

    /// F1; F2..F35 follow consecutively.
    pub const F1: KeyCode = 0x0100_0030;

    pub const SPACE: KeyCode = 0x20;
    pub const MINUS: KeyCode = 0x2d;
    /// Soft hyphen, reported to the core as `HYPHEN`.
    pub const HYPHEN: KeyCode = 0xad;

    pub const A: KeyCode = 0x41;
    pub const C: KeyCode = 0x43;
    pub const X: KeyCode = 0x58;
}

bitflags::bitflags! {
    /// Native keyboard modifier bits carried by a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMask: u32 {
        const SHIFT   = 0x0200_0000;
        const CONTROL = 0x0400_0000;
        const ALT     = 0x0800_0000;
        const META    = 0x1000_0000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_codes_are_ascii() {
        assert_eq!(char::from_u32(key::A), Some('A'));
        assert_eq!(char::from_u32(key::SPACE), Some(' '));
        assert_eq!(char::from_u32(key::MINUS), Some('-'));
    }

    #[test]
    fn toolkit_codes_are_not_characters() {
        for code in [key::ESCAPE, key::LEFT, key::SHIFT, key::F1, key::ALT_GR] {
            assert!(char::from_u32(code).is_none(), "{code:#x}");
        }
    }

    #[test]
    fn modifier_bits_combine() {
        let mask = ModifierMask::CONTROL | ModifierMask::SHIFT;
        assert!(mask.contains(ModifierMask::CONTROL));
        assert!(!mask.contains(ModifierMask::ALT));
        assert_eq!(mask.bits(), 0x0600_0000);
        assert!(ModifierMask::default().is_empty());
    }
}
