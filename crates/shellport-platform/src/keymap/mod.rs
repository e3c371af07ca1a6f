//! Translation between native key/modifier codes and the core's strings.
//!
//! Special keys and held modifier keys use platform-independent tables
//! ([`special`]). Modifier *bits* are named differently per platform, so
//! those live in a [`KeyTables`] built once from a [`PlatformProfile`].

mod profile;
mod special;
mod tables;

pub use profile::PlatformProfile;
pub use special::{
    canonical_key, is_modifier_key, is_special, modifier_key_string, native_to_special_string,
    special_string_to_native, MODIFIER_KEYS, SPECIAL_KEYS,
};
pub use tables::{KeyTables, ModifierLookup, UNSUPPORTED_MODIFIERS};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{key, ModifierMask};

    const PROFILES: [PlatformProfile; 3] = [
        PlatformProfile::Linux,
        PlatformProfile::MacOs,
        PlatformProfile::Windows,
    ];

    const BITS: [ModifierMask; 4] = [
        ModifierMask::SHIFT,
        ModifierMask::CONTROL,
        ModifierMask::ALT,
        ModifierMask::META,
    ];

    #[test]
    fn modifier_bits_round_trip_on_every_profile() {
        for profile in PROFILES {
            let tables = KeyTables::for_profile(profile);
            for bit in BITS {
                let name = tables.native_to_modifier_string(bit).unwrap();
                assert_eq!(
                    tables.modifier_string_to_native(name),
                    ModifierLookup::Mask(bit),
                    "{profile:?} {name}"
                );
            }
        }
    }

    #[test]
    fn profiles_permute_alt_control_meta() {
        let linux = KeyTables::for_profile(PlatformProfile::Linux);
        assert_eq!(linux.native_to_modifier_string(ModifierMask::CONTROL), Some("C"));
        assert_eq!(linux.native_to_modifier_string(ModifierMask::ALT), Some("S"));
        assert_eq!(linux.native_to_modifier_string(ModifierMask::META), Some("M"));

        let mac = KeyTables::for_profile(PlatformProfile::MacOs);
        assert_eq!(mac.native_to_modifier_string(ModifierMask::CONTROL), Some("S"));
        assert_eq!(mac.native_to_modifier_string(ModifierMask::ALT), Some("M"));
        assert_eq!(mac.native_to_modifier_string(ModifierMask::META), Some("C"));

        let windows = KeyTables::for_profile(PlatformProfile::Windows);
        assert_eq!(windows.native_to_modifier_string(ModifierMask::SHIFT), Some("s"));
        assert_eq!(windows.native_to_modifier_string(ModifierMask::ALT), Some("S"));
    }

    #[test]
    fn combined_mask_has_no_single_name() {
        let tables = KeyTables::for_profile(PlatformProfile::Linux);
        let both = ModifierMask::CONTROL | ModifierMask::SHIFT;
        assert_eq!(tables.native_to_modifier_string(both), None);
        assert_eq!(tables.native_to_modifier_string(ModifierMask::empty()), None);
    }

    #[test]
    fn unsupported_and_unknown_names() {
        let tables = KeyTables::for_profile(PlatformProfile::Linux);
        for name in UNSUPPORTED_MODIFIERS {
            assert_eq!(tables.modifier_string_to_native(name), ModifierLookup::Unsupported);
        }
        assert_eq!(tables.modifier_string_to_native("Q"), ModifierLookup::Unknown);
    }

    #[test]
    fn names_to_mask_skips_empty_and_unknown() {
        let tables = KeyTables::for_profile(PlatformProfile::Linux);
        assert_eq!(
            tables.mask_from_modifier_names(&["C", "", "bogus", "s"]),
            ModifierMask::CONTROL | ModifierMask::SHIFT
        );
        assert_eq!(tables.mask_from_modifier_names(&[""]), ModifierMask::empty());
        let none: [&str; 0] = [];
        assert_eq!(tables.mask_from_modifier_names(&none), ModifierMask::empty());
    }

    #[test]
    fn unsupported_name_degrades_to_no_modifier() {
        let tables = KeyTables::for_profile(PlatformProfile::Linux);
        assert_eq!(
            tables.mask_from_modifier_names(&["C", "H"]),
            ModifierMask::empty()
        );
        assert_eq!(
            tables.mask_from_modifier_names(&["Lock"]),
            ModifierMask::empty()
        );
    }

    #[test]
    fn mask_to_names_uses_transport_placeholder() {
        let tables = KeyTables::for_profile(PlatformProfile::Linux);
        assert_eq!(tables.modifiers_from_mask(ModifierMask::empty()), vec![""]);
        assert_eq!(
            tables.modifiers_from_mask(ModifierMask::META | ModifierMask::SHIFT),
            vec!["s", "M"]
        );
    }

    #[test]
    fn mask_from_flags_swaps_on_mac() {
        let mac = KeyTables::for_profile(PlatformProfile::MacOs);
        // Physical Control on a Mac is the toolkit's Meta, named "C".
        let mask = mac.mask_from_flags(false, true, false, false);
        assert_eq!(mask, ModifierMask::META);
        assert_eq!(mac.modifiers_from_mask(mask), vec!["C"]);

        let linux = KeyTables::for_profile(PlatformProfile::Linux);
        let mask = linux.mask_from_flags(false, true, false, false);
        assert_eq!(mask, ModifierMask::CONTROL);
        assert_eq!(linux.modifiers_from_mask(mask), vec!["C"]);
    }

    #[test]
    fn flags_round_trip_through_mask() {
        for profile in PROFILES {
            let tables = KeyTables::for_profile(profile);
            for flags in [
                (true, false, false, false),
                (false, true, false, false),
                (false, false, true, true),
                (true, true, true, true),
            ] {
                let mask = tables.mask_from_flags(flags.0, flags.1, flags.2, flags.3);
                assert_eq!(tables.flags_from_mask(mask), flags, "{profile:?}");
            }
        }
    }

    #[test]
    fn special_keys_round_trip() {
        for (code, name) in SPECIAL_KEYS {
            assert_eq!(native_to_special_string(*code), Some(*name));
            assert_eq!(special_string_to_native(name), Some(*code));
        }
    }

    #[test]
    fn keypad_enter_reports_return() {
        assert_eq!(native_to_special_string(key::ENTER), Some("RETURN"));
        assert_eq!(special_string_to_native("RETURN"), Some(key::RETURN));
    }

    #[test]
    fn ordinary_keys_are_not_special() {
        assert!(!is_special(key::A));
        assert!(!is_special(key::MINUS));
        assert_eq!(special_string_to_native("F13"), None);
    }

    #[test]
    fn modifier_key_names() {
        assert_eq!(modifier_key_string(key::SHIFT), Some("s"));
        assert_eq!(modifier_key_string(key::CONTROL), Some("C"));
        assert_eq!(modifier_key_string(key::ALT_GR), Some("M"));
        assert_eq!(modifier_key_string(key::SUPER_R), Some("S"));
        assert_eq!(modifier_key_string(key::HYPER_L), Some("H"));
        assert_eq!(modifier_key_string(key::CAPS_LOCK), Some("Lock"));
        assert!(is_modifier_key(key::META));
        assert!(!is_modifier_key(key::ESCAPE));
    }

    #[test]
    fn profile_from_setting() {
        use shellport_config::schema::ProfileSetting;
        assert_eq!(
            PlatformProfile::from_setting(ProfileSetting::Macos),
            PlatformProfile::MacOs
        );
        assert_eq!(
            PlatformProfile::from_setting(ProfileSetting::Auto),
            PlatformProfile::detect()
        );
    }
}
