use tracing::warn;

use crate::keys::ModifierMask;

use super::profile::PlatformProfile;

/// Modifier names the core may send that have no native bit to map onto.
pub const UNSUPPORTED_MODIFIERS: &[&str] = &["Meta", "H", "Lock"];

/// Result of looking up a modifier name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierLookup {
    /// The name maps onto this native bit.
    Mask(ModifierMask),
    /// A valid protocol name with no native counterpart.
    Unsupported,
    /// Not a protocol modifier name at all.
    Unknown,
}

/// Modifier translation tables for one platform profile.
///
/// Built once at startup and passed by reference to everything that
/// translates modifiers.
#[derive(Debug, Clone)]
pub struct KeyTables {
    profile: PlatformProfile,
    modifier_names: [(ModifierMask, &'static str); 4],
}

impl KeyTables {
    pub fn for_profile(profile: PlatformProfile) -> Self {
        let modifier_names = match profile {
            PlatformProfile::Linux | PlatformProfile::Windows => [
                (ModifierMask::SHIFT, "s"),
                (ModifierMask::CONTROL, "C"),
                (ModifierMask::ALT, "S"),
                (ModifierMask::META, "M"),
            ],
            PlatformProfile::MacOs => [
                (ModifierMask::SHIFT, "s"),
                (ModifierMask::CONTROL, "S"),
                (ModifierMask::ALT, "M"),
                (ModifierMask::META, "C"),
            ],
        };
        Self {
            profile,
            modifier_names,
        }
    }

    pub fn profile(&self) -> PlatformProfile {
        self.profile
    }

    /// Name of a single modifier bit. Combined or empty masks give `None`.
    pub fn native_to_modifier_string(&self, bit: ModifierMask) -> Option<&'static str> {
        self.modifier_names
            .iter()
            .find(|(mask, _)| *mask == bit)
            .map(|(_, name)| *name)
    }

    pub fn modifier_string_to_native(&self, name: &str) -> ModifierLookup {
        if let Some((mask, _)) = self.modifier_names.iter().find(|(_, n)| *n == name) {
            return ModifierLookup::Mask(*mask);
        }
        if UNSUPPORTED_MODIFIERS.contains(&name) {
            ModifierLookup::Unsupported
        } else {
            ModifierLookup::Unknown
        }
    }

    /// Names of every bit set in `mask`, in table order.
    ///
    /// An empty mask yields `[""]`: the transport cannot carry an empty list.
    pub fn modifiers_from_mask(&self, mask: ModifierMask) -> Vec<String> {
        let names: Vec<String> = self
            .modifier_names
            .iter()
            .filter(|(bit, _)| mask.contains(*bit))
            .map(|(_, name)| (*name).to_string())
            .collect();
        if names.is_empty() {
            vec![String::new()]
        } else {
            names
        }
    }

    /// Build a native mask from protocol names.
    ///
    /// Empty names are skipped. Unknown names are skipped with a warning.
    /// Any unsupported name turns the whole result into "no modifiers".
    pub fn mask_from_modifier_names<S: AsRef<str>>(&self, names: &[S]) -> ModifierMask {
        let mut mask = ModifierMask::empty();
        for name in names.iter().map(AsRef::as_ref).filter(|n| !n.is_empty()) {
            match self.modifier_string_to_native(name) {
                ModifierLookup::Mask(bit) => mask |= bit,
                ModifierLookup::Unknown => {
                    warn!(modifier = name, "unrecognized modifier, ignoring it");
                }
                ModifierLookup::Unsupported => {
                    warn!(
                        modifier = name,
                        profile = self.profile.name(),
                        "unsupported modifier, sending no modifiers"
                    );
                    return ModifierMask::empty();
                }
            }
        }
        mask
    }

    /// Native mask for the toolkit's modifier flags.
    ///
    /// `logo` is the Command key on macOS and the Windows/Super key
    /// elsewhere. On macOS the toolkit reports Command as Control and the
    /// physical Control key as Meta.
    pub fn mask_from_flags(&self, shift: bool, control: bool, alt: bool, logo: bool) -> ModifierMask {
        let (control, logo) = if self.profile.swaps_control_and_meta() {
            (logo, control)
        } else {
            (control, logo)
        };
        let mut mask = ModifierMask::empty();
        mask.set(ModifierMask::SHIFT, shift);
        mask.set(ModifierMask::CONTROL, control);
        mask.set(ModifierMask::ALT, alt);
        mask.set(ModifierMask::META, logo);
        mask
    }

    /// Inverse of [`KeyTables::mask_from_flags`]: `(shift, control, alt, logo)`.
    pub fn flags_from_mask(&self, mask: ModifierMask) -> (bool, bool, bool, bool) {
        let control = mask.contains(ModifierMask::CONTROL);
        let meta = mask.contains(ModifierMask::META);
        let (control, logo) = if self.profile.swaps_control_and_meta() {
            (meta, control)
        } else {
            (control, meta)
        };
        (
            mask.contains(ModifierMask::SHIFT),
            control,
            mask.contains(ModifierMask::ALT),
            logo,
        )
    }
}
