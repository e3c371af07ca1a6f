//! Platform profile selection.

use serde::{Deserialize, Serialize};

/// Which modifier assignment to use when talking to the core.
///
/// `Auto` picks the profile of the host OS at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSetting {
    #[default]
    Auto,
    Linux,
    Macos,
    Windows,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlatformConfig {
    pub profile: ProfileSetting,
}
