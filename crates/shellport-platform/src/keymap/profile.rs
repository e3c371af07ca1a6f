use shellport_config::schema::ProfileSetting;

/// Platform profile deciding how modifier bits are named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformProfile {
    Linux,
    MacOs,
    Windows,
}

impl PlatformProfile {
    /// Profile of the host OS.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            PlatformProfile::MacOs
        } else if cfg!(target_os = "windows") {
            PlatformProfile::Windows
        } else {
            PlatformProfile::Linux
        }
    }

    /// Resolve a config setting, detecting the host for `Auto`.
    pub fn from_setting(setting: ProfileSetting) -> Self {
        match setting {
            ProfileSetting::Auto => Self::detect(),
            ProfileSetting::Linux => PlatformProfile::Linux,
            ProfileSetting::Macos => PlatformProfile::MacOs,
            ProfileSetting::Windows => PlatformProfile::Windows,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlatformProfile::Linux => "linux",
            PlatformProfile::MacOs => "macos",
            PlatformProfile::Windows => "windows",
        }
    }

    /// Whether the toolkit swaps Control and Command (Meta) on this platform.
    pub fn swaps_control_and_meta(&self) -> bool {
        matches!(self, PlatformProfile::MacOs)
    }
}
