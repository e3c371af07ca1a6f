//! Configuration schema types for shellport.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod core_link;
mod platform;
mod system;
mod window;

pub use core_link::*;
pub use platform::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for shellport.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShellportConfig {
    pub platform: PlatformConfig,
    pub core: CoreConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
