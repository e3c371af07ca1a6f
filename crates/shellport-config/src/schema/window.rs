//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Defaults applied to every window the core creates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title used until the core sets one.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial buffer view height in pixels.
    pub buffer_height: u32,
    /// Minibuffer view height in pixels (valid range: 1-1000).
    pub minibuffer_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "shellport".into(),
            width: 1024,
            buffer_height: 480,
            minibuffer_height: 20,
        }
    }
}

impl WindowConfig {
    /// Initial inner height: the buffer stacked over the minibuffer.
    pub fn initial_height(&self) -> u32 {
        self.buffer_height + self.minibuffer_height
    }
}

// =============================================================================
// Tests
// =============================================================================
