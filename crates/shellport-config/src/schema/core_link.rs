//! Connection settings for the external core.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// WebSocket endpoint of the core (`ws://` or `wss://`).
    pub url: String,
    /// Upper bound of the reconnect backoff in seconds (valid range: 1-300).
    pub reconnect_max_secs: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:4949".into(),
            reconnect_max_secs: 30,
        }
    }
}
