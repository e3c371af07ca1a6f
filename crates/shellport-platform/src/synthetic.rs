//! Synthetic key event injection.
//!
//! The core asks the port to replay keys. Each injection gets its own
//! [`SyntheticToken`], registered on the target window's capture before the
//! event is dispatched, so the echo is recognized and dropped exactly once.

use serde::{Deserialize, Serialize};
use shellport_common::PortError;
use tracing::{info, warn};

use crate::capture::{KeyCapture, NativeKeyEvent, SyntheticToken};
use crate::keymap::KeyTables;
use crate::keys::KeyCode;

/// A core request to synthesize one key press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEventRequest {
    pub window_id: String,
    pub key_code: i64,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub low_level_data: i64,
    #[serde(default = "pointer_none")]
    pub x: f64,
    #[serde(default = "pointer_none")]
    pub y: f64,
}

fn pointer_none() -> f64 {
    crate::capture::POINTER_NONE
}

/// A window a synthetic event can be delivered to.
pub trait SyntheticTarget {
    fn capture_mut(&mut self) -> &mut KeyCapture;

    /// Deliver the event into the window's content.
    fn dispatch(&mut self, event: &NativeKeyEvent) -> Result<(), PortError>;
}

/// Looks windows up by identifier.
pub trait TargetResolver {
    type Target: SyntheticTarget;

    fn resolve(&mut self, window_id: &str) -> Option<&mut Self::Target>;
}

/// Allocates tokens and delivers synthetic events.
#[derive(Debug, Default)]
pub struct SyntheticInjector {
    next_token: u64,
    injected: u64,
}

impl SyntheticInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn injected(&self) -> u64 {
        self.injected
    }

    pub fn inject<R: TargetResolver>(
        &mut self,
        windows: &mut R,
        tables: &KeyTables,
        request: &GeneratedEventRequest,
    ) -> Result<SyntheticToken, PortError> {
        let target = windows
            .resolve(&request.window_id)
            .ok_or_else(|| PortError::WindowNotFound(request.window_id.clone()))?;

        let key = KeyCode::try_from(request.key_code).map_err(|_| {
            PortError::Protocol(format!("key code out of range: {}", request.key_code))
        })?;
        let modifiers = tables.mask_from_modifier_names(&request.modifiers);

        self.next_token += 1;
        let token = SyntheticToken(self.next_token);
        let event = NativeKeyEvent::synthetic(key, modifiers, token);

        info!(
            window_id = %request.window_id,
            key_code = request.key_code,
            modifiers = ?request.modifiers,
            mask = modifiers.bits(),
            low_level_data = request.low_level_data,
            %token,
            "generating input event"
        );

        target.capture_mut().expect_synthetic(token);
        if let Err(e) = target.dispatch(&event) {
            warn!(window_id = %request.window_id, %token, error = %e, "synthetic dispatch failed");
            target.capture_mut().withdraw(token);
            return Err(e);
        }
        self.injected += 1;
        Ok(token)
    }
}
