use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::keymap::{is_modifier_key, modifier_key_string, native_to_special_string};
use crate::keys::KeyCode;

use super::event::{non_empty, InputEvent, NativeKeyEvent, SyntheticToken};
use super::shortcut::Shortcut;

/// Tokens a window may have in flight before the oldest are dropped.
pub const MAX_PENDING_SYNTHETIC: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    ModifiersHeld,
}

/// What a key press did to the capture.
#[derive(Debug, Clone, PartialEq)]
pub enum PressOutcome {
    /// A normalized event ready for the core.
    Emit(InputEvent),
    /// A modifier key went onto the stack.
    ModifierHeld,
    /// A synthetic press was swallowed.
    Suppressed {
        token: SyntheticToken,
        /// False when the token was unknown or already consumed.
        was_pending: bool,
    },
    /// A synthetic shortcut press the window should act on itself.
    SyntheticPassthrough {
        token: SyntheticToken,
        shortcut: Shortcut,
    },
}

/// Per-window key capture: the modifier stack, the current event and the
/// ledger of synthetic events injected into this window.
#[derive(Debug)]
pub struct KeyCapture {
    window_id: String,
    modifier_stack: Vec<KeyCode>,
    current_event: Option<InputEvent>,
    pending: VecDeque<SyntheticToken>,
}

impl KeyCapture {
    pub fn new(window_id: impl Into<String>) -> Self {
        Self {
            window_id: window_id.into(),
            modifier_stack: Vec::new(),
            current_event: None,
            pending: VecDeque::new(),
        }
    }

    pub fn window_id(&self) -> &str {
        &self.window_id
    }

    pub fn state(&self) -> CaptureState {
        if self.modifier_stack.is_empty() {
            CaptureState::Idle
        } else {
            CaptureState::ModifiersHeld
        }
    }

    pub fn press(&mut self, event: &NativeKeyEvent) -> PressOutcome {
        if let Some(token) = event.token() {
            let was_pending = self.take_pending(token);
            if !was_pending {
                debug!(window_id = %self.window_id, %token, "synthetic press with no pending token");
            }
            if let Some(shortcut) = Shortcut::matching(event) {
                info!(
                    window_id = %self.window_id,
                    shortcut = shortcut.name(),
                    "generated shortcut, handing it to the window"
                );
                return PressOutcome::SyntheticPassthrough { token, shortcut };
            }
            info!(window_id = %self.window_id, %token, "generated keypress, not forwarding");
            return PressOutcome::Suppressed { token, was_pending };
        }

        if is_modifier_key(event.key) {
            // Auto-repeat of a held modifier must not stack duplicates.
            if !self.modifier_stack.contains(&event.key) {
                self.modifier_stack.push(event.key);
            }
            return PressOutcome::ModifierHeld;
        }

        let input = InputEvent::key(
            self.window_id.clone(),
            event.key,
            key_string(event),
            self.modifier_strings(),
        );
        debug!(
            window_id = %self.window_id,
            key_code = input.key_code,
            key_string = %input.key_string,
            modifiers = ?input.modifiers,
            "key press captured"
        );
        self.current_event = Some(input.clone());
        PressOutcome::Emit(input)
    }

    /// Releasing any modifier key drops every held modifier.
    pub fn release(&mut self, key: KeyCode) {
        if is_modifier_key(key) {
            self.modifier_stack.clear();
            self.current_event = None;
        }
    }

    /// Forget held modifiers, e.g. when the window loses focus and the
    /// release will never be seen.
    pub fn reset(&mut self) {
        self.modifier_stack.clear();
        self.current_event = None;
    }

    /// Held modifiers as protocol strings, `[""]` when none are held.
    pub fn modifier_strings(&self) -> Vec<String> {
        non_empty(
            self.modifier_stack
                .iter()
                .filter_map(|code| modifier_key_string(*code))
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn current_event(&self) -> Option<&InputEvent> {
        self.current_event.as_ref()
    }

    /// Register a token about to be dispatched into this window.
    ///
    /// An echo that never arrives leaves its token behind, so the ledger
    /// keeps at most [`MAX_PENDING_SYNTHETIC`] entries.
    pub fn expect_synthetic(&mut self, token: SyntheticToken) {
        while self.pending.len() >= MAX_PENDING_SYNTHETIC {
            if let Some(stale) = self.pending.pop_front() {
                warn!(window_id = %self.window_id, token = %stale, "dropping unanswered synthetic token");
            }
        }
        self.pending.push_back(token);
    }

    /// Consume a pending token. True the first time only.
    pub fn take_pending(&mut self, token: SyntheticToken) -> bool {
        match self.pending.iter().position(|t| *t == token) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Drop a token whose dispatch failed.
    pub fn withdraw(&mut self, token: SyntheticToken) {
        if self.take_pending(token) {
            debug!(window_id = %self.window_id, %token, "withdrew synthetic token");
        }
    }

    pub fn pending_synthetic(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, token: SyntheticToken) -> bool {
        self.pending.contains(&token)
    }
}

/// Resolve the protocol string for a non-modifier key.
///
/// Special names win, then printable toolkit text, then the lowercased
/// character of the raw code. Codes with no text give `""`.
pub fn key_string(event: &NativeKeyEvent) -> String {
    if let Some(name) = native_to_special_string(event.key) {
        return name.to_string();
    }
    if !event.text.is_empty() && !event.text.chars().any(char::is_control) {
        return event.text.clone();
    }
    match char::from_u32(event.key) {
        Some(c) if !c.is_control() => c.to_lowercase().collect(),
        _ => String::new(),
    }
}
