//! Process-wide key event filter.
//!
//! Every key event passes through here before anything else handles it.
//! This is the only place input is forwarded to the core: the filter asks
//! the window's [`KeyCapture`] to normalize a press and returns the result.

use tracing::{debug, info};

use crate::capture::{InputEvent, KeyCapture, NativeKeyEvent, PressOutcome};
use crate::keymap::KeyTables;
use crate::keys::{KeyCode, ModifierMask};
use crate::mouse::{pointer_event, MouseButton};

/// What to do with an event after filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterDecision {
    /// Send this event to the core; the event is claimed.
    Forward(InputEvent),
    /// Stop the event here.
    Consumed,
    /// Let normal handling continue.
    Propagate,
}

#[derive(Debug, Default)]
pub struct EventFilter {
    forwarded: u64,
    suppressed: u64,
}

impl EventFilter {
    pub fn install() -> Self {
        info!("global event filter installed");
        Self::default()
    }

    pub fn key_press(&mut self, capture: &mut KeyCapture, event: &NativeKeyEvent) -> FilterDecision {
        match capture.press(event) {
            PressOutcome::Emit(input) => {
                self.forwarded += 1;
                FilterDecision::Forward(input)
            }
            PressOutcome::ModifierHeld => FilterDecision::Propagate,
            PressOutcome::Suppressed { token, .. } => {
                self.suppressed += 1;
                info!(window_id = capture.window_id(), %token, "artificial event consumed");
                FilterDecision::Consumed
            }
            PressOutcome::SyntheticPassthrough { token, shortcut } => {
                self.suppressed += 1;
                debug!(
                    window_id = capture.window_id(),
                    %token,
                    shortcut = shortcut.name(),
                    "synthetic shortcut left to the window"
                );
                FilterDecision::Propagate
            }
        }
    }

    pub fn key_release(&mut self, capture: &mut KeyCapture, key: KeyCode) -> FilterDecision {
        capture.release(key);
        FilterDecision::Propagate
    }

    pub fn pointer_press(
        &mut self,
        tables: &KeyTables,
        capture: &KeyCapture,
        button: MouseButton,
        modifiers: ModifierMask,
        x: f64,
        y: f64,
    ) -> FilterDecision {
        debug!(window_id = capture.window_id(), button = button.number(), x, y, "mouse press");
        self.forwarded += 1;
        FilterDecision::Forward(pointer_event(tables, capture.window_id(), button, modifiers, x, y))
    }

    /// Focus left the window; releases will not be seen.
    pub fn focus_lost(&mut self, capture: &mut KeyCapture) {
        capture.reset();
    }

    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }

    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }
}
