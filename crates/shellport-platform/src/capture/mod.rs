//! Per-window input capture.
//!
//! [`KeyCapture`] tracks held modifiers and turns genuine key presses into
//! [`InputEvent`]s. Synthetic presses are recognized by their
//! [`EventOrigin`] and never produce an event.

mod event;
mod shortcut;
mod widget;

pub use event::{EventOrigin, InputEvent, NativeKeyEvent, SyntheticToken, POINTER_NONE};
pub use shortcut::Shortcut;
pub use widget::{key_string, CaptureState, KeyCapture, PressOutcome, MAX_PENDING_SYNTHETIC};
