pub mod capture;
pub mod filter;
pub mod key_names;
pub mod keymap;
pub mod keys;
pub mod mouse;
pub mod synthetic;

pub use capture::{
    CaptureState, EventOrigin, InputEvent, KeyCapture, NativeKeyEvent, PressOutcome, Shortcut,
    SyntheticToken, POINTER_NONE,
};
pub use filter::{EventFilter, FilterDecision};
pub use key_names::{decode_key, dom_key_name, DecodedKey, KeyLocation};
pub use keymap::{KeyTables, ModifierLookup, PlatformProfile};
pub use keys::{key, KeyCode, ModifierMask};
pub use mouse::MouseButton;
pub use synthetic::{GeneratedEventRequest, SyntheticInjector, SyntheticTarget, TargetResolver};
