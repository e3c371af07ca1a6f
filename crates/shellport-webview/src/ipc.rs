//! IPC between Rust and the JavaScript running in each web view.
//!
//! - **JS -> Rust**: the init script listens for key and mouse events and
//!   calls `window.ipc.postMessage(JSON.stringify({kind, payload}))`, which
//!   reaches the `ipc_handler` registered on the web view.
//! - **Rust -> JS**: synthetic key events are replayed by evaluating a call
//!   to `window.shellport.synthesize(...)`.

use serde::{Deserialize, Serialize};
use shellport_platform::{dom_key_name, key, KeyTables, NativeKeyEvent};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a simple string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// Key event as reported by the init script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPayload {
    pub key: String,
    #[serde(default)]
    pub location: u32,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub meta_key: bool,
    /// Set on events replayed by [`js_synthesize_key`].
    #[serde(default)]
    pub token: Option<u64>,
}

impl KeyPayload {
    /// The init for replaying `event` in web content.
    pub fn from_native(tables: &KeyTables, event: &NativeKeyEvent) -> Self {
        let (shift_key, ctrl_key, alt_key, meta_key) = tables.flags_from_mask(event.modifiers);
        Self {
            key: dom_key_name(tables.profile(), event.key, event.modifiers),
            location: if event.key == key::ENTER { 3 } else { 0 },
            shift_key,
            ctrl_key,
            alt_key,
            meta_key,
            token: event.token().map(|t| t.0),
        }
    }
}

/// Mouse press as reported by the init script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerPayload {
    pub button: i64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub detail: u32,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub meta_key: bool,
}

/// Input reported by web content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentInput {
    KeyDown(KeyPayload),
    KeyUp(KeyPayload),
    MouseDown(PointerPayload),
    MouseUp(PointerPayload),
    Blur,
}

impl ContentInput {
    /// `None` for kinds that are not input or payloads that do not parse.
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        let json = match &msg.payload {
            IpcPayload::Json(value) => Some(value.clone()),
            _ => None,
        };
        let parse_key = || -> Option<KeyPayload> { serde_json::from_value(json.clone()?).ok() };
        let parse_pointer =
            || -> Option<PointerPayload> { serde_json::from_value(json.clone()?).ok() };
        match msg.kind.as_str() {
            "keydown" => parse_key().map(ContentInput::KeyDown),
            "keyup" => parse_key().map(ContentInput::KeyUp),
            "mousedown" => parse_pointer().map(ContentInput::MouseDown),
            "mouseup" => parse_pointer().map(ContentInput::MouseUp),
            "blur" => Some(ContentInput::Blur),
            _ => None,
        }
    }
}

/// Injected as an initialization script into every web view.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.shellport) { return; }
    var post = window.ipc.postMessage.bind(window.ipc);
    var synthetic = new WeakMap();
    function send(kind, payload) {
        post(JSON.stringify({ kind: kind, payload: payload || null }));
    }
    function genuine(e) {
        return e.isTrusted || synthetic.has(e);
    }
    function keyPayload(e) {
        return {
            key: e.key,
            location: e.location,
            shiftKey: e.shiftKey,
            ctrlKey: e.ctrlKey,
            altKey: e.altKey,
            metaKey: e.metaKey,
            token: synthetic.has(e) ? synthetic.get(e) : null
        };
    }
    function pointerPayload(e) {
        return {
            button: e.button,
            x: e.clientX,
            y: e.clientY,
            detail: e.detail,
            shiftKey: e.shiftKey,
            ctrlKey: e.ctrlKey,
            altKey: e.altKey,
            metaKey: e.metaKey
        };
    }
    function listen(kind, payload, capture) {
        window.addEventListener(kind, function(e) {
            if (!genuine(e)) { return; }
            send(kind, payload ? payload(e) : null);
        }, capture);
    }
    listen('keydown', keyPayload, true);
    listen('keyup', keyPayload, true);
    listen('mousedown', pointerPayload, true);
    listen('mouseup', pointerPayload, true);
    listen('blur', null, false);
    var api = Object.freeze({
        synthesize: function(init) {
            var target = document.activeElement || document.body || document;
            var ev = new KeyboardEvent('keydown', {
                key: init.key,
                bubbles: true,
                cancelable: true,
                shiftKey: init.shiftKey,
                ctrlKey: init.ctrlKey,
                altKey: init.altKey,
                metaKey: init.metaKey
            });
            synthetic.set(ev, init.token);
            target.dispatchEvent(ev);
        }
    });
    Object.defineProperty(window, 'shellport', { value: api, writable: false, configurable: false });
})();
"#;

/// Script replaying a synthetic key press inside web content.
///
/// The echo comes back through the `keydown` listener carrying `token`.
pub fn js_synthesize_key(init: &KeyPayload) -> String {
    let json = serde_json::to_string(init).unwrap_or_else(|_| "null".to_string());
    format!("window.shellport && window.shellport.synthesize({json});")
}
