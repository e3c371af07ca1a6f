//! The port bridge: everything between native input, the windows and the
//! core.
//!
//! Owns the window registry, the global event filter and the synthetic
//! injector. Requests from the core land here as method calls; input from
//! web content arrives as IPC messages and leaves through a [`CoreSink`].

use shellport_common::{CallbackId, PortError};
use shellport_config::schema::WindowConfig;
use shellport_platform::{
    decode_key, EventFilter, EventOrigin, FilterDecision, GeneratedEventRequest, InputEvent,
    KeyLocation, KeyTables, ModifierMask, MouseButton, NativeKeyEvent, SyntheticInjector,
    SyntheticTarget, SyntheticToken,
};
use tracing::{debug, info, warn};

use crate::events::{Pane, ViewId, WebViewEvent};
use crate::ipc::{ContentInput, IpcMessage, KeyPayload, PointerPayload};
use crate::minibuffer::decode_script_result;
use crate::registry::WindowRegistry;
use crate::window::{WindowFactory, WindowSurface};

/// Outbound notifications to the core.
pub trait CoreSink {
    fn push_input_event(&mut self, event: &InputEvent);

    fn minibuffer_javascript_call_back(
        &mut self,
        window_id: &str,
        result: serde_json::Value,
        callback_id: CallbackId,
    );
}

pub struct PortBridge<S, C> {
    tables: KeyTables,
    registry: WindowRegistry<S>,
    filter: EventFilter,
    injector: SyntheticInjector,
    sink: C,
    window_config: WindowConfig,
}

impl<S: WindowSurface, C: CoreSink> PortBridge<S, C> {
    pub fn new(tables: KeyTables, window_config: WindowConfig, sink: C) -> Self {
        Self {
            tables,
            registry: WindowRegistry::new(),
            filter: EventFilter::install(),
            injector: SyntheticInjector::new(),
            sink,
            window_config,
        }
    }

    pub fn tables(&self) -> &KeyTables {
        &self.tables
    }

    pub fn registry(&self) -> &WindowRegistry<S> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry<S> {
        &mut self.registry
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn sink(&self) -> &C {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut C {
        &mut self.sink
    }

    // -- core requests --

    pub fn make<F>(&mut self, factory: &mut F, identifier: &str) -> Result<String, PortError>
    where
        F: WindowFactory<Surface = S>,
    {
        self.registry.make(factory, identifier, &self.window_config)
    }

    pub fn window_set_title(&mut self, window_id: &str, title: &str) -> Result<String, PortError> {
        Ok(self.registry.get_mut(window_id)?.set_title(title))
    }

    pub fn window_delete(&mut self, window_id: &str) -> Result<bool, PortError> {
        let deleted = self.registry.get_mut(window_id)?.delete();
        self.registry.set_focus(window_id, false);
        Ok(deleted)
    }

    /// Unknown windows do not exist.
    pub fn window_exists(&self, window_id: &str) -> bool {
        self.registry
            .get(window_id)
            .map(|w| w.exists())
            .unwrap_or(false)
    }

    pub fn window_active(&self) -> Option<String> {
        self.registry.active().map(str::to_string)
    }

    pub fn set_minibuffer_height(&mut self, window_id: &str, height: u32) -> Result<bool, PortError> {
        self.registry
            .get_mut(window_id)?
            .set_minibuffer_height(height)
    }

    pub fn minibuffer_evaluate_javascript(
        &mut self,
        window_id: &str,
        script: &str,
    ) -> Result<CallbackId, PortError> {
        let callback_id = self
            .registry
            .get_mut(window_id)?
            .minibuffer_evaluate_javascript(script)?;
        debug!(window_id, %callback_id, "minibuffer script started");
        Ok(callback_id)
    }

    pub fn generate_input_event(
        &mut self,
        request: &GeneratedEventRequest,
    ) -> Result<SyntheticToken, PortError> {
        self.injector
            .inject(&mut self.registry, &self.tables, request)
            .inspect_err(|e| {
                warn!(window_id = %request.window_id, error = %e, "generate_input_event failed");
            })
    }

    // -- native input --

    pub fn key_press(
        &mut self,
        window_id: &str,
        event: &NativeKeyEvent,
    ) -> Result<FilterDecision, PortError> {
        let window = self.registry.get_mut(window_id)?;
        let decision = self.filter.key_press(window.capture_mut(), event);
        if let FilterDecision::Forward(input) = &decision {
            info!(
                window_id,
                key_code = input.key_code,
                key_string = %input.key_string,
                modifiers = ?input.modifiers,
                "sending push-input-event"
            );
            self.sink.push_input_event(input);
        }
        Ok(decision)
    }

    pub fn key_release(&mut self, window_id: &str, key: u32) -> Result<FilterDecision, PortError> {
        let window = self.registry.get_mut(window_id)?;
        Ok(self.filter.key_release(window.capture_mut(), key))
    }

    pub fn pointer_press(
        &mut self,
        window_id: &str,
        button: MouseButton,
        modifiers: ModifierMask,
        x: f64,
        y: f64,
    ) -> Result<FilterDecision, PortError> {
        let window = self.registry.get(window_id)?;
        let decision =
            self.filter
                .pointer_press(&self.tables, window.capture(), button, modifiers, x, y);
        if let FilterDecision::Forward(input) = &decision {
            self.sink.push_input_event(input);
        }
        Ok(decision)
    }

    pub fn focus_changed(&mut self, window_id: &str, focused: bool) {
        self.registry.set_focus(window_id, focused);
        if !focused {
            if let Ok(window) = self.registry.get_mut(window_id) {
                self.filter.focus_lost(window.capture_mut());
            }
        }
    }

    /// A minibuffer script finished. Null results are not reported.
    pub fn script_result(&mut self, window_id: &str, callback_id: CallbackId, raw: &str) {
        match decode_script_result(raw) {
            Some(result) => {
                self.sink
                    .minibuffer_javascript_call_back(window_id, result, callback_id);
            }
            None => debug!(window_id, %callback_id, "null script result dropped"),
        }
    }

    // -- web view events --

    pub fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::IpcMessage { view, body } => self.handle_ipc(&view, &body),
            WebViewEvent::ScriptResult {
                view,
                callback_id,
                result,
            } => {
                if view.pane == Pane::Minibuffer {
                    self.script_result(&view.window_id, callback_id, &result);
                }
            }
            WebViewEvent::PageLoad { view, state, url } => {
                debug!(view = %view, ?state, url = %url, "page load");
            }
            WebViewEvent::TitleChanged { view, title } => {
                debug!(view = %view, title = %title, "document title changed");
            }
        }
    }

    pub fn handle_ipc(&mut self, view: &ViewId, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(view = %view, body_len = body.len(), "IPC message rejected: failed to parse");
            return;
        };
        let Some(input) = ContentInput::from_ipc(&msg) else {
            warn!(view = %view, kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        };

        let result = match input {
            ContentInput::KeyDown(payload) => match self.decode(&payload) {
                Some(event) => self.key_press(&view.window_id, &event).map(|_| ()),
                None => {
                    debug!(view = %view, key = %payload.key, "key without native code ignored");
                    self.settle_token(&view.window_id, payload.token)
                }
            },
            ContentInput::KeyUp(payload) => match self.decode(&payload) {
                Some(event) => self.key_release(&view.window_id, event.key).map(|_| ()),
                None => Ok(()),
            },
            ContentInput::MouseDown(payload) => self.content_pointer(view, &payload),
            ContentInput::MouseUp(_) => {
                debug!(view = %view, "mouse release");
                Ok(())
            }
            ContentInput::Blur => {
                debug!(view = %view, "view lost focus");
                self.registry
                    .get_mut(&view.window_id)
                    .map(|window| self.filter.focus_lost(window.capture_mut()))
            }
        };
        if let Err(e) = result {
            warn!(view = %view, error = %e, "IPC input dropped");
        }
    }

    /// An echoed synthetic key with no native code still answers its token.
    fn settle_token(&mut self, window_id: &str, token: Option<u64>) -> Result<(), PortError> {
        if let Some(token) = token.map(SyntheticToken) {
            let window = self.registry.get_mut(window_id)?;
            if window.capture_mut().take_pending(token) {
                debug!(window_id, %token, "undecodable synthetic echo settled");
            }
        }
        Ok(())
    }

    fn decode(&self, payload: &KeyPayload) -> Option<NativeKeyEvent> {
        let decoded = decode_key(
            self.tables.profile(),
            &payload.key,
            KeyLocation::from_dom(payload.location),
        )?;
        let modifiers = self.tables.mask_from_flags(
            payload.shift_key,
            payload.ctrl_key,
            payload.alt_key,
            payload.meta_key,
        );
        let origin = match payload.token {
            Some(token) => EventOrigin::Synthetic(SyntheticToken(token)),
            None => EventOrigin::User,
        };
        Some(NativeKeyEvent {
            key: decoded.code,
            modifiers,
            text: decoded.text,
            origin,
        })
    }

    fn content_pointer(&mut self, view: &ViewId, payload: &PointerPayload) -> Result<(), PortError> {
        if payload.detail >= 2 {
            info!(view = %view, "double click");
            return Ok(());
        }
        let Some(button) = MouseButton::from_dom(payload.button) else {
            debug!(view = %view, button = payload.button, "unnamed mouse button ignored");
            return Ok(());
        };
        let modifiers = self.tables.mask_from_flags(
            payload.shift_key,
            payload.ctrl_key,
            payload.alt_key,
            payload.meta_key,
        );
        // Minibuffer coordinates are relative to the minibuffer view.
        let y = match view.pane {
            Pane::Buffer => payload.y,
            Pane::Minibuffer => payload.y + self.registry.get(&view.window_id)?.minibuffer_top(),
        };
        self.pointer_press(&view.window_id, button, modifiers, payload.x, y)
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shellport_platform::{key, PlatformProfile, PressOutcome};

    use super::*;
    use crate::testing::{MockFactory, MockSurface, RecordingSink};

    type Bridge = PortBridge<MockSurface, RecordingSink>;

    fn bridge_with(profile: PlatformProfile, ids: &[&str]) -> Bridge {
        let mut bridge = PortBridge::new(
            KeyTables::for_profile(profile),
            WindowConfig::default(),
            RecordingSink::default(),
        );
        let mut factory = MockFactory::default();
        for id in ids {
            bridge.make(&mut factory, id).unwrap();
        }
        bridge
    }

    fn keydown(key: &str, ctrl: bool, token: Option<u64>) -> String {
        json!({
            "kind": "keydown",
            "payload": {"key": key, "ctrlKey": ctrl, "token": token}
        })
        .to_string()
    }

    fn keyup(key: &str) -> String {
        json!({"kind": "keyup", "payload": {"key": key}}).to_string()
    }

    fn request(window_id: &str, key_code: u32, modifiers: &[&str]) -> GeneratedEventRequest {
        GeneratedEventRequest {
            window_id: window_id.into(),
            key_code: i64::from(key_code),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            low_level_data: i64::from(key_code),
            x: -1.0,
            y: -1.0,
        }
    }

    /// Feed a dispatched synthetic event back the way web content echoes it.
    fn echo(bridge: &mut Bridge, window_id: &str, event: &NativeKeyEvent) {
        let payload = KeyPayload::from_native(bridge.tables(), event);
        let body = IpcMessage::json("keydown", serde_json::to_value(payload).unwrap());
        bridge.handle_ipc(
            &ViewId::buffer(window_id),
            &serde_json::to_string(&body).unwrap(),
        );
    }

    #[test]
    fn control_a_from_content() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let view = ViewId::buffer("w1");
        bridge.handle_ipc(&view, &keydown("Control", true, None));
        bridge.handle_ipc(&view, &keydown("a", true, None));
        bridge.handle_ipc(&view, &keyup("Control"));

        let pushed = &bridge.sink().pushed;
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].key_string, "a");
        assert_eq!(pushed[0].modifiers, vec!["C"]);
        assert_eq!(pushed[0].window_id, "w1");

        let capture = bridge.registry().get("w1").unwrap().capture();
        assert_eq!(capture.modifier_strings(), vec![""]);
    }

    #[test]
    fn escape_from_content() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge.handle_ipc(&ViewId::buffer("w1"), &keydown("Escape", false, None));
        let pushed = &bridge.sink().pushed;
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].key_string, "ESCAPE");
        assert_eq!(pushed[0].modifiers, vec![""]);
    }

    #[test]
    fn injected_key_is_never_forwarded() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge
            .generate_input_event(&request("w1", key::X, &["C"]))
            .unwrap();

        let dispatched = bridge.registry().get("w1").unwrap().surface().dispatched.clone();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].modifiers, ModifierMask::CONTROL);

        echo(&mut bridge, "w1", &dispatched[0]);
        assert!(bridge.sink().pushed.is_empty());
        assert_eq!(bridge.filter().suppressed(), 1);
        assert_eq!(
            bridge.registry().get("w1").unwrap().capture().pending_synthetic(),
            0
        );
    }

    #[test]
    fn unknown_window_injection() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let err = bridge
            .generate_input_event(&request("nope", key::X, &[]))
            .unwrap_err();
        assert_eq!(err, PortError::WindowNotFound("nope".into()));
        assert!(bridge.registry().get("w1").unwrap().surface().dispatched.is_empty());
    }

    #[test]
    fn rapid_injections_each_clear_their_token() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        for _ in 0..2 {
            let token = bridge
                .generate_input_event(&request("w1", key::A, &[]))
                .unwrap();
            let event = bridge
                .registry()
                .get("w1")
                .unwrap()
                .surface()
                .dispatched
                .last()
                .cloned()
                .unwrap();
            echo(&mut bridge, "w1", &event);
            let capture = bridge.registry().get("w1").unwrap().capture();
            assert!(!capture.is_pending(token));
            assert_eq!(capture.pending_synthetic(), 0);
        }
        assert!(bridge.sink().pushed.is_empty());
    }

    #[test]
    fn user_key_after_injection_is_forwarded() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge
            .generate_input_event(&request("w1", key::A, &[]))
            .unwrap();
        bridge.handle_ipc(&ViewId::buffer("w1"), &keydown("b", false, None));
        assert_eq!(bridge.sink().pushed.len(), 1);
        assert_eq!(bridge.sink().pushed[0].key_string, "b");
    }

    #[test]
    fn failed_dispatch_reports_error_and_leaves_no_token() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge
            .registry_mut()
            .get_mut("w1")
            .unwrap()
            .surface_mut()
            .fail_dispatch = true;
        assert!(bridge
            .generate_input_event(&request("w1", key::A, &[]))
            .is_err());
        assert_eq!(
            bridge.registry().get("w1").unwrap().capture().pending_synthetic(),
            0
        );
    }

    #[test]
    fn synthetic_copy_is_left_to_the_window() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge
            .generate_input_event(&request("w1", key::C, &["C"]))
            .unwrap();
        let event = bridge.registry().get("w1").unwrap().surface().dispatched[0].clone();
        let decision = {
            let window = bridge.registry_mut().get_mut("w1").unwrap();
            window.capture_mut().press(&event)
        };
        assert!(matches!(decision, PressOutcome::SyntheticPassthrough { .. }));
        assert!(bridge.sink().pushed.is_empty());
    }

    #[test]
    fn mac_command_key_is_reported_as_c() {
        let mut bridge = bridge_with(PlatformProfile::MacOs, &["w1"]);
        let view = ViewId::buffer("w1");
        bridge.handle_ipc(&view, &keydown("Meta", false, None));
        bridge.handle_ipc(&view, &keydown("v", false, None));
        assert_eq!(bridge.sink().pushed[0].modifiers, vec!["C"]);
    }

    #[test]
    fn minibuffer_results_only_when_not_null() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let first = bridge
            .minibuffer_evaluate_javascript("w1", "1 + 1")
            .unwrap();
        let second = bridge
            .minibuffer_evaluate_javascript("w1", "void 0")
            .unwrap();
        assert_eq!(first, CallbackId(1));
        assert_eq!(second, CallbackId(2));
        let scripts = &bridge.registry().get("w1").unwrap().surface().scripts;
        assert_eq!(scripts[1], ("void 0".to_string(), CallbackId(2)));

        // Out of order, and the second is null.
        bridge.handle_webview_event(WebViewEvent::ScriptResult {
            view: ViewId::minibuffer("w1"),
            callback_id: second,
            result: "null".into(),
        });
        bridge.handle_webview_event(WebViewEvent::ScriptResult {
            view: ViewId::minibuffer("w1"),
            callback_id: first,
            result: "2".into(),
        });
        assert_eq!(
            bridge.sink().callbacks,
            vec![("w1".to_string(), json!(2), CallbackId(1))]
        );
    }

    #[test]
    fn minibuffer_on_unknown_window() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &[]);
        assert_eq!(
            bridge.minibuffer_evaluate_javascript("w9", "1").unwrap_err(),
            PortError::WindowNotFound("w9".into())
        );
    }

    #[test]
    fn window_requests() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        assert_eq!(bridge.window_set_title("w1", "Next").unwrap(), "Next");
        assert!(bridge.window_exists("w1"));
        assert!(!bridge.window_exists("w2"));
        assert!(bridge.set_minibuffer_height("w1", 30).unwrap());

        bridge.focus_changed("w1", true);
        assert_eq!(bridge.window_active(), Some("w1".to_string()));

        assert!(bridge.window_delete("w1").unwrap());
        assert!(!bridge.window_exists("w1"));
        assert_eq!(bridge.window_active(), None);
        assert!(bridge.window_delete("w2").is_err());
    }

    #[test]
    fn duplicate_make_is_rejected() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let err = bridge.make(&mut MockFactory::default(), "w1").unwrap_err();
        assert_eq!(err, PortError::DuplicateWindow("w1".into()));
    }

    #[test]
    fn focus_loss_drops_held_modifiers() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let view = ViewId::buffer("w1");
        bridge.handle_ipc(&view, &keydown("Control", true, None));
        bridge.focus_changed("w1", false);
        bridge.handle_ipc(&view, &keydown("a", false, None));
        assert_eq!(bridge.sink().pushed[0].modifiers, vec![""]);
    }

    #[test]
    fn mouse_press_in_minibuffer_is_offset() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let body = json!({
            "kind": "mousedown",
            "payload": {"button": 0, "x": 5.0, "y": 3.0, "detail": 1}
        })
        .to_string();
        bridge.handle_ipc(&ViewId::minibuffer("w1"), &body);
        let pushed = &bridge.sink().pushed;
        assert_eq!(pushed[0].key_string, "button1");
        assert_eq!((pushed[0].x, pushed[0].y), (5.0, 483.0));
    }

    #[test]
    fn minibuffer_offset_follows_height_change() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge
            .registry_mut()
            .get_mut("w1")
            .unwrap()
            .set_minibuffer_height(100)
            .unwrap();
        let body = json!({
            "kind": "mousedown",
            "payload": {"button": 0, "x": 5.0, "y": 3.0, "detail": 1}
        })
        .to_string();
        bridge.handle_ipc(&ViewId::minibuffer("w1"), &body);
        assert_eq!(bridge.sink().pushed[0].y, 403.0);
    }

    #[test]
    fn undecodable_synthetic_echo_clears_its_token() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge
            .generate_input_event(&request("w1", key::F1 + 40, &[]))
            .unwrap();
        let dispatched = bridge.registry().get("w1").unwrap().surface().dispatched.clone();
        assert_eq!(
            KeyPayload::from_native(bridge.tables(), &dispatched[0]).key,
            "Unidentified"
        );

        echo(&mut bridge, "w1", &dispatched[0]);
        assert!(bridge.sink().pushed.is_empty());
        assert_eq!(
            bridge.registry().get("w1").unwrap().capture().pending_synthetic(),
            0
        );
    }

    #[test]
    fn content_blur_drops_held_modifiers() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let view = ViewId::buffer("w1");
        bridge.handle_ipc(&view, &keydown("Control", true, None));
        bridge.handle_ipc(&view, r#"{"kind":"blur","payload":null}"#);
        bridge.handle_ipc(&view, &keydown("a", false, None));
        assert_eq!(bridge.sink().pushed[0].modifiers, vec![""]);
    }

    #[test]
    fn double_click_is_not_forwarded() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        let body = json!({
            "kind": "mousedown",
            "payload": {"button": 0, "x": 5.0, "y": 3.0, "detail": 2}
        })
        .to_string();
        bridge.handle_ipc(&ViewId::buffer("w1"), &body);
        assert!(bridge.sink().pushed.is_empty());
    }

    #[test]
    fn garbage_ipc_is_ignored() {
        let mut bridge = bridge_with(PlatformProfile::Linux, &["w1"]);
        bridge.handle_ipc(&ViewId::buffer("w1"), "{not json");
        bridge.handle_ipc(&ViewId::buffer("w1"), r#"{"kind":"ping","payload":null}"#);
        bridge.handle_ipc(&ViewId::buffer("ghost"), &keydown("a", false, None));
        assert!(bridge.sink().pushed.is_empty());
    }
}
