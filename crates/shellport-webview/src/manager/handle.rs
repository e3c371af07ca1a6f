use std::sync::{Arc, Mutex};

use shellport_common::CallbackId;
use tracing::debug;
use wry::WebView;

use crate::events::{ViewId, WebViewEvent};
use crate::ipc::{js_synthesize_key, KeyPayload};

/// Handle to a managed web view.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) view: ViewId,
    pub(super) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewHandle {
    pub fn view(&self) -> &ViewId {
        &self.view
    }

    /// Execute JavaScript; the result is pushed to the event sink as a
    /// [`WebViewEvent::ScriptResult`] tagged with `callback_id`.
    pub fn evaluate_script_with_result(
        &self,
        js: &str,
        callback_id: CallbackId,
    ) -> Result<(), wry::Error> {
        let events = Arc::clone(&self.events);
        let view = self.view.clone();
        self.webview.evaluate_script_with_callback(js, move |result| {
            debug!(view = %view, %callback_id, len = result.len(), "script result");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::ScriptResult {
                    view: view.clone(),
                    callback_id,
                    result,
                });
            }
        })
    }

    /// Replay a key press inside the page.
    pub fn synthesize_key(&self, init: &KeyPayload) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_synthesize_key(init))
    }

    /// Set the view bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
