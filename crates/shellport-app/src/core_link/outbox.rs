//! The event loop's handle for sending to the core.

use serde_json::Value;
use shellport_common::{CallbackId, PortError};
use shellport_platform::InputEvent;
use shellport_webview::CoreSink;
use tokio::sync::mpsc;

use super::protocol::PortMessage;

/// Queues messages for the link task. Sends never block; while the link is
/// gone they are dropped.
#[derive(Debug, Clone)]
pub struct CoreOutbox {
    tx: mpsc::UnboundedSender<PortMessage>,
}

impl CoreOutbox {
    pub fn new(tx: mpsc::UnboundedSender<PortMessage>) -> Self {
        Self { tx }
    }

    pub fn send(&self, msg: PortMessage) {
        if self.tx.send(msg).is_err() {
            tracing::debug!("Core link gone, message dropped");
        }
    }

    pub fn answer(&self, id: u64, result: Result<Value, PortError>) {
        self.send(PortMessage::answer(id, result));
    }
}

impl CoreSink for CoreOutbox {
    fn push_input_event(&mut self, event: &InputEvent) {
        tracing::trace!(
            window_id = %event.window_id,
            key_string = %event.key_string,
            "push_input_event"
        );
        self.send(PortMessage::PushInputEvent(event.clone()));
    }

    fn minibuffer_javascript_call_back(
        &mut self,
        window_id: &str,
        result: Value,
        callback_id: CallbackId,
    ) {
        self.send(PortMessage::MinibufferJavascriptCallBack {
            window_id: window_id.to_string(),
            result,
            callback_id,
        });
    }
}
