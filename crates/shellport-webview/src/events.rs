//! WebView event types.

use serde::{Deserialize, Serialize};
use shellport_common::CallbackId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Which of a window's two web views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pane {
    Buffer,
    Minibuffer,
}

/// Identifies one web view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId {
    pub window_id: String,
    pub pane: Pane,
}

impl ViewId {
    pub fn buffer(window_id: impl Into<String>) -> Self {
        Self {
            window_id: window_id.into(),
            pane: Pane::Buffer,
        }
    }

    pub fn minibuffer(window_id: impl Into<String>) -> Self {
        Self {
            window_id: window_id.into(),
            pane: Pane::Minibuffer,
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pane = match self.pane {
            Pane::Buffer => "buffer",
            Pane::Minibuffer => "minibuffer",
        };
        write!(f, "{}/{}", self.window_id, pane)
    }
}

/// Events emitted by web views, drained on the event-loop thread.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        view: ViewId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view: ViewId,
        title: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage {
        view: ViewId,
        body: String,
    },
    /// A script evaluated with a callback id finished. `result` is the
    /// JSON-encoded value the engine returned.
    ScriptResult {
        view: ViewId,
        callback_id: CallbackId,
        result: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_id_display() {
        assert_eq!(ViewId::buffer("w1").to_string(), "w1/buffer");
        assert_eq!(ViewId::minibuffer("w1").to_string(), "w1/minibuffer");
    }
}
