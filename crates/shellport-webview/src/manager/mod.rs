//! wry web view lifecycle.
//!
//! `WebViewManager` builds the `wry::WebView`s hosted by each native window:
//! one for the buffer and one for the minibuffer. Every view reports into
//! a shared event sink drained by the event loop.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

pub struct WebViewManager {
    /// Event sink: handlers push here, the event loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ViewId;

    #[test]
    fn drain_empties_sink() {
        let manager = WebViewManager::new();
        manager.events.lock().unwrap().push(WebViewEvent::IpcMessage {
            view: ViewId::buffer("w1"),
            body: "{}".into(),
        });
        assert_eq!(manager.drain_events().len(), 1);
        assert!(manager.drain_events().is_empty());
    }
}
