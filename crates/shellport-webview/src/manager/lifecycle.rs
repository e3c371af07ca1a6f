use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::events::ViewId;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a web view as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(config.focused)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), view.clone());
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), view.clone());
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), view.clone());

        let html = config.html.as_deref().unwrap_or("<html><body></body></html>");
        let webview = builder.with_html(html).build_as_child(window)?;

        debug!(view = %view, "WebView created");

        Ok(WebViewHandle {
            webview,
            view,
            events: Arc::clone(&self.events),
        })
    }
}
