//! Native windows: one winit window hosting a buffer and a minibuffer
//! web view.

use std::collections::HashMap;
use std::sync::Arc;

use shellport_common::{CallbackId, PortError, Rect};
use shellport_config::schema::WindowConfig;
use shellport_platform::{KeyTables, NativeKeyEvent};
use shellport_webview::{
    KeyPayload, ViewId, WebViewConfig, WebViewHandle, WebViewManager, WindowFactory,
    WindowSurface,
};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

/// Convert a layout `Rect` (logical coords) to a wry `Rect`.
pub(super) fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// Buffer on top, minibuffer strip at the bottom.
pub(super) fn split_panes(width: f64, height: f64, minibuffer_height: u32) -> (Rect, Rect) {
    Rect::new(0.0, 0.0, width, height).split_bottom(f64::from(minibuffer_height))
}

fn surface_error(context: &str, e: impl std::fmt::Display) -> PortError {
    PortError::Surface(format!("{context}: {e}"))
}

pub struct NativeWindow {
    window: Arc<Window>,
    buffer: WebViewHandle,
    minibuffer: WebViewHandle,
    tables: KeyTables,
    minibuffer_height: u32,
    visible: bool,
}

impl NativeWindow {
    pub fn native_id(&self) -> WindowId {
        self.window.id()
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    fn panes(&self) -> (Rect, Rect) {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        split_panes(size.width, size.height, self.minibuffer_height)
    }

    /// Recompute web view bounds from the current window size.
    pub fn relayout(&self) -> Result<(), PortError> {
        let (top, bottom) = self.panes();
        self.buffer
            .set_bounds(rect_to_wry(&top))
            .map_err(|e| surface_error("buffer bounds", e))?;
        self.minibuffer
            .set_bounds(rect_to_wry(&bottom))
            .map_err(|e| surface_error("minibuffer bounds", e))
    }

    /// Give keyboard focus to the buffer view.
    pub fn focus_buffer(&self) {
        if let Err(e) = self.buffer.focus() {
            tracing::debug!(view = %self.buffer.view(), error = %e, "focus failed");
        }
    }
}

impl WindowSurface for NativeWindow {
    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_visible(&mut self, visible: bool) {
        self.window.set_visible(visible);
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_minibuffer_height(&mut self, height: u32) -> Result<(), PortError> {
        self.minibuffer_height = height;
        self.relayout()
    }

    fn minibuffer_top(&self) -> f64 {
        self.panes().1.y
    }

    fn dispatch_key(&mut self, event: &NativeKeyEvent) -> Result<(), PortError> {
        let init = KeyPayload::from_native(&self.tables, event);
        self.buffer
            .synthesize_key(&init)
            .map_err(|e| surface_error("synthesize key", e))
    }

    fn evaluate_minibuffer(&mut self, script: &str, callback_id: CallbackId) -> Result<(), PortError> {
        self.minibuffer
            .evaluate_script_with_result(script, callback_id)
            .map_err(|e| surface_error("minibuffer script", e))
    }
}

/// Creates native windows while the event loop is active.
pub(super) struct NativeFactory<'a> {
    pub event_loop: &'a ActiveEventLoop,
    pub webviews: &'a WebViewManager,
    pub tables: &'a KeyTables,
    /// Filled with the winit id of every window created.
    pub native_ids: &'a mut HashMap<WindowId, String>,
}

impl WindowFactory for NativeFactory<'_> {
    type Surface = NativeWindow;

    fn create(&mut self, window_id: &str, config: &WindowConfig) -> Result<NativeWindow, PortError> {
        let attrs = WindowAttributes::default()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(
                f64::from(config.width),
                f64::from(config.initial_height()),
            ));
        let window = self
            .event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| surface_error("create window", e))?;

        let width = f64::from(config.width);
        let (top, bottom) = split_panes(
            width,
            f64::from(config.initial_height()),
            config.minibuffer_height,
        );
        let buffer = self
            .webviews
            .create(
                ViewId::buffer(window_id),
                window.as_ref(),
                rect_to_wry(&top),
                WebViewConfig::buffer(),
            )
            .map_err(|e| surface_error("buffer view", e))?;
        let minibuffer = self
            .webviews
            .create(
                ViewId::minibuffer(window_id),
                window.as_ref(),
                rect_to_wry(&bottom),
                WebViewConfig::minibuffer(),
            )
            .map_err(|e| surface_error("minibuffer view", e))?;

        self.native_ids.insert(window.id(), window_id.to_string());
        tracing::info!(window_id, "native window created");

        Ok(NativeWindow {
            window,
            buffer,
            minibuffer,
            tables: self.tables.clone(),
            minibuffer_height: config.minibuffer_height,
            visible: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panes_split_buffer_over_minibuffer() {
        let (top, bottom) = split_panes(1024.0, 500.0, 20);
        assert_eq!(top, Rect::new(0.0, 0.0, 1024.0, 480.0));
        assert_eq!(bottom, Rect::new(0.0, 480.0, 1024.0, 20.0));
    }

    #[test]
    fn oversized_minibuffer_takes_whole_window() {
        let (top, bottom) = split_panes(800.0, 100.0, 300);
        assert_eq!(top.height, 0.0);
        assert_eq!(bottom.height, 100.0);
    }

    #[test]
    fn rect_converts_to_logical_wry_rect() {
        let wry_rect = rect_to_wry(&Rect::new(0.0, 480.0, 1024.0, 20.0));
        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.y - 480.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1024.0).abs() < f64::EPSILON);
                assert!((size.height - 20.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
