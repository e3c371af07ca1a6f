//! A core-managed window: native surface, key capture and minibuffer.

use shellport_common::{CallbackId, PortError};
use shellport_config::schema::WindowConfig;
use shellport_platform::{KeyCapture, NativeKeyEvent, SyntheticTarget};
use tracing::info;

use crate::minibuffer::Minibuffer;

/// The native side of a window: whatever hosts the buffer and minibuffer
/// views.
pub trait WindowSurface {
    fn set_title(&mut self, title: &str);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Re-layout with the minibuffer `height` pixels tall.
    fn set_minibuffer_height(&mut self, height: u32) -> Result<(), PortError>;

    /// Logical y of the minibuffer view's top edge in the current layout.
    fn minibuffer_top(&self) -> f64;

    /// Deliver a synthetic key press into the window's content.
    fn dispatch_key(&mut self, event: &NativeKeyEvent) -> Result<(), PortError>;

    /// Run `script` in the minibuffer; the result is reported later under
    /// `callback_id`.
    fn evaluate_minibuffer(&mut self, script: &str, callback_id: CallbackId)
        -> Result<(), PortError>;
}

/// Creates surfaces for new windows.
pub trait WindowFactory {
    type Surface: WindowSurface;

    fn create(&mut self, window_id: &str, config: &WindowConfig) -> Result<Self::Surface, PortError>;
}

pub struct Window<S> {
    id: String,
    surface: S,
    capture: KeyCapture,
    minibuffer: Minibuffer,
    title: String,
}

impl<S: WindowSurface> Window<S> {
    pub fn new(id: impl Into<String>, surface: S, config: &WindowConfig) -> Self {
        let id = id.into();
        Self {
            capture: KeyCapture::new(id.clone()),
            minibuffer: Minibuffer::new(id.clone(), config.minibuffer_height),
            title: config.title.clone(),
            surface,
            id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn capture(&self) -> &KeyCapture {
        &self.capture
    }

    pub fn minibuffer(&self) -> &Minibuffer {
        &self.minibuffer
    }

    /// Offset that maps minibuffer view coordinates to window coordinates.
    pub fn minibuffer_top(&self) -> f64 {
        self.surface.minibuffer_top()
    }

    pub fn set_title(&mut self, title: &str) -> String {
        self.surface.set_title(title);
        self.title = title.to_string();
        info!(window_id = %self.id, "title set");
        self.title.clone()
    }

    /// Windows are hidden, never destroyed.
    pub fn delete(&mut self) -> bool {
        self.surface.set_visible(false);
        self.capture.reset();
        true
    }

    pub fn exists(&self) -> bool {
        self.surface.is_visible()
    }

    pub fn set_minibuffer_height(&mut self, height: u32) -> Result<bool, PortError> {
        self.surface.set_minibuffer_height(height)?;
        self.minibuffer.set_height(height);
        Ok(true)
    }

    /// Start a minibuffer evaluation and return its callback id.
    ///
    /// The id is taken before the script runs, so a result that arrives
    /// after later calls is still reported under its own id.
    pub fn minibuffer_evaluate_javascript(&mut self, script: &str) -> Result<CallbackId, PortError> {
        let callback_id = self.minibuffer.next_callback();
        self.surface.evaluate_minibuffer(script, callback_id)?;
        Ok(callback_id)
    }
}

impl<S: WindowSurface> SyntheticTarget for Window<S> {
    fn capture_mut(&mut self) -> &mut KeyCapture {
        &mut self.capture
    }

    fn dispatch(&mut self, event: &NativeKeyEvent) -> Result<(), PortError> {
        self.surface.dispatch_key(event)
    }
}
