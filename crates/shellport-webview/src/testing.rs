//! Recording doubles for the native surface and the core.

use shellport_common::{CallbackId, PortError};
use shellport_config::schema::WindowConfig;
use shellport_platform::{InputEvent, NativeKeyEvent};

use crate::bridge::CoreSink;
use crate::window::{WindowFactory, WindowSurface};

#[derive(Debug, Default)]
pub struct MockSurface {
    pub title: String,
    pub visible: bool,
    pub minibuffer_height: u32,
    pub window_height: u32,
    pub dispatched: Vec<NativeKeyEvent>,
    pub scripts: Vec<(String, CallbackId)>,
    pub fail_dispatch: bool,
}

impl WindowSurface for MockSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_minibuffer_height(&mut self, height: u32) -> Result<(), PortError> {
        self.minibuffer_height = height;
        Ok(())
    }

    fn minibuffer_top(&self) -> f64 {
        f64::from(self.window_height.saturating_sub(self.minibuffer_height))
    }

    fn dispatch_key(&mut self, event: &NativeKeyEvent) -> Result<(), PortError> {
        if self.fail_dispatch {
            return Err(PortError::Surface("dispatch refused".into()));
        }
        self.dispatched.push(event.clone());
        Ok(())
    }

    fn evaluate_minibuffer(&mut self, script: &str, callback_id: CallbackId) -> Result<(), PortError> {
        self.scripts.push((script.to_string(), callback_id));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockFactory {
    pub created: usize,
    pub fail: bool,
}

impl WindowFactory for MockFactory {
    type Surface = MockSurface;

    fn create(&mut self, _window_id: &str, config: &WindowConfig) -> Result<MockSurface, PortError> {
        if self.fail {
            return Err(PortError::Surface("no display".into()));
        }
        self.created += 1;
        Ok(MockSurface {
            title: config.title.clone(),
            visible: true,
            minibuffer_height: config.minibuffer_height,
            window_height: config.initial_height(),
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub pushed: Vec<InputEvent>,
    pub callbacks: Vec<(String, serde_json::Value, CallbackId)>,
}

impl CoreSink for RecordingSink {
    fn push_input_event(&mut self, event: &InputEvent) {
        self.pushed.push(event.clone());
    }

    fn minibuffer_javascript_call_back(
        &mut self,
        window_id: &str,
        result: serde_json::Value,
        callback_id: CallbackId,
    ) {
        self.callbacks
            .push((window_id.to_string(), result, callback_id));
    }
}
