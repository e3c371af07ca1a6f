//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton as WinitButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, KeyLocation as WinitLocation};
use winit::window::WindowId;

use shellport_platform::{decode_key, KeyLocation, MouseButton, NativeKeyEvent};

use super::core::ShellportApp;

impl ApplicationHandler for ShellportApp {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        self.start_core_link();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        native_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window_id) = self.window_id_for(native_id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.close_window(&window_id);
                if self.should_exit {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Ok(window) = self.bridge.registry().get(&window_id) {
                        if let Err(e) = window.surface().relayout() {
                            tracing::warn!(window_id = %window_id, error = %e, "relayout failed");
                        }
                    }
                }
            }

            WindowEvent::Focused(focused) => {
                self.bridge.focus_changed(&window_id, focused);
                if focused {
                    if let Ok(window) = self.bridge.registry().get(&window_id) {
                        window.surface().focus_buffer();
                    }
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => {
                // winit replays held keys on focus gain; those are not input.
                if !is_synthetic {
                    self.handle_keyboard_input(&window_id, event);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self
                    .bridge
                    .registry()
                    .get(&window_id)
                    .map(|w| w.surface().scale_factor())
                    .unwrap_or(1.0);
                let logical = position.to_logical::<f64>(scale);
                self.cursor = (logical.x, logical.y);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                self.handle_mouse_press(&window_id, button);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

fn key_location(location: WinitLocation) -> KeyLocation {
    match location {
        WinitLocation::Standard => KeyLocation::Standard,
        WinitLocation::Left => KeyLocation::Left,
        WinitLocation::Right => KeyLocation::Right,
        WinitLocation::Numpad => KeyLocation::Numpad,
    }
}

fn mouse_button(button: WinitButton) -> Option<MouseButton> {
    match button {
        WinitButton::Left => Some(MouseButton::Left),
        WinitButton::Middle => Some(MouseButton::Middle),
        WinitButton::Right => Some(MouseButton::Right),
        WinitButton::Back => Some(MouseButton::Back),
        WinitButton::Forward => Some(MouseButton::Forward),
        WinitButton::Other(_) => None,
    }
}

impl ShellportApp {
    /// Keys that reach the native window itself rather than a web view.
    fn handle_keyboard_input(&mut self, window_id: &str, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            location,
            text,
            ..
        } = event;

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let tables = self.bridge.tables();
        let Some(decoded) = decode_key(tables.profile(), &key_name, key_location(location)) else {
            tracing::debug!(key = %key_name, "key without native code ignored");
            return;
        };

        let result = match state {
            ElementState::Pressed => {
                let modifiers = tables.mask_from_flags(
                    self.modifiers.shift_key(),
                    self.modifiers.control_key(),
                    self.modifiers.alt_key(),
                    self.modifiers.super_key(),
                );
                let text = text.map(|t| t.to_string()).unwrap_or(decoded.text);
                let event = NativeKeyEvent::user(decoded.code, modifiers, text);
                self.bridge.key_press(window_id, &event)
            }
            ElementState::Released => self.bridge.key_release(window_id, decoded.code),
        };
        if let Err(e) = result {
            tracing::warn!(window_id, error = %e, "key input dropped");
        }
    }

    fn handle_mouse_press(&mut self, window_id: &str, button: WinitButton) {
        let Some(button) = mouse_button(button) else {
            tracing::debug!(window_id, "unnamed mouse button ignored");
            return;
        };
        let modifiers = self.bridge.tables().mask_from_flags(
            self.modifiers.shift_key(),
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.super_key(),
        );
        let (x, y) = self.cursor;
        if let Err(e) = self.bridge.pointer_press(window_id, button, modifiers, x, y) {
            tracing::warn!(window_id, error = %e, "mouse input dropped");
        }
    }

    /// A close request hides the window; the core decides when it is gone.
    /// Once no window is visible the port exits.
    pub(super) fn close_window(&mut self, window_id: &str) {
        tracing::info!(window_id, "Window close requested");
        if let Err(e) = self.bridge.window_delete(window_id) {
            tracing::warn!(window_id, error = %e, "close failed");
        }
        let any_visible = self
            .bridge
            .registry()
            .ids()
            .iter()
            .any(|id| self.bridge.window_exists(id));
        if !any_visible {
            tracing::info!("Last window closed");
            self.should_exit = true;
        }
    }
}
