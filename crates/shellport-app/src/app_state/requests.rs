//! Executing core requests against the bridge.

use shellport_common::events::Event;
use winit::event_loop::ActiveEventLoop;

use crate::core_link::{execute, CoreCall, CoreRequest};

use super::core::ShellportApp;
use super::surface::NativeFactory;

impl ShellportApp {
    pub(super) fn handle_request(&mut self, event_loop: &ActiveEventLoop, request: CoreRequest) {
        let CoreRequest { id, call } = request;
        let tables = self.bridge.tables().clone();
        let mut factory = NativeFactory {
            event_loop,
            webviews: &self.webviews,
            tables: &tables,
            native_ids: &mut self.native_ids,
        };

        let result = execute(&mut self.bridge, &mut factory, &call);
        match &result {
            Ok(value) => {
                tracing::debug!(id, method = call.method(), result = %value, "Core request done");
                match &call {
                    CoreCall::Make { identifier } => {
                        self.event_bus.publish(Event::WindowCreated(identifier.clone()));
                    }
                    CoreCall::WindowDelete { window_id } => {
                        self.event_bus.publish(Event::WindowHidden(window_id.clone()));
                    }
                    _ => {}
                }
            }
            Err(e) => {
                tracing::warn!(id, method = call.method(), error = %e, "Core request failed");
            }
        }
        self.bridge.sink().answer(id, result);
    }
}
