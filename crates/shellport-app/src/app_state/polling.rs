//! Draining the core link and web view queues on the event-loop thread.

use std::time::Instant;

use shellport_common::events::Event;
use winit::event_loop::ActiveEventLoop;

use crate::core_link::LinkEvent;

use super::core::ShellportApp;
use super::types::POLL_INTERVAL;

impl ShellportApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_core_link(event_loop);
            self.status.drain();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    /// IPC input and script results from every web view.
    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            self.bridge.handle_webview_event(event);
        }
    }

    fn poll_core_link(&mut self, event_loop: &ActiveEventLoop) {
        let Some(rx) = self.link_rx.as_ref() else {
            return;
        };
        let events: Vec<LinkEvent> = rx.try_iter().collect();

        for event in events {
            match event {
                LinkEvent::Connected => {
                    tracing::info!("Core session established");
                    self.event_bus.publish(Event::CoreConnected);
                }
                LinkEvent::Disconnected(reason) => {
                    tracing::info!(reason = %reason, "Core session ended");
                    self.event_bus.publish(Event::CoreDisconnected { reason });
                }
                LinkEvent::Request(request) => self.handle_request(event_loop, request),
            }
        }
    }
}
