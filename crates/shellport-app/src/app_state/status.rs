//! Port lifecycle summary, fed by the event bus.

use shellport_common::events::{Event, EventBus};
use tokio::sync::broadcast::{self, error::TryRecvError};

pub(super) struct PortStatus {
    events: broadcast::Receiver<Event>,
    pub(super) core_connected: bool,
    pub(super) sessions: u64,
    pub(super) windows_created: usize,
    pub(super) windows_hidden: usize,
}

impl PortStatus {
    pub(super) fn new(bus: &EventBus) -> Self {
        Self {
            events: bus.subscribe(),
            core_connected: false,
            sessions: 0,
            windows_created: 0,
            windows_hidden: 0,
        }
    }

    /// Apply everything published since the last drain.
    pub(super) fn drain(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.apply(event),
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Port status fell behind the event bus");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::CoreConnected => {
                self.core_connected = true;
                self.sessions += 1;
            }
            Event::CoreDisconnected { reason } => {
                // Reconnect attempts repeat this; only the drop is worth a warning.
                if self.core_connected {
                    tracing::warn!(reason = %reason, "Lost the core, reconnecting");
                }
                self.core_connected = false;
            }
            Event::WindowCreated(_) => self.windows_created += 1,
            Event::WindowHidden(_) => self.windows_hidden += 1,
            Event::Shutdown => self.core_connected = false,
            Event::Unknown => {}
        }
    }
}
