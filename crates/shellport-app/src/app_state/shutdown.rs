//! Graceful shutdown: hide windows, stop the core link.

use std::time::Duration;

use shellport_common::events::Event;

use super::core::ShellportApp;

impl ShellportApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Hide windows and drop held modifiers
    /// 2. Signal the core link to close its socket
    /// 3. Shut down the tokio runtime
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        for window in self.bridge.registry_mut().windows_mut() {
            window.delete();
        }

        if let Some(tx) = self.link_shutdown_tx.take() {
            let _ = tx.try_send(());
        }
        self.link_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.event_bus.publish(Event::Shutdown);
        self.status.drain();
        self.should_exit = true;
        tracing::info!(
            sessions = self.status.sessions,
            windows = self.status.windows_created,
            forwarded = self.bridge.filter().forwarded(),
            suppressed = self.bridge.filter().suppressed(),
            "Graceful shutdown complete"
        );
    }
}
