//! Starting the core link on a background tokio runtime.

use shellport_common::events::Event;

use crate::core_link::{run_core_link, LinkConfig, PortMessage};

use super::core::ShellportApp;

impl ShellportApp {
    /// Start the core link in a background tokio runtime.
    ///
    /// Without a runtime the port still runs; it just never hears from the
    /// core.
    pub(super) fn start_core_link(&mut self) {
        if self.tokio_runtime.is_some() {
            return;
        }
        let Some(outbound_rx) = self.outbound_rx.take() else {
            tracing::warn!("Core link already consumed its outbound queue");
            return;
        };

        let profile = self.bridge.tables().profile().name();
        let link_config = LinkConfig::new(
            &self.config.core,
            PortMessage::hello(self.port_id.clone(), profile),
        );

        let (event_tx, event_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = tokio::sync::mpsc::channel(1);

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();

        match rt {
            Ok(rt) => {
                rt.spawn(run_core_link(link_config, outbound_rx, event_tx, shutdown_rx));
                self.link_rx = Some(event_rx);
                self.link_shutdown_tx = Some(shutdown_tx);
                self.tokio_runtime = Some(rt);
                tracing::info!(port_id = %self.port_id, url = %self.config.core.url, "Core link started");
            }
            Err(e) => {
                tracing::warn!("Failed to start tokio runtime for core link: {e}");
                self.event_bus.publish(Event::CoreDisconnected {
                    reason: format!("no runtime: {e}"),
                });
            }
        }
    }
}
