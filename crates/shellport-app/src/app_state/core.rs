//! ShellportApp struct definition and constructor.

use std::collections::HashMap;
use std::sync::mpsc as std_mpsc;
use std::time::Instant;

use shellport_common::events::EventBus;
use shellport_common::PortId;
use shellport_config::schema::ShellportConfig;
use shellport_platform::{KeyTables, PlatformProfile};
use shellport_webview::{PortBridge, WebViewManager};
use winit::window::WindowId;

use crate::core_link::{CoreOutbox, LinkEvent, PortMessage};

use super::status::PortStatus;
use super::surface::NativeWindow;

pub(super) type Bridge = PortBridge<NativeWindow, CoreOutbox>;

/// Top-level application state.
pub struct ShellportApp {
    pub(super) config: ShellportConfig,
    pub(super) port_id: PortId,
    pub(super) event_bus: EventBus,
    pub(super) status: PortStatus,

    // Windows, input filtering and the outbound queue to the core
    pub(super) bridge: Bridge,
    pub(super) webviews: WebViewManager,
    pub(super) native_ids: HashMap<WindowId, String>,

    // Modifier and pointer tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,
    pub(super) cursor: (f64, f64),

    // Core link
    pub(super) link_rx: Option<std_mpsc::Receiver<LinkEvent>>,
    pub(super) outbound_rx: Option<tokio::sync::mpsc::UnboundedReceiver<PortMessage>>,
    pub(super) link_shutdown_tx: Option<tokio::sync::mpsc::Sender<()>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ShellportApp {
    pub fn new(config: ShellportConfig) -> Self {
        let profile = PlatformProfile::from_setting(config.platform.profile);
        let tables = KeyTables::for_profile(profile);
        tracing::info!(profile = profile.name(), "Key tables built");

        let (outbound_tx, outbound_rx) = tokio::sync::mpsc::unbounded_channel();
        let bridge = PortBridge::new(tables, config.window.clone(), CoreOutbox::new(outbound_tx));
        let event_bus = EventBus::new(64);
        let status = PortStatus::new(&event_bus);

        Self {
            config,
            port_id: PortId::new(),
            event_bus,
            status,
            bridge,
            webviews: WebViewManager::new(),
            native_ids: HashMap::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            cursor: (0.0, 0.0),
            link_rx: None,
            outbound_rx: Some(outbound_rx),
            link_shutdown_tx: None,
            tokio_runtime: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// The core identifier of a native window.
    pub(super) fn window_id_for(&self, native: WindowId) -> Option<String> {
        self.native_ids.get(&native).cloned()
    }
}
