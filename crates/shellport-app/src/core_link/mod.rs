//! Connection to the core: wire protocol, WebSocket client and the outbox
//! the event loop writes to.

mod client;
mod outbox;
mod protocol;

pub use client::{run_core_link, LinkConfig, LinkEvent};
pub use outbox::CoreOutbox;
pub use protocol::{execute, CoreCall, CoreRequest, PortMessage};
