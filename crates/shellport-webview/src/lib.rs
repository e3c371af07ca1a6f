//! Web views and windows for the shellport browser port.
//!
//! - `wry` web views with an IPC init script that reports key and mouse
//!   input back to Rust ([`manager`], [`ipc`])
//! - core-managed windows, each a buffer over a minibuffer ([`window`],
//!   [`registry`], [`minibuffer`])
//! - the [`bridge`] tying native input, windows and the core together

pub mod bridge;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod minibuffer;
pub mod registry;
pub mod window;

#[cfg(test)]
mod testing;

pub use bridge::{CoreSink, PortBridge};
pub use events::{PageLoadState, Pane, ViewId, WebViewEvent};
pub use ipc::{ContentInput, IpcMessage, IpcPayload, KeyPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use minibuffer::Minibuffer;
pub use registry::WindowRegistry;
pub use window::{Window, WindowFactory, WindowSurface};
