//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the port bridge, the native windows and the core link.

mod core;
mod event_handler;
mod init;
mod polling;
mod requests;
mod shutdown;
mod status;
mod surface;
mod types;

pub use core::ShellportApp;
