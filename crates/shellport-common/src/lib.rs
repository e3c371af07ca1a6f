pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, PortError, ShellportError};
pub use events::{Event, EventBus};
pub use id::{new_id, CallbackId, PortId};
pub use types::Rect;

pub type Result<T> = std::result::Result<T, ShellportError>;
