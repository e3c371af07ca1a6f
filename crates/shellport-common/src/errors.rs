use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the window/input port that are reported back to the core.
///
/// None of these are fatal to the process: the bridge logs them and answers
/// the offending request with an error reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("window not found: {0}")]
    WindowNotFound(String),

    #[error("window already exists: {0}")]
    DuplicateWindow(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("protocol error: {0}")]
    Protocol(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("event loop error: {0}")]
    EventLoop(String),

    #[error("{0}")]
    Other(String),
}
