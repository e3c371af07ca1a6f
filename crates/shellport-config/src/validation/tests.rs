//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ShellportConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_websocket_url() {
    let mut config = ShellportConfig::default();
    config.core.url = "http://localhost:4949".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("core.url"));
}

#[test]
fn accepts_secure_websocket_url() {
    let mut config = ShellportConfig::default();
    config.core.url = "wss://core.example:443/port".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_minibuffer_height() {
    let mut config = ShellportConfig::default();
    config.window.minibuffer_height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.minibuffer_height"));
}

#[test]
fn catches_reconnect_bound_out_of_range() {
    let mut config = ShellportConfig::default();
    config.core.reconnect_max_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("core.reconnect_max_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ShellportConfig::default();
    config.window.width = 5;
    config.window.buffer_height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("window.buffer_height"));
    assert!(err.contains("; "));
}

#[test]
fn sanitize_resets_only_bad_fields() {
    let mut config = ShellportConfig::default();
    config.core.url = "tcp://nope".into();
    config.core.reconnect_max_secs = 45;
    config.window.minibuffer_height = 0;
    config.window.width = 640;

    let problems = sanitize(&mut config);
    assert_eq!(problems.len(), 2);
    assert_eq!(config.core.url, ShellportConfig::default().core.url);
    assert_eq!(config.window.minibuffer_height, 20);
    assert_eq!(config.core.reconnect_max_secs, 45);
    assert_eq!(config.window.width, 640);
    assert!(validate(&config).is_ok());
}

#[test]
fn sanitize_leaves_valid_config_alone() {
    let mut config = ShellportConfig::default();
    config.window.buffer_height = 700;
    assert!(sanitize(&mut config).is_empty());
    assert_eq!(config.window.buffer_height, 700);
}
