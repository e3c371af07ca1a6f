//! Full configuration validation.
//!
//! Validates numeric ranges and the core endpoint. [`sanitize`] repairs a
//! config in place; [`validate`] reports the same problems as one
//! `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ShellportConfig;
use shellport_common::ConfigError;

use helpers::repair_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellportConfig) -> Result<(), ConfigError> {
    let problems = sanitize(&mut config.clone());
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(problems.join("; ")))
    }
}

/// Reset every invalid field to its default and describe what was wrong.
///
/// Valid fields, including the rest of a section with a bad value, are
/// left as loaded.
pub fn sanitize(config: &mut ShellportConfig) -> Vec<String> {
    let defaults = ShellportConfig::default();
    let mut problems: Vec<String> = Vec::new();

    sanitize_core(&mut problems, config, &defaults);
    sanitize_window(&mut problems, config, &defaults);
    problems
}

fn sanitize_core(problems: &mut Vec<String>, config: &mut ShellportConfig, defaults: &ShellportConfig) {
    let url = config.core.url.trim();
    if !(url.starts_with("ws://") || url.starts_with("wss://")) {
        problems.push(format!(
            "core.url = {:?} must start with ws:// or wss://",
            config.core.url
        ));
        config.core.url = defaults.core.url.clone();
    }
    repair_range(
        problems,
        "core.reconnect_max_secs",
        &mut config.core.reconnect_max_secs,
        defaults.core.reconnect_max_secs,
        1,
        300,
    );
}

fn sanitize_window(problems: &mut Vec<String>, config: &mut ShellportConfig, defaults: &ShellportConfig) {
    let window = &mut config.window;
    let fallback = &defaults.window;
    repair_range(problems, "window.width", &mut window.width, fallback.width, 100, 16384);
    repair_range(
        problems,
        "window.buffer_height",
        &mut window.buffer_height,
        fallback.buffer_height,
        1,
        16384,
    );
    repair_range(
        problems,
        "window.minibuffer_height",
        &mut window.minibuffer_height,
        fallback.minibuffer_height,
        1,
        1000,
    );
}
