//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# shellport configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[platform]
# Modifier assignment used on the wire: "auto", "linux", "macos", "windows"
profile = "auto"

[core]
# url = "ws://127.0.0.1:4949"
# reconnect_max_secs = 30   # 1-300

[window]
# title = "shellport"
# width = 1024
# buffer_height = 480
# minibuffer_height = 20    # 1-1000

[logging]
# level = "INFO"            # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
