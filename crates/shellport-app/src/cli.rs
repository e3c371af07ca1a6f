use std::path::PathBuf;

use clap::Parser;
use shellport_config::schema::ProfileSetting;

/// shellport: native windows and input for a browser core.
#[derive(Parser, Debug)]
#[command(name = "shellport", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `shellport=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// WebSocket URL of the core, overrides `[core] url`.
    #[arg(long)]
    pub core_url: Option<String>,

    /// Modifier profile: auto, linux, macos or windows.
    #[arg(long, value_parser = parse_profile)]
    pub profile: Option<ProfileSetting>,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_profile(raw: &str) -> Result<ProfileSetting, String> {
    match raw.to_ascii_lowercase().as_str() {
        "auto" => Ok(ProfileSetting::Auto),
        "linux" => Ok(ProfileSetting::Linux),
        "macos" | "mac" => Ok(ProfileSetting::Macos),
        "windows" => Ok(ProfileSetting::Windows),
        _ => Err(format!(
            "unknown profile `{raw}` (expected auto, linux, macos or windows)"
        )),
    }
}
