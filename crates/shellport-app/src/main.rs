mod app_state;
mod cli;
mod core_link;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use shellport_common::ShellportError;
use shellport_config::schema::ShellportConfig;

/// `--log-level`, else the config's level, else `shellport=info`.
fn log_directive(args: &cli::Args, config: Option<&ShellportConfig>) -> String {
    args.log_level
        .clone()
        .or_else(|| config.map(|c| c.logging.directive()))
        .unwrap_or_else(|| "shellport=info".to_string())
}

fn apply_overrides(config: &mut ShellportConfig, args: &cli::Args) {
    if let Some(url) = &args.core_url {
        config.core.url = url.clone();
    }
    if let Some(profile) = args.profile {
        config.platform.profile = profile;
    }
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is loaded before logging so its level can apply; the error is
    // reported once the subscriber is up.
    let loaded = shellport_config::load_config(args.config.as_deref());

    let directive = log_directive(&args, loaded.as_ref().ok().map(|l| &l.config));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("shellport v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = match loaded {
        Ok(loaded) => {
            for problem in &loaded.repaired {
                tracing::warn!("Invalid config value reset to default: {problem}");
            }
            loaded.config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            ShellportConfig::default()
        }
    };
    apply_overrides(&mut config, &args);
    tracing::debug!(config = %shellport_config::config_to_json(&config), "Effective config");

    if let Err(e) = run(config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn run(config: ShellportConfig) -> shellport_common::Result<()> {
    let event_loop =
        EventLoop::new().map_err(|e| ShellportError::EventLoop(format!("create: {e}")))?;
    let mut app = app_state::ShellportApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| ShellportError::EventLoop(e.to_string()))
}
