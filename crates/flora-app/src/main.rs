mod app_state;
mod cli;
mod logging;

use std::process::ExitCode;

use flora_config::{config_to_json, FloraConfig};
use winit::event_loop::EventLoop;

fn main() -> ExitCode {
    let args = cli::parse();

    // Load config before logging so its level can seed the filter
    let loaded = flora_config::load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(args.log_level.as_deref(), config_level);

    tracing::info!("Flora v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FloraConfig::default()
    });

    cli::apply_overrides(&args, &mut config);
    if let Err(e) = flora_config::validation::validate(&config) {
        tracing::error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!(
        camera = ?config.camera.strategy,
        model = if config.model.has_path() { config.model.path.as_str() } else { "<sphere>" },
        "Config loaded"
    );

    if args.print_config {
        println!("{}", config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::FloraApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    if app.failed() {
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
