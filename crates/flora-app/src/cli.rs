use std::path::PathBuf;

use clap::Parser;
use flora_config::schema::CameraStrategyKind;
use flora_config::FloraConfig;

/// Flora: a GPU particle field that blooms out of a 3D model.
#[derive(Parser, Debug)]
#[command(name = "flora", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// glTF/GLB model whose vertices seed the particles.
    #[arg(short = 'm', long)]
    pub model: Option<PathBuf>,

    /// Camera strategy (autonomous, orbit).
    #[arg(long)]
    pub camera: Option<CameraStrategyKind>,

    /// Log level override (trace, debug, info, warn, error, or a filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Apply command-line overrides on top of the loaded config.
pub fn apply_overrides(args: &Args, config: &mut FloraConfig) {
    if let Some(ref model) = args.model {
        config.model.path = model.display().to_string();
    }
    if let Some(camera) = args.camera {
        config.camera.strategy = camera;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_changes_nothing() {
        let args = Args::try_parse_from(["flora"]).unwrap();
        let mut config = FloraConfig::default();
        apply_overrides(&args, &mut config);
        assert!(!config.model.has_path());
        assert_eq!(config.camera.strategy, CameraStrategyKind::Autonomous);
        assert!(!args.print_config);
    }

    #[test]
    fn model_and_camera_override_config() {
        let args = Args::try_parse_from([
            "flora",
            "--model",
            "models/flower.glb",
            "--camera",
            "orbit",
        ])
        .unwrap();
        let mut config = FloraConfig::default();
        apply_overrides(&args, &mut config);
        assert_eq!(config.model.path, "models/flower.glb");
        assert_eq!(config.camera.strategy, CameraStrategyKind::Orbit);
    }

    #[test]
    fn unknown_camera_is_rejected() {
        assert!(Args::try_parse_from(["flora", "--camera", "dolly"]).is_err());
    }

    #[test]
    fn config_and_log_level_are_captured() {
        let args = Args::try_parse_from([
            "flora",
            "--config",
            "/tmp/flora.toml",
            "--log-level",
            "debug",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/flora.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print_config);
    }
}
