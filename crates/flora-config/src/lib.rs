//! Flora configuration system.
//!
//! Provides TOML-based configuration with per-camera presets and full
//! validation. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flora_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod presets;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use presets::Preset;
pub use schema::{FloraConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use flora_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template written on first run. An
/// explicit path must exist. The result is validated before returning.
pub fn load_config(path: Option<&Path>) -> Result<FloraConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FloraConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = FloraConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"model\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"simulation\""));
        assert!(json.contains("\"particles\""));
        assert!(json.contains("\"performance\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = FloraConfig::default();
        let json = config_to_json(&config);
        let parsed: FloraConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.camera.narrow_width, 800);
        assert_eq!(parsed.particles.colors[1], "#f93a7e");
    }

    #[test]
    fn load_config_explicit_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[camera]\nsmoothing = 3.0\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_explicit_missing_path_is_not_found() {
        let err = load_config(Some(Path::new("/tmp/flora_missing_dir/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
