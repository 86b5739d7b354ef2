//! Core TOML config loading: read from path or platform default.

use crate::schema::FloraConfig;
use crate::validation;
use flora_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{default_config_path, write_template_if_missing};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<FloraConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: FloraConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(
            "config validation warning: {e} -- using parsed config with potentially invalid values"
        );
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/flora/config.toml`
/// On Linux: `~/.config/flora/config.toml`
///
/// On first run the commented template is written there and defaults are
/// returned.
pub fn load_default() -> Result<FloraConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template_if_missing(&path)?;
            Ok(FloraConfig::default())
        }
        other => other,
    }
}
