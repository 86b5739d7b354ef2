//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the flora crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "flora=trace",
            LogLevel::Debug => "flora=debug",
            LogLevel::Info => "flora=info",
            LogLevel::Warn => "flora=warn",
            LogLevel::Error => "flora=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
        assert_eq!(LogLevel::Info.directive(), "flora=info");
    }

    #[test]
    fn level_from_toml() {
        let l: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(l.level, LogLevel::Debug);
        assert_eq!(l.level.directive(), "flora=debug");
    }
}
