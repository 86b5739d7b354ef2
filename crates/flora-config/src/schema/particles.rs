//! Point appearance configuration types.

use serde::{Deserialize, Serialize};

/// Default four-stop particle palette.
pub const DEFAULT_PALETTE: [&str; 4] = ["#ed5a34", "#f93a7e", "#f76583", "#fdc8dd"];

/// Point size, palette, and background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Base point size in world units at distance 1. `None` = preset value.
    pub size: Option<f64>,
    /// Exactly four colors; each particle blends across them.
    pub colors: Vec<String>,
    pub clear_color: String,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            size: None,
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            clear_color: "#000000".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
