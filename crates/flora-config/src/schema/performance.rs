//! Performance configuration types.

use serde::{Deserialize, Serialize};

/// Rendering cost controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Cap on the device pixel ratio used for point sizing (1.0-4.0).
    pub max_pixel_ratio: f64,
    /// Present with `Fifo` (true) or `AutoNoVsync` (false).
    pub vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            vsync: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_defaults() {
        let p = PerformanceConfig::default();
        assert!((p.max_pixel_ratio - 2.0).abs() < f64::EPSILON);
        assert!(p.vsync);
    }
}
