//! Per-camera-strategy presentation presets.
//!
//! The autonomous and orbit layouts were tuned separately, so each carries
//! its own flow-field and point-size constants. Explicit config values
//! override these.

use crate::schema::CameraStrategyKind;

/// Presentation constants bundled with a camera strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub flow_field_influence: f64,
    pub flow_field_strength: f64,
    pub flow_field_frequency: f64,
    pub point_size: f64,
}

impl Preset {
    pub const AUTONOMOUS: Self = Self {
        flow_field_influence: 0.3,
        flow_field_strength: 1.8,
        flow_field_frequency: 1.0,
        point_size: 0.04,
    };

    pub const ORBIT: Self = Self {
        flow_field_influence: 0.5,
        flow_field_strength: 1.2,
        flow_field_frequency: 0.5,
        point_size: 0.07,
    };

    pub fn for_strategy(kind: CameraStrategyKind) -> Self {
        match kind {
            CameraStrategyKind::Autonomous => Self::AUTONOMOUS,
            CameraStrategyKind::Orbit => Self::ORBIT,
        }
    }
}
