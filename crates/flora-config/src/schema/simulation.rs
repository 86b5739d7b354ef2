//! Flow-field simulation configuration types.

use serde::{Deserialize, Serialize};

/// Feedback-texture simulation parameters.
///
/// The three flow-field values are optional: when unset they come from
/// the camera strategy's [`Preset`](crate::presets::Preset).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// 0.0 = few particles move, 1.0 = all particles move.
    pub flow_field_influence: Option<f64>,
    pub flow_field_strength: Option<f64>,
    pub flow_field_frequency: Option<f64>,
    /// Lifetime gained per simulated second; a particle returns to its
    /// base position when its lifetime reaches 1.0.
    pub life_decay: f64,
    /// Multiplier applied to wall-clock time before it reaches the shader.
    pub time_scale: f64,
    /// Upper bound on a single frame's delta, in seconds.
    pub max_delta: f64,
    /// Seed for the per-particle random channels. `None` = random each run.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            flow_field_influence: None,
            flow_field_strength: None,
            flow_field_frequency: None,
            life_decay: 0.3,
            time_scale: 0.5,
            max_delta: 0.1,
            seed: None,
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
    fn simulation_defaults_leave_flow_field_to_preset() {
        let s = SimulationConfig::default();
        assert!(s.flow_field_influence.is_none());
        assert!(s.flow_field_strength.is_none());
        assert!(s.flow_field_frequency.is_none());
        assert!((s.time_scale - 0.5).abs() < f64::EPSILON);
        assert!((s.life_decay - 0.3).abs() < f64::EPSILON);
        assert!(s.seed.is_none());
    }

    #[test]
    fn simulation_override_from_toml() {
        let s: SimulationConfig = toml::from_str(
            r#"
flow_field_strength = 2.5
seed = 42
"#,
        )
        .unwrap();
        assert_eq!(s.flow_field_strength, Some(2.5));
        assert_eq!(s.seed, Some(42));
        assert!(s.flow_field_influence.is_none());
    }
}
