//! Configuration schema types for Flora.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the autonomous preset.

mod camera;
mod logging;
mod model;
mod particles;
mod performance;
mod simulation;
mod window;

pub use camera::*;
pub use logging::*;
pub use model::*;
pub use particles::*;
pub use performance::*;
pub use simulation::*;
pub use window::*;

use serde::{Deserialize, Serialize};

use crate::presets::Preset;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Flora.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FloraConfig {
    pub window: WindowConfig,
    pub model: ModelConfig,
    pub camera: CameraConfig,
    pub simulation: SimulationConfig,
    pub particles: ParticlesConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

/// Simulation parameters with preset fallbacks filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSimulation {
    pub flow_field_influence: f32,
    pub flow_field_strength: f32,
    pub flow_field_frequency: f32,
    pub life_decay: f32,
    pub time_scale: f32,
    pub max_delta: f32,
}

impl FloraConfig {
    /// The presentation preset for the configured camera strategy.
    pub fn preset(&self) -> Preset {
        Preset::for_strategy(self.camera.strategy)
    }

    /// Simulation values, taking unset flow-field fields from the preset.
    pub fn resolved_simulation(&self) -> ResolvedSimulation {
        let preset = self.preset();
        let sim = &self.simulation;
        ResolvedSimulation {
            flow_field_influence: sim
                .flow_field_influence
                .unwrap_or(preset.flow_field_influence) as f32,
            flow_field_strength: sim
                .flow_field_strength
                .unwrap_or(preset.flow_field_strength) as f32,
            flow_field_frequency: sim
                .flow_field_frequency
                .unwrap_or(preset.flow_field_frequency) as f32,
            life_decay: sim.life_decay as f32,
            time_scale: sim.time_scale as f32,
            max_delta: sim.max_delta as f32,
        }
    }

    /// Point size, taking the preset value when unset.
    pub fn resolved_point_size(&self) -> f32 {
        self.particles.size.unwrap_or(self.preset().point_size) as f32
    }
}

// =============================================================================
// Tests
// =============================================================================
