//! Full configuration validation.
//!
//! Validates numeric ranges, angle ordering, and color formats.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod camera;
mod helpers;
mod misc;
mod particles;
mod simulation;


use crate::schema::FloraConfig;
use flora_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FloraConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_window(&mut errors, config);
    misc::validate_model(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    simulation::validate_simulation(&mut errors, config);
    particles::validate_particles(&mut errors, config);
    misc::validate_performance(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
