//! Simulation configuration validation (flow field, time scaling).

use crate::schema::FloraConfig;

use super::helpers::{validate_optional_f64, validate_range_f64};

/// Validate flow-field and clock constraints.
pub(crate) fn validate_simulation(errors: &mut Vec<String>, config: &FloraConfig) {
    let sim = &config.simulation;

    validate_optional_f64(
        errors,
        "simulation.flow_field_influence",
        sim.flow_field_influence,
        0.0,
        1.0,
    );
    validate_optional_f64(
        errors,
        "simulation.flow_field_strength",
        sim.flow_field_strength,
        0.0,
        10.0,
    );
    validate_optional_f64(
        errors,
        "simulation.flow_field_frequency",
        sim.flow_field_frequency,
        0.0,
        10.0,
    );
    validate_range_f64(errors, "simulation.life_decay", sim.life_decay, 0.0, 10.0);
    validate_range_f64(errors, "simulation.time_scale", sim.time_scale, 0.0, 10.0);
    validate_range_f64(errors, "simulation.max_delta", sim.max_delta, 0.001, 1.0);
}
