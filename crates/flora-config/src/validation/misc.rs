//! Validation for smaller config sections: window, model, performance.

use crate::schema::FloraConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate window constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &FloraConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 16_384);
    validate_range(errors, "window.height", config.window.height, 200, 16_384);
}

/// Validate fallback mesh resolution.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &FloraConfig) {
    validate_range(
        errors,
        "model.fallback_latitudes",
        config.model.fallback_latitudes,
        2,
        1024,
    );
    validate_range(
        errors,
        "model.fallback_longitudes",
        config.model.fallback_longitudes,
        3,
        1024,
    );
}

/// Validate performance constraints.
pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &FloraConfig) {
    validate_range_f64(
        errors,
        "performance.max_pixel_ratio",
        config.performance.max_pixel_ratio,
        1.0,
        4.0,
    );
}
