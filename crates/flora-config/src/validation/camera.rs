//! Camera configuration validation (projection, orbit angles, damping).

use crate::schema::FloraConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate all camera-related constraints.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &FloraConfig) {
    let cam = &config.camera;

    validate_range_f64(errors, "camera.fov_deg", cam.fov_deg, 10.0, 120.0);
    validate_range_f64(errors, "camera.near", cam.near, 0.001, 10.0);
    validate_range_f64(errors, "camera.far", cam.far, 1.0, 10_000.0);
    if cam.far <= cam.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            cam.far, cam.near
        ));
    }
    validate_range_f64(errors, "camera.radius", cam.radius, 0.1, 1000.0);
    validate_range_f64(
        errors,
        "camera.theta_range_deg",
        cam.theta_range_deg,
        0.0,
        90.0,
    );
    validate_range_f64(errors, "camera.phi_min_deg", cam.phi_min_deg, 0.0, 180.0);
    validate_range_f64(errors, "camera.phi_max_deg", cam.phi_max_deg, 0.0, 180.0);
    if cam.phi_min_deg > cam.phi_max_deg {
        errors.push(format!(
            "camera.phi_min_deg = {} exceeds camera.phi_max_deg = {}",
            cam.phi_min_deg, cam.phi_max_deg
        ));
    }
    validate_range_f64(
        errors,
        "camera.initial_phi_deg",
        cam.initial_phi_deg,
        0.0,
        180.0,
    );
    validate_range_f64(errors, "camera.smoothing", cam.smoothing, 0.0, 1.0);
    validate_range(errors, "camera.narrow_width", cam.narrow_width, 0, 10_000);

    // Orbit
    validate_range_f64(
        errors,
        "camera.orbit.damping",
        cam.orbit.damping,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "camera.orbit.rotate_speed",
        cam.orbit.rotate_speed,
        0.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "camera.orbit.min_polar_deg",
        cam.orbit.min_polar_deg,
        0.0,
        180.0,
    );
    validate_range_f64(
        errors,
        "camera.orbit.max_polar_deg",
        cam.orbit.max_polar_deg,
        0.0,
        180.0,
    );
    if cam.orbit.min_polar_deg >= cam.orbit.max_polar_deg {
        errors.push(format!(
            "camera.orbit.min_polar_deg = {} must be less than camera.orbit.max_polar_deg = {}",
            cam.orbit.min_polar_deg, cam.orbit.max_polar_deg
        ));
    }
}
