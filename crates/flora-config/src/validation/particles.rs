//! Particle appearance validation (point size, palette colors).

use crate::colors::validate_color;
use crate::schema::FloraConfig;

use super::helpers::validate_optional_f64;

/// Validate point size and palette.
pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &FloraConfig) {
    let p = &config.particles;

    validate_optional_f64(errors, "particles.size", p.size, 0.0, 1.0);

    if p.colors.len() != 4 {
        errors.push(format!(
            "particles.colors must have exactly 4 entries, got {}",
            p.colors.len()
        ));
    }
    for (i, c) in p.colors.iter().enumerate() {
        if !validate_color(c) {
            errors.push(format!("particles.colors[{i}] = {c:?} is not a valid color"));
        }
    }
    if !validate_color(&p.clear_color) {
        errors.push(format!(
            "particles.clear_color = {:?} is not a valid color",
            p.clear_color
        ));
    }
}
