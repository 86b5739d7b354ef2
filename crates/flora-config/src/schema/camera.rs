//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Camera control scheme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CameraStrategyKind {
    /// Camera orbits on its own, steered by the pointer position.
    #[default]
    Autonomous,
    /// Camera follows click-and-drag with damping.
    Orbit,
}

impl std::str::FromStr for CameraStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "autonomous" | "auto" => Ok(Self::Autonomous),
            "orbit" | "user" => Ok(Self::Orbit),
            other => Err(format!("unknown camera strategy: {other}")),
        }
    }
}

/// Damped user-orbit settings (only used by `strategy = "orbit"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Fraction of pending rotation applied per frame (0.0-1.0).
    pub damping: f64,
    pub rotate_speed: f64,
    pub min_polar_deg: f64,
    pub max_polar_deg: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: 0.05,
            rotate_speed: 1.0,
            min_polar_deg: 20.0,
            max_polar_deg: 80.0,
        }
    }
}

/// Camera projection, orbit geometry, and layout fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub strategy: CameraStrategyKind,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    /// Orbit radius of the autonomous camera.
    pub radius: f64,
    /// Horizontal pointer sweep maps to `[-theta_range, +theta_range]`.
    pub theta_range_deg: f64,
    pub phi_min_deg: f64,
    pub phi_max_deg: f64,
    /// Polar angle before the first pointer event.
    pub initial_phi_deg: f64,
    /// Per-frame lerp factor toward the orbit target (0.0-1.0).
    pub smoothing: f64,
    /// Viewports narrower than this (logical px) use `narrow_position`.
    pub narrow_width: u32,
    pub narrow_position: [f32; 3],
    /// Pose assumed after a resize and the orbit camera's starting point.
    pub rest_position: [f32; 3],
    pub orbit: OrbitConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            strategy: CameraStrategyKind::Autonomous,
            fov_deg: 35.0,
            near: 0.1,
            far: 100.0,
            radius: 8.0,
            theta_range_deg: 30.0,
            phi_min_deg: 0.0,
            phi_max_deg: 60.0,
            initial_phi_deg: 45.0,
            smoothing: 0.1,
            narrow_width: 800,
            narrow_position: [4.5, 7.0, 9.0],
            rest_position: [3.0, 4.0, 5.0],
            orbit: OrbitConfig::default(),
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
    fn camera_defaults() {
        let c = CameraConfig::default();
        assert_eq!(c.strategy, CameraStrategyKind::Autonomous);
        assert!((c.fov_deg - 35.0).abs() < f64::EPSILON);
        assert!((c.radius - 8.0).abs() < f64::EPSILON);
        assert!((c.smoothing - 0.1).abs() < f64::EPSILON);
        assert_eq!(c.narrow_width, 800);
        assert_eq!(c.narrow_position, [4.5, 7.0, 9.0]);
        assert_eq!(c.rest_position, [3.0, 4.0, 5.0]);
    }

    #[test]
    fn strategy_parses_from_toml() {
        let c: CameraConfig = toml::from_str(r#"strategy = "orbit""#).unwrap();
        assert_eq!(c.strategy, CameraStrategyKind::Orbit);
    }

    #[test]
    fn strategy_from_str_accepts_aliases() {
        assert_eq!(
            "Auto".parse::<CameraStrategyKind>().unwrap(),
            CameraStrategyKind::Autonomous
        );
        assert_eq!(
            "user".parse::<CameraStrategyKind>().unwrap(),
            CameraStrategyKind::Orbit
        );
        assert!("spin".parse::<CameraStrategyKind>().is_err());
    }

    #[test]
    fn orbit_section_from_toml() {
        let c: CameraConfig = toml::from_str(
            r#"
[orbit]
damping = 0.2
"#,
        )
        .unwrap();
        assert!((c.orbit.damping - 0.2).abs() < f64::EPSILON);
        assert!((c.orbit.max_polar_deg - 80.0).abs() < f64::EPSILON);
    }
}
