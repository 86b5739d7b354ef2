//! User-driven orbit with inertial damping.

use std::f32::consts::PI;

use flora_config::schema::{CameraConfig, CameraStrategyKind};

use super::types::{spherical_to_cartesian, CameraPose, CameraStrategy, NarrowLayout, Viewport};
use crate::matrix;

/// Keeps phi off the exact poles where the up vector degenerates.
const POLE_EPSILON: f32 = 1e-6;

/// Drag-to-rotate orbit around the origin.
///
/// Drags accumulate into pending angle deltas. Each update applies a
/// `damping` fraction of the pending delta and decays the rest, so the
/// camera coasts to a stop after the pointer is released. Radius is fixed.
pub struct UserOrbit {
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    damping: f32,
    rotate_speed: f32,
    min_polar: f32,
    max_polar: f32,
    dragging: bool,
    narrow: NarrowLayout,
}

impl UserOrbit {
    pub fn from_config(config: &CameraConfig) -> Self {
        let start = config.rest_position;
        let radius = matrix::length(start).max(f32::EPSILON);
        let theta = start[0].atan2(start[2]);
        let phi = (start[1] / radius).clamp(-1.0, 1.0).acos();

        let orbit = &config.orbit;
        let min_polar = (orbit.min_polar_deg as f32).to_radians().max(POLE_EPSILON);
        // Equal bounds at a pole would cross after the nudge
        let max_polar = (orbit.max_polar_deg as f32)
            .to_radians()
            .min(PI - POLE_EPSILON)
            .max(min_polar);

        Self {
            radius,
            theta,
            phi: phi.clamp(min_polar, max_polar),
            delta_theta: 0.0,
            delta_phi: 0.0,
            damping: orbit.damping as f32,
            rotate_speed: orbit.rotate_speed as f32,
            min_polar,
            max_polar,
            dragging: false,
            narrow: NarrowLayout::from_config(config),
        }
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.phi)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl CameraStrategy for UserOrbit {
    fn kind(&self) -> CameraStrategyKind {
        CameraStrategyKind::Orbit
    }

    fn pointer_moved(&mut self, _x: f32, _y: f32, _viewport: &Viewport) {}

    fn drag(&mut self, dx: f32, dy: f32, viewport: &Viewport) {
        if !self.dragging || viewport.height <= 0.0 {
            return;
        }
        let per_pixel = 2.0 * PI / viewport.height * self.rotate_speed;
        self.delta_theta -= dx * per_pixel;
        self.delta_phi -= dy * per_pixel;
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn update(&mut self, viewport: &Viewport) -> CameraPose {
        self.theta += self.delta_theta * self.damping;
        self.phi = (self.phi + self.delta_phi * self.damping).clamp(self.min_polar, self.max_polar);
        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;

        if self.narrow.applies(viewport) {
            return self.narrow.pose();
        }
        CameraPose::looking_at_origin(spherical_to_cartesian(self.radius, self.theta, self.phi))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn wide() -> Viewport {
        Viewport::from_physical(1280, 800, 1.0, 2.0)
    }

    fn orbit() -> UserOrbit {
        UserOrbit::from_config(&CameraConfig::default())
    }

    #[test]
    fn starts_at_rest_position() {
        let mut cam = orbit();
        let pose = cam.update(&wide());
        assert!((pose.position[0] - 3.0).abs() < EPS);
        assert!((pose.position[1] - 4.0).abs() < EPS);
        assert!((pose.position[2] - 5.0).abs() < EPS);
        assert!((cam.radius() - 50f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn drag_without_button_is_ignored() {
        let mut cam = orbit();
        let before = cam.angles();
        cam.drag(100.0, 50.0, &wide());
        cam.update(&wide());
        assert_eq!(cam.angles(), before);
    }

    #[test]
    fn drag_rotates_by_full_delta_over_time() {
        let mut cam = orbit();
        let vp = wide();
        let (theta0, _) = cam.angles();

        cam.set_dragging(true);
        cam.drag(40.0, 0.0, &vp);
        cam.set_dragging(false);

        let first = {
            cam.update(&vp);
            cam.angles().0
        };
        let expected_total = -2.0 * PI * 40.0 / 800.0;
        // one frame applies only the damping fraction
        assert!((first - theta0 - expected_total * 0.05).abs() < EPS);

        for _ in 0..1000 {
            cam.update(&vp);
        }
        assert!((cam.angles().0 - theta0 - expected_total).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut cam = orbit();
        let vp = wide();
        cam.set_dragging(true);
        cam.drag(0.0, -10_000.0, &vp);
        for _ in 0..500 {
            cam.update(&vp);
        }
        let (_, phi) = cam.angles();
        assert!(phi <= 80f32.to_radians() + EPS);

        cam.drag(0.0, 20_000.0, &vp);
        for _ in 0..500 {
            cam.update(&vp);
        }
        let (_, phi) = cam.angles();
        assert!(phi >= 20f32.to_radians() - EPS);
    }

    #[test]
    fn radius_never_changes() {
        let mut cam = orbit();
        let vp = wide();
        cam.set_dragging(true);
        cam.drag(300.0, 120.0, &vp);
        for _ in 0..50 {
            let pose = cam.update(&vp);
            assert!((matrix::length(pose.position) - cam.radius()).abs() < 1e-3);
        }
    }

    #[test]
    fn narrow_viewport_uses_fixed_pose() {
        let mut cam = orbit();
        let narrow = Viewport::from_physical(500, 900, 1.0, 2.0);
        cam.set_dragging(true);
        cam.drag(100.0, 0.0, &narrow);
        assert_eq!(cam.update(&narrow).position, [4.5, 7.0, 9.0]);
        assert_eq!(cam.kind(), CameraStrategyKind::Orbit);
    }

    fn pinned_at(polar_deg: f64) -> UserOrbit {
        let mut config = CameraConfig::default();
        config.orbit.min_polar_deg = polar_deg;
        config.orbit.max_polar_deg = polar_deg;
        UserOrbit::from_config(&config)
    }

    #[test]
    fn polar_bounds_pinned_to_north_pole() {
        let mut cam = pinned_at(0.0);
        let (_, phi) = cam.angles();
        assert!((phi - POLE_EPSILON).abs() < EPS);
        let pose = cam.update(&wide());
        assert!(pose.position.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn polar_bounds_pinned_to_south_pole() {
        let mut cam = pinned_at(180.0);
        let (_, phi) = cam.angles();
        assert!((phi - PI).abs() < EPS);
        let pose = cam.update(&wide());
        assert!(pose.position.iter().all(|c| c.is_finite()));
    }
}
