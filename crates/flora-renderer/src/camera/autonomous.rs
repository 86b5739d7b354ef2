//! Camera that drifts toward a pointer-steered point on a sphere.

use flora_config::schema::{CameraConfig, CameraStrategyKind};

use super::types::{spherical_to_cartesian, CameraPose, CameraStrategy, NarrowLayout, Viewport};
use crate::matrix::{self, Vec3};

/// Pointer-steered orbit with exponential smoothing.
///
/// The pointer picks a target on a sphere of fixed radius: horizontal
/// position maps to azimuth within `±theta_range`, vertical position to
/// polar angle within `[phi_min, phi_max]`. The live position moves a
/// fixed fraction of the remaining distance every frame.
pub struct AutonomousOrbit {
    radius: f32,
    theta_range: f32,
    phi_min: f32,
    phi_max: f32,
    smoothing: f32,
    rest_position: Vec3,
    narrow: NarrowLayout,
    theta: f32,
    phi: f32,
    position: Option<Vec3>,
}

impl AutonomousOrbit {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            radius: config.radius as f32,
            theta_range: (config.theta_range_deg as f32).to_radians(),
            phi_min: (config.phi_min_deg as f32).to_radians(),
            phi_max: (config.phi_max_deg as f32).to_radians(),
            smoothing: config.smoothing as f32,
            rest_position: config.rest_position,
            narrow: NarrowLayout::from_config(config),
            theta: 0.0,
            phi: (config.initial_phi_deg as f32).to_radians(),
            position: None,
        }
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.phi)
    }

    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    /// Point on the orbit sphere the camera is gliding toward.
    pub fn target_position(&self) -> Vec3 {
        spherical_to_cartesian(self.radius, self.theta, self.phi)
    }
}

impl CameraStrategy for AutonomousOrbit {
    fn kind(&self) -> CameraStrategyKind {
        CameraStrategyKind::Autonomous
    }

    fn pointer_moved(&mut self, x: f32, y: f32, viewport: &Viewport) {
        let nx = normalized(x, viewport.width);
        let ny = normalized(y, viewport.height);
        self.theta = (1.0 - 2.0 * nx) * self.theta_range;
        self.phi = (1.0 - ny) * (self.phi_max - self.phi_min) + self.phi_min;
    }

    fn resized(&mut self, viewport: &Viewport) {
        if !self.narrow.applies(viewport) && self.position.is_some() {
            self.position = Some(self.rest_position);
        }
    }

    fn update(&mut self, viewport: &Viewport) -> CameraPose {
        if self.narrow.applies(viewport) {
            return self.narrow.pose();
        }

        let target = self.target_position();
        let next = match self.position {
            None => target,
            Some(current) => matrix::lerp3(current, target, self.smoothing),
        };
        self.position = Some(next);
        CameraPose::looking_at_origin(next)
    }
}

fn normalized(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.5;
    }
    (value / extent).clamp(0.0, 1.0)
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

    fn camera() -> AutonomousOrbit {
        AutonomousOrbit::from_config(&CameraConfig::default())
    }

    #[test]
    fn first_update_snaps_to_target() {
        let mut cam = camera();
        assert!(cam.position().is_none());
        let pose = cam.update(&wide());
        let expected = cam.target_position();
        assert_eq!(pose.position, expected);
        assert_eq!(pose.target, [0.0; 3]);
        // theta = 0, phi = 45 degrees
        let s = std::f32::consts::FRAC_1_SQRT_2 * 8.0;
        assert!(expected[0].abs() < EPS);
        assert!((expected[1] - s).abs() < EPS);
        assert!((expected[2] - s).abs() < EPS);
    }

    #[test]
    fn later_updates_move_a_tenth_of_the_way() {
        let mut cam = camera();
        let vp = wide();
        let start = cam.update(&vp).position;

        cam.pointer_moved(0.0, 0.0, &vp);
        let target = cam.target_position();
        let pose = cam.update(&vp);
        for axis in 0..3 {
            let expected = start[axis] + (target[axis] - start[axis]) * 0.1;
            assert!((pose.position[axis] - expected).abs() < EPS);
        }
    }

    #[test]
    fn position_converges_to_target() {
        let mut cam = camera();
        let vp = wide();
        cam.update(&vp);
        cam.pointer_moved(1280.0, 800.0, &vp);
        let target = cam.target_position();
        let mut pose = cam.update(&vp);
        for _ in 0..200 {
            pose = cam.update(&vp);
        }
        assert!(matrix::length([
            pose.position[0] - target[0],
            pose.position[1] - target[1],
            pose.position[2] - target[2],
        ]) < 1e-3);
    }

    #[test]
    fn angles_stay_in_bounds_for_any_pointer() {
        let mut cam = camera();
        let vp = wide();
        let range = 30f32.to_radians();
        let phi_max = 60f32.to_radians();
        for &(x, y) in &[
            (-500.0, -500.0),
            (0.0, 0.0),
            (640.0, 400.0),
            (1280.0, 800.0),
            (5000.0, 9000.0),
        ] {
            cam.pointer_moved(x, y, &vp);
            let (theta, phi) = cam.angles();
            assert!(theta >= -range - EPS && theta <= range + EPS, "theta {theta}");
            assert!(phi >= -EPS && phi <= phi_max + EPS, "phi {phi}");
        }
    }

    #[test]
    fn pointer_corners_map_to_extremes() {
        let mut cam = camera();
        let vp = wide();
        cam.pointer_moved(0.0, 0.0, &vp);
        let (theta, phi) = cam.angles();
        assert!((theta - 30f32.to_radians()).abs() < EPS);
        assert!((phi - 60f32.to_radians()).abs() < EPS);

        cam.pointer_moved(1280.0, 800.0, &vp);
        let (theta, phi) = cam.angles();
        assert!((theta + 30f32.to_radians()).abs() < EPS);
        assert!(phi.abs() < EPS);
    }

    #[test]
    fn narrow_viewport_uses_fixed_pose() {
        let mut cam = camera();
        let narrow = Viewport::from_physical(600, 900, 1.0, 2.0);
        cam.pointer_moved(0.0, 0.0, &narrow);
        let pose = cam.update(&narrow);
        assert_eq!(pose.position, [4.5, 7.0, 9.0]);
        assert_eq!(pose.target, [0.0; 3]);
    }

    #[test]
    fn narrow_check_uses_logical_width() {
        let mut cam = camera();
        // 1400 physical at 2x is 700 logical
        let retina = Viewport::from_physical(1400, 1800, 2.0, 2.0);
        assert_eq!(cam.update(&retina).position, [4.5, 7.0, 9.0]);
    }

    #[test]
    fn wide_resize_snaps_to_rest_position() {
        let mut cam = camera();
        let vp = wide();
        cam.update(&vp);
        cam.resized(&vp);
        assert_eq!(cam.position(), Some([3.0, 4.0, 5.0]));
    }

    #[test]
    fn resize_before_first_frame_keeps_snap() {
        let mut cam = camera();
        cam.resized(&wide());
        assert!(cam.position().is_none());
    }
}
