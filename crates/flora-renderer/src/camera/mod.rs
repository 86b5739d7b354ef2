//! Camera strategies: autonomous pointer-steered drift or user orbit.
//!
//! The active strategy is selected by config. Both share the same
//! perspective projection and narrow-viewport fallback pose.

mod autonomous;
mod orbit;
mod types;

pub use autonomous::*;
pub use orbit::*;
pub use types::*;

use flora_config::schema::{CameraStrategyKind, FloraConfig};

/// Create the configured camera strategy.
pub fn create_camera(config: &FloraConfig) -> Box<dyn CameraStrategy> {
    match config.camera.strategy {
        CameraStrategyKind::Autonomous => Box::new(AutonomousOrbit::from_config(&config.camera)),
        CameraStrategyKind::Orbit => Box::new(UserOrbit::from_config(&config.camera)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_camera_follows_config() {
        let mut config = FloraConfig::default();
        assert_eq!(
            create_camera(&config).kind(),
            CameraStrategyKind::Autonomous
        );

        config.camera.strategy = CameraStrategyKind::Orbit;
        assert_eq!(create_camera(&config).kind(), CameraStrategyKind::Orbit);
    }

    #[test]
    fn viewport_pixel_ratio_is_capped() {
        let vp = Viewport::from_physical(3000, 1500, 3.0, 2.0);
        assert_eq!(vp.pixel_ratio, 2.0);
        assert_eq!(vp.width, 1000.0);
        assert_eq!(vp.resolution(), [2000.0, 1000.0]);

        let vp = Viewport::from_physical(1280, 800, 1.5, 2.0);
        assert_eq!(vp.pixel_ratio, 1.5);
    }

    #[test]
    fn viewport_aspect_handles_zero_height() {
        let vp = Viewport::from_physical(1280, 0, 1.0, 2.0);
        assert_eq!(vp.aspect(), 1.0);
        let vp = Viewport::from_physical(1600, 800, 2.0, 2.0);
        assert_eq!(vp.aspect(), 2.0);
    }

    #[test]
    fn viewport_narrow_threshold_is_exclusive() {
        assert!(Viewport::from_physical(799, 600, 1.0, 2.0).is_narrow(800));
        assert!(!Viewport::from_physical(800, 600, 1.0, 2.0).is_narrow(800));
    }

    #[test]
    fn viewport_converts_pointer_to_logical() {
        let vp = Viewport::from_physical(2560, 1600, 2.0, 2.0);
        assert_eq!(vp.to_logical(200.0, 100.0), (100.0, 50.0));
    }

    #[test]
    fn view_projection_puts_origin_in_front() {
        let config = FloraConfig::default();
        let projection = PerspectiveCamera::from_config(&config.camera, 1.6);
        let pose = CameraPose::looking_at_origin([3.0, 4.0, 5.0]);
        let clip = crate::matrix::transform_point(&projection.view_projection(&pose), [0.0; 3]);
        let ndc = [clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3]];
        assert!(ndc[0].abs() < 1e-4 && ndc[1].abs() < 1e-4);
        assert!(ndc[2] > 0.0 && ndc[2] < 1.0);
    }
}
