//! Camera trait, pose, projection and viewport types.

use flora_config::schema::{CameraConfig, CameraStrategyKind};

use crate::matrix::{self, Mat4, Vec3};

/// Logical viewport plus the device pixel ratio used for rendering.
///
/// Always rebuilt in one step by [`Viewport::from_physical`], so size,
/// pixel ratio and aspect can never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical width in points.
    pub width: f32,
    /// Logical height in points.
    pub height: f32,
    pub scale_factor: f64,
    /// `min(scale_factor, max_pixel_ratio)`.
    pub pixel_ratio: f32,
    pub physical_width: u32,
    pub physical_height: u32,
}

impl Viewport {
    pub fn from_physical(
        physical_width: u32,
        physical_height: u32,
        scale_factor: f64,
        max_pixel_ratio: f32,
    ) -> Self {
        let scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width: (physical_width as f64 / scale_factor) as f32,
            height: (physical_height as f64 / scale_factor) as f32,
            scale_factor,
            pixel_ratio: (scale_factor as f32).min(max_pixel_ratio),
            physical_width,
            physical_height,
        }
    }

    /// Width over height; 1 for a collapsed (zero-height) window.
    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Drawing-buffer resolution fed to the point shader.
    pub fn resolution(&self) -> [f32; 2] {
        [
            self.width * self.pixel_ratio,
            self.height * self.pixel_ratio,
        ]
    }

    pub fn is_narrow(&self, threshold: u32) -> bool {
        self.width < threshold as f32
    }

    /// Convert a physical pointer position to logical coordinates.
    pub fn to_logical(&self, x: f64, y: f64) -> (f32, f32) {
        ((x / self.scale_factor) as f32, (y / self.scale_factor) as f32)
    }
}

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    /// A pose looking at the origin.
    pub fn looking_at_origin(position: Vec3) -> Self {
        Self {
            position,
            target: [0.0; 3],
        }
    }
}

/// Fixed pose used when the viewport is narrower than `width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrowLayout {
    pub width: u32,
    pub position: Vec3,
}

impl NarrowLayout {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            width: config.narrow_width,
            position: config.narrow_position,
        }
    }

    pub fn applies(&self, viewport: &Viewport) -> bool {
        viewport.is_narrow(self.width)
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::looking_at_origin(self.position)
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl PerspectiveCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            fov_y_deg: config.fov_deg as f32,
            near: config.near as f32,
            far: config.far as f32,
            aspect,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(pose: &CameraPose) -> Mat4 {
        matrix::look_at(pose.position, pose.target, [0.0, 1.0, 0.0])
    }

    pub fn projection_matrix(&self) -> Mat4 {
        matrix::perspective(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, pose: &CameraPose) -> Mat4 {
        matrix::mul(&self.projection_matrix(), &Self::view_matrix(pose))
    }
}

/// A way of moving the camera around the particle cloud.
///
/// The frame driver only talks to this trait; input arrives in logical
/// pixels and `update` is called exactly once per rendered frame.
pub trait CameraStrategy: Send {
    fn kind(&self) -> CameraStrategyKind;

    /// Pointer position in logical pixels.
    fn pointer_moved(&mut self, x: f32, y: f32, viewport: &Viewport);

    /// Pointer motion (logical pixels) while a button is held.
    fn drag(&mut self, _dx: f32, _dy: f32, _viewport: &Viewport) {}

    fn set_dragging(&mut self, _dragging: bool) {}

    fn resized(&mut self, _viewport: &Viewport) {}

    /// Advance one frame and return the pose to render with.
    fn update(&mut self, viewport: &Viewport) -> CameraPose;
}

/// Spherical to Cartesian with +Y up: `r * (sin φ sin θ, cos φ, sin φ cos θ)`.
pub fn spherical_to_cartesian(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    [
        radius * sin_phi * sin_theta,
        radius * cos_phi,
        radius * sin_phi * cos_theta,
    ]
}
