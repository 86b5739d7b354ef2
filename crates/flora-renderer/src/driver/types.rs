//! Events, outcomes and the render-target seam of the frame driver.

use crate::camera::{CameraPose, PerspectiveCamera, Viewport};
use crate::gpu::RendererError;
use crate::matrix::{self, Mat4};

/// Whether frames are being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    Running,
    #[default]
    Paused,
}

/// Window input translated into driver terms. Sizes and pointer
/// positions are physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Resized {
        width: u32,
        height: u32,
        scale_factor: f64,
    },
    PointerMoved {
        x: f64,
        y: f64,
    },
    PointerButton {
        pressed: bool,
    },
    Visibility(bool),
}

/// What the app should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Request a redraw; the driver has work to do.
    ScheduleTick,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    /// Simulated, but the surface had no frame to present.
    Dropped,
    /// The driver is paused; nothing was simulated or drawn.
    Skipped,
}

/// Result of a single [`FrameTarget::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Presented,
    /// No surface texture was available (lost, outdated or timed out).
    Dropped,
}

/// Simulation time for one tick, already multiplied by the time scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep {
    pub time: f32,
    pub delta_time: f32,
}

/// Everything the renderer needs from the camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub pose: CameraPose,
    pub view: Mat4,
    pub projection: Mat4,
    pub view_proj: Mat4,
    pub resolution: [f32; 2],
}

impl CameraFrame {
    pub fn new(pose: CameraPose, camera: &PerspectiveCamera, viewport: &Viewport) -> Self {
        let view = PerspectiveCamera::view_matrix(&pose);
        let projection = camera.projection_matrix();
        Self {
            pose,
            view,
            projection,
            view_proj: matrix::mul(&projection, &view),
            resolution: viewport.resolution(),
        }
    }
}

/// The GPU side of a frame, split so the driver can be tested without a device.
pub trait FrameTarget {
    fn resize(&mut self, viewport: &Viewport);

    /// Advance the particle state by one step.
    fn simulate(&mut self, step: TimeStep);

    /// Draw the latest particle state from the given camera.
    ///
    /// Surface hiccups the target recovers from are reported as
    /// [`DrawOutcome::Dropped`], not as errors.
    fn draw(&mut self, frame: &CameraFrame) -> Result<DrawOutcome, RendererError>;
}
