pub mod camera;
pub mod driver;
pub mod gpgpu;
pub mod gpu;
pub mod matrix;
pub mod perf;
pub mod points;
pub mod render_state;

pub use camera::{create_camera, CameraPose, CameraStrategy, PerspectiveCamera, Viewport};
pub use driver::{
    CameraFrame, DrawOutcome, DriverState, EventOutcome, FrameDriver, FrameTarget, InputEvent,
    SimulationClock, TickOutcome, TimeStep,
};
pub use gpgpu::{FeedbackSimulator, GpgpuLayout};
pub use gpu::{GpuContext, RendererError};
pub use perf::{FrameStats, FrameTimer};
pub use points::PointRenderer;
pub use render_state::ParticleScene;
