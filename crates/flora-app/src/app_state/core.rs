//! FloraApp struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use flora_config::FloraConfig;
use flora_renderer::{FrameDriver, FrameTimer, ParticleScene};

/// How often the frame rate is logged at debug level.
pub(super) const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Top-level application state: one window, one particle scene.
pub struct FloraApp {
    pub(super) config: FloraConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) scene: Option<ParticleScene>,
    pub(super) driver: Option<FrameDriver>,

    pub(super) timer: FrameTimer,
    pub(super) occluded: bool,

    // Set when initialization or rendering failed fatally
    pub(super) failed: bool,
}

impl FloraApp {
    pub fn new(config: FloraConfig) -> Self {
        Self {
            config,
            window: None,
            scene: None,
            driver: None,
            timer: FrameTimer::new(Instant::now(), FPS_LOG_INTERVAL),
            occluded: false,
            failed: false,
        }
    }

    /// Whether the app stopped because of an unrecoverable error.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Request a redraw from the window (if it exists).
    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
