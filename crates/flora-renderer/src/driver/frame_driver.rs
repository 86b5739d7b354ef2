use std::time::Instant;

use flora_config::FloraConfig;

use super::clock::SimulationClock;
use super::types::{
    CameraFrame, DrawOutcome, DriverState, EventOutcome, FrameTarget, InputEvent, TickOutcome, TimeStep,
};
use crate::camera::{create_camera, CameraStrategy, PerspectiveCamera, Viewport};
use crate::gpu::RendererError;

/// Owns the per-frame control flow: visibility, viewport, camera, and clock.
///
/// The app feeds it [`InputEvent`]s and calls [`FrameDriver::tick`] on every
/// redraw; the GPU work goes through a [`FrameTarget`].
pub struct FrameDriver {
    state: DriverState,
    pointer_tracking: bool,
    dragging: bool,
    last_pointer: Option<(f32, f32)>,
    viewport: Viewport,
    camera: Box<dyn CameraStrategy>,
    projection: PerspectiveCamera,
    clock: SimulationClock,
    time_scale: f32,
    max_pixel_ratio: f32,
    frames: u64,
}

impl FrameDriver {
    pub fn new(
        camera: Box<dyn CameraStrategy>,
        projection: PerspectiveCamera,
        viewport: Viewport,
        clock: SimulationClock,
        time_scale: f32,
        max_pixel_ratio: f32,
    ) -> Self {
        let mut projection = projection;
        projection.set_aspect(viewport.aspect());
        Self {
            state: DriverState::Paused,
            pointer_tracking: false,
            dragging: false,
            last_pointer: None,
            viewport,
            camera,
            projection,
            clock,
            time_scale,
            max_pixel_ratio,
            frames: 0,
        }
    }

    pub fn from_config(config: &FloraConfig, viewport: Viewport, now: Instant) -> Self {
        let sim = config.resolved_simulation();
        Self::new(
            create_camera(config),
            PerspectiveCamera::from_config(&config.camera, viewport.aspect()),
            viewport,
            SimulationClock::new(now, sim.max_delta),
            sim.time_scale,
            config.performance.max_pixel_ratio as f32,
        )
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn pointer_tracking(&self) -> bool {
        self.pointer_tracking
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn projection(&self) -> &PerspectiveCamera {
        &self.projection
    }

    /// Frames presented since startup.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
        target: &mut dyn FrameTarget,
    ) -> EventOutcome {
        match event {
            InputEvent::Resized {
                width,
                height,
                scale_factor,
            } => {
                self.viewport =
                    Viewport::from_physical(width, height, scale_factor, self.max_pixel_ratio);
                self.projection.set_aspect(self.viewport.aspect());
                self.camera.resized(&self.viewport);
                target.resize(&self.viewport);
                tracing::debug!(
                    width = self.viewport.width,
                    height = self.viewport.height,
                    pixel_ratio = self.viewport.pixel_ratio,
                    "viewport resized"
                );
                self.schedule_if_running()
            }
            InputEvent::PointerMoved { x, y } => {
                if !self.pointer_tracking {
                    return EventOutcome::Idle;
                }
                let (lx, ly) = self.viewport.to_logical(x, y);
                self.camera.pointer_moved(lx, ly, &self.viewport);
                if self.dragging {
                    if let Some((px, py)) = self.last_pointer {
                        self.camera.drag(lx - px, ly - py, &self.viewport);
                    }
                }
                self.last_pointer = Some((lx, ly));
                EventOutcome::Idle
            }
            InputEvent::PointerButton { pressed } => {
                if !self.pointer_tracking {
                    return EventOutcome::Idle;
                }
                self.dragging = pressed;
                self.camera.set_dragging(pressed);
                EventOutcome::Idle
            }
            InputEvent::Visibility(true) => {
                if self.is_running() {
                    return EventOutcome::Idle;
                }
                self.state = DriverState::Running;
                self.pointer_tracking = true;
                self.clock.resume(now);
                tracing::debug!("frame driver running");
                EventOutcome::ScheduleTick
            }
            InputEvent::Visibility(false) => {
                if self.is_running() {
                    self.state = DriverState::Paused;
                    self.pointer_tracking = false;
                    self.dragging = false;
                    self.last_pointer = None;
                    self.camera.set_dragging(false);
                    tracing::debug!("frame driver paused");
                }
                EventOutcome::Idle
            }
        }
    }

    /// Run one frame: camera, simulation step, then draw.
    pub fn tick(
        &mut self,
        now: Instant,
        target: &mut dyn FrameTarget,
    ) -> Result<TickOutcome, RendererError> {
        if !self.is_running() {
            return Ok(TickOutcome::Skipped);
        }

        let (elapsed, delta) = self.clock.advance(now);
        let pose = self.camera.update(&self.viewport);

        target.simulate(TimeStep {
            time: elapsed * self.time_scale,
            delta_time: delta * self.time_scale,
        });
        match target.draw(&CameraFrame::new(pose, &self.projection, &self.viewport))? {
            DrawOutcome::Presented => {
                self.frames += 1;
                Ok(TickOutcome::Rendered)
            }
            DrawOutcome::Dropped => Ok(TickOutcome::Dropped),
        }
    }

    fn schedule_if_running(&self) -> EventOutcome {
        if self.is_running() {
            EventOutcome::ScheduleTick
        } else {
            EventOutcome::Idle
        }
    }
}
