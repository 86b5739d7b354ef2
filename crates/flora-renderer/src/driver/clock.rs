use std::time::Instant;

/// Wall-clock source for the simulation.
///
/// `elapsed` counts from construction and keeps running while paused.
/// `delta` is measured from the previous tick (or the last resume) and
/// clamped to `max_delta` seconds, so a stalled frame cannot fling
/// particles across the scene.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    start: Instant,
    previous: Option<Instant>,
    max_delta: f32,
}

impl SimulationClock {
    pub fn new(start: Instant, max_delta: f32) -> Self {
        Self {
            start,
            previous: None,
            max_delta,
        }
    }

    /// Return `(elapsed, delta)` in seconds and make `now` the new baseline.
    pub fn advance(&mut self, now: Instant) -> (f32, f32) {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let delta = self
            .previous
            .map(|prev| now.saturating_duration_since(prev).as_secs_f32())
            .unwrap_or(0.0)
            .min(self.max_delta);
        self.previous = Some(now);
        (elapsed, delta)
    }

    /// Reset the delta baseline so time spent hidden is not simulated.
    pub fn resume(&mut self, now: Instant) {
        self.previous = Some(now);
    }
}
