//! Rolling frame-rate statistics for periodic debug logging.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Average over this many recent frames.
const WINDOW: usize = 120;

/// Snapshot emitted once per report interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub fps: f64,
    pub frame_time_ms: f64,
    pub frames: u64,
}

/// Tracks frame-to-frame durations and says when a report is due.
pub struct FrameTimer {
    samples: VecDeque<Duration>,
    last_frame: Option<Instant>,
    last_report: Instant,
    report_every: Duration,
    total_frames: u64,
}

impl FrameTimer {
    pub fn new(now: Instant, report_every: Duration) -> Self {
        Self {
            samples: VecDeque::with_capacity(WINDOW),
            last_frame: None,
            last_report: now,
            report_every,
            total_frames: 0,
        }
    }

    /// Record a presented frame at `now`.
    pub fn record_frame(&mut self, now: Instant) {
        if let Some(prev) = self.last_frame {
            self.samples.push_back(now.saturating_duration_since(prev));
            if self.samples.len() > WINDOW {
                self.samples.pop_front();
            }
        }
        self.last_frame = Some(now);
        self.total_frames += 1;
    }

    /// Forget the last frame time so a pause does not count as one long frame.
    pub fn reset_gap(&mut self) {
        self.last_frame = None;
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.samples.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().map(|d| d.as_secs_f64()).sum();
        total / self.samples.len() as f64 * 1000.0
    }

    /// Stats if a full interval has passed since the previous report.
    pub fn report(&mut self, now: Instant) -> Option<FrameStats> {
        if now.saturating_duration_since(self.last_report) < self.report_every {
            return None;
        }
        self.last_report = now;
        Some(FrameStats {
            fps: self.fps(),
            frame_time_ms: self.frame_time_ms(),
            frames: self.total_frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new(Instant::now(), Duration::from_secs(5));
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }

    #[test]
    fn fps_from_steady_frames() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0, Duration::from_secs(5));
        for i in 0..=10 {
            timer.record_frame(t0 + ms(i * 20));
        }
        assert!((timer.fps() - 50.0).abs() < 1e-6);
        assert!((timer.frame_time_ms() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn window_is_bounded() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0, Duration::from_secs(5));
        for i in 0..500 {
            timer.record_frame(t0 + ms(i));
        }
        assert_eq!(timer.samples.len(), WINDOW);
    }

    #[test]
    fn report_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0, Duration::from_secs(5));
        timer.record_frame(t0);
        timer.record_frame(t0 + ms(16));
        assert!(timer.report(t0 + ms(4_000)).is_none());

        let stats = timer.report(t0 + ms(5_000)).unwrap();
        assert_eq!(stats.frames, 2);
        assert!(timer.report(t0 + ms(6_000)).is_none());
        assert!(timer.report(t0 + ms(10_000)).is_some());
    }

    #[test]
    fn reset_gap_skips_paused_time() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0, Duration::from_secs(5));
        timer.record_frame(t0);
        timer.record_frame(t0 + ms(10));
        timer.reset_gap();
        timer.record_frame(t0 + ms(60_000));
        timer.record_frame(t0 + ms(60_010));
        assert!((timer.frame_time_ms() - 10.0).abs() < 1e-6);
    }
}
