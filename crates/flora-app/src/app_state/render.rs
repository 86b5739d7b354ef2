//! Frame rendering logic.

use std::time::Instant;

use flora_renderer::TickOutcome;

use super::core::FloraApp;

impl FloraApp {
    /// Run one driver tick and keep the loop going while it is running.
    ///
    /// Returns `false` on an unrecoverable render error.
    pub(super) fn render_frame(&mut self) -> bool {
        let (Some(driver), Some(scene)) = (self.driver.as_mut(), self.scene.as_mut()) else {
            return true;
        };

        let now = Instant::now();
        match driver.tick(now, scene) {
            Ok(TickOutcome::Rendered) => {
                self.timer.record_frame(now);
                if let Some(stats) = self.timer.report(now) {
                    tracing::debug!(
                        frames = stats.frames,
                        "{:.1} fps ({:.2} ms/frame)",
                        stats.fps,
                        stats.frame_time_ms,
                    );
                }
                // Next tick only after this one finished
                self.request_redraw();
                true
            }
            Ok(TickOutcome::Dropped) => {
                // Nothing presented; try again on the next redraw
                self.timer.reset_gap();
                self.request_redraw();
                true
            }
            Ok(TickOutcome::Skipped) => true,
            Err(e) => {
                tracing::error!("Render error: {e}");
                false
            }
        }
    }
}
