use std::time::Duration;

/// Length of the counting window
pub const FPS_WINDOW: Duration = Duration::from_millis(500);

/// Counts frames over a fixed window and reports a whole-number rate each
/// time the window elapses.
///
/// Timestamps are offsets from any fixed origin, typically the start of the
/// frame loop.
#[derive(Debug, Clone)]
pub struct FrameRateSampler {
    frame_count: u32,
    window_start: Duration,
    window: Duration,
}

impl FrameRateSampler {
    /// Start the first window at `now`
    pub fn new(now: Duration) -> Self {
        Self {
            frame_count: 0,
            window_start: now,
            window: FPS_WINDOW,
        }
    }

    /// Count one frame ending at `now`.
    ///
    /// Returns the rate when this frame closes the window, after which
    /// counting restarts from `now`.
    pub fn record(&mut self, now: Duration) -> Option<u32> {
        self.frame_count += 1;

        let elapsed = now.saturating_sub(self.window_start);
        if elapsed < self.window {
            return None;
        }

        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        let fps = (self.frame_count as f64 * 1000.0 / elapsed_ms).round() as u32;

        self.frame_count = 0;
        self.window_start = now;
        Some(fps)
    }

    /// Frames counted in the open window
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn window_start(&self) -> Duration {
        self.window_start
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for FrameRateSampler {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
