use std::time::{Duration, Instant};

/// Monotonic frame-loop clock.
/// Reports time since the loop started; the animation is a function of that.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since the clock started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
