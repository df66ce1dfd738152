use std::fmt;
use std::time::{Duration, Instant};

/// Wall time since the start of the run.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{: <25} {:.3} s", "card written after:", self.elapsed().as_secs_f64())
    }
}
