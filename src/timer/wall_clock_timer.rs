use std::time::Instant;

use crate::util::units::Second;

/// Brackets the child's lifetime with a monotonic wall-clock measurement.
pub struct WallClockTimer {
    start: Instant,
}

impl WallClockTimer {
    pub fn start() -> WallClockTimer {
        WallClockTimer {
            start: Instant::now(),
        }
    }

    pub fn stop(&self) -> Second {
        self.start.elapsed().as_secs_f64()
    }
}
