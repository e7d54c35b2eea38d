pub mod wall_clock_timer;

#[cfg(not(windows))]
mod unix_timer;
#[cfg(windows)]
mod windows_timer;

use std::process::{Child, ExitStatus};

use anyhow::Result;

use crate::util::units::Second;
use wall_clock_timer::WallClockTimer;

#[cfg(not(windows))]
use unix_timer::wait_and_collect;
#[cfg(windows)]
use windows_timer::wait_and_collect;

/// CPU accounting for an exited child, retrieved once after the wait.
#[derive(Debug, Default, Clone, Copy)]
pub struct CPUTimes {
    /// Time spent in user mode
    pub user: Second,

    /// Time spent in kernel mode
    pub system: Second,
}

/// Timing measurements for a single completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimingResult {
    /// Wall clock time
    pub time_wall: Second,

    /// Time spent in user mode
    pub time_user: Second,

    /// Time spent in kernel mode
    pub time_system: Second,
}

impl TimingResult {
    /// Total CPU time. This is the value reported under the `real` label.
    ///
    /// It can legitimately exceed `time_wall` when the child runs multiple
    /// threads in parallel.
    pub fn time_cpu_total(&self) -> Second {
        self.time_user + self.time_system
    }
}

/// Blocks until `child` exits, then closes the wall-clock bracket and
/// returns the run's timing measurements.
///
/// CPU accounting is best-effort: if the operating system cannot report it
/// for this child, the CPU fields are zero rather than the run failing.
pub fn measure(child: Child, wall_clock_timer: &WallClockTimer) -> Result<(TimingResult, ExitStatus)> {
    let (cpu_times, status) = wait_and_collect(child)?;
    let time_wall = wall_clock_timer.stop();

    Ok((
        TimingResult {
            time_wall,
            time_user: cpu_times.user,
            time_system: cpu_times.system,
        },
        status,
    ))
}
