/// Type alias for fractional seconds
pub type Second = f64;

const MICROSECONDS_PER_SECOND: f64 = 1_000_000.0;

/// Length of one Windows `FILETIME` tick: 100 nanoseconds.
#[cfg(any(windows, test))]
const TICKS_PER_SECOND: f64 = 10_000_000.0;

/// Converts a timeval-style (seconds, microseconds) pair into fractional seconds.
pub fn timeval_to_second(sec: i64, usec: i64) -> Second {
    sec as f64 + usec as f64 / MICROSECONDS_PER_SECOND
}

/// Converts a count of 100-nanosecond ticks into fractional seconds.
#[cfg(any(windows, test))]
pub fn filetime_ticks_to_second(ticks: u64) -> Second {
    ticks as f64 / TICKS_PER_SECOND
}
