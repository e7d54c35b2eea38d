use std::io;
use std::mem;
use std::os::unix::process::ExitStatusExt;
use std::process::{Child, ExitStatus};

use anyhow::Result;

use super::CPUTimes;
use crate::util::units::timeval_to_second;

/// Reaps the child with wait4(2), which hands back the direct child's own
/// resource usage in the same call. RUSAGE_CHILDREN is avoided on purpose:
/// it would aggregate every descendant this process has ever reaped.
fn wait4(child: &mut Child) -> io::Result<(ExitStatus, libc::rusage)> {
    let pid = child.id() as libc::pid_t;

    // Drop our handle on the child's stdin, as a regular wait would.
    drop(child.stdin.take());

    let mut status = 0;
    let mut rusage: libc::rusage = unsafe { mem::zeroed() };

    let result = unsafe { libc::wait4(pid, &mut status, 0, &mut rusage) };
    if result < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok((ExitStatus::from_raw(status), rusage))
    }
}

pub fn wait_and_collect(mut child: Child) -> Result<(CPUTimes, ExitStatus)> {
    match wait4(&mut child) {
        Ok((status, rusage)) => Ok((
            CPUTimes {
                user: timeval_to_second(
                    rusage.ru_utime.tv_sec as i64,
                    rusage.ru_utime.tv_usec as i64,
                ),
                system: timeval_to_second(
                    rusage.ru_stime.tv_sec as i64,
                    rusage.ru_stime.tv_usec as i64,
                ),
            },
            status,
        )),
        // The run is reported without CPU accounting rather than not at all.
        Err(_) => {
            let status = child.wait()?;
            Ok((CPUTimes::default(), status))
        }
    }
}
