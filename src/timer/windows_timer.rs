use std::mem;
use std::os::windows::io::AsRawHandle;
use std::process::{Child, ExitStatus};

use anyhow::Result;
use windows_sys::Win32::Foundation::{FILETIME, HANDLE};
use windows_sys::Win32::System::Threading::GetProcessTimes;

use super::CPUTimes;
use crate::util::units::filetime_ticks_to_second;

fn filetime_to_ticks(filetime: &FILETIME) -> u64 {
    (u64::from(filetime.dwHighDateTime) << 32) | u64::from(filetime.dwLowDateTime)
}

/// Queries the child's accumulated CPU times. The process handle stays
/// valid after the wait; it is only released when the `Child` is dropped.
/// Zero values if the system cannot report accounting for this handle.
fn cpu_times(child: &Child) -> CPUTimes {
    let handle = child.as_raw_handle() as HANDLE;

    let mut creation_time: FILETIME = unsafe { mem::zeroed() };
    let mut exit_time: FILETIME = unsafe { mem::zeroed() };
    let mut kernel_time: FILETIME = unsafe { mem::zeroed() };
    let mut user_time: FILETIME = unsafe { mem::zeroed() };

    let result = unsafe {
        GetProcessTimes(
            handle,
            &mut creation_time,
            &mut exit_time,
            &mut kernel_time,
            &mut user_time,
        )
    };

    if result == 0 {
        CPUTimes::default()
    } else {
        CPUTimes {
            user: filetime_ticks_to_second(filetime_to_ticks(&user_time)),
            system: filetime_ticks_to_second(filetime_to_ticks(&kernel_time)),
        }
    }
}

pub fn wait_and_collect(mut child: Child) -> Result<(CPUTimes, ExitStatus)> {
    let status = child.wait()?;
    Ok((cpu_times(&child), status))
}
