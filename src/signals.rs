//! Best-effort suppression of termination-class signals during the timed
//! wait.
//!
//! Console events can be delivered to every process attached to the
//! console, including this one. If the measuring process dies before the
//! child is reaped, the child's final CPU accounting is lost. Handlers are
//! not restored afterwards since the process exits right after reporting.

#[cfg(not(windows))]
mod imp {
    extern "C" fn absorb_signal(_signal: libc::c_int) {}

    const GUARDED_SIGNALS: [libc::c_int; 6] = [
        libc::SIGINT,
        libc::SIGILL,
        libc::SIGFPE,
        libc::SIGSEGV,
        libc::SIGTERM,
        libc::SIGABRT,
    ];

    pub fn install() {
        let handler = absorb_signal as extern "C" fn(libc::c_int);
        for signal in GUARDED_SIGNALS {
            // A failed installation leaves the default disposition in place.
            unsafe {
                libc::signal(signal, handler as libc::sighandler_t);
            }
        }
    }
}

#[cfg(windows)]
mod imp {
    use windows_sys::Win32::Foundation::{BOOL, TRUE};
    use windows_sys::Win32::System::Console::SetConsoleCtrlHandler;

    unsafe extern "system" fn absorb_ctrl_event(_event: u32) -> BOOL {
        TRUE
    }

    pub fn install() {
        unsafe {
            SetConsoleCtrlHandler(Some(absorb_ctrl_event), TRUE);
        }
    }
}

pub use imp::install;
