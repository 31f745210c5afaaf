//! SIGINT handling for both terminal renderers.
//!
//! In raw mode Ctrl+C arrives as a key event, but a SIGINT sent from outside
//! (`kill -INT`) still arrives as a signal. Either way the default action would
//! kill the process with the terminal still taken over, so the renderers
//! install a handler that only raises a flag.

#![allow(unsafe_code)]

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Serializes unit tests that touch the process-wide flag.
#[cfg(test)]
pub(crate) fn lock_for_test() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Consume a pending interrupt, if any.
pub fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

/// Mark an interrupt as pending (what the signal handler does).
pub fn raise_interrupt() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Installed SIGINT handler; the previous disposition is restored on drop.
#[derive(Debug)]
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: libc::sighandler_t,
}

#[cfg(unix)]
extern "C" fn on_sigint(_signum: libc::c_int) {
    // Only async-signal-safe work here.
    INTERRUPTED.store(true, Ordering::SeqCst);
}

impl InterruptGuard {
    /// Install the handler. An interrupt left over from an earlier session
    /// is discarded.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        INTERRUPTED.store(false, Ordering::SeqCst);
        let handler = on_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;
        // SAFETY: the handler only touches an atomic.
        let previous = unsafe { libc::signal(libc::SIGINT, handler) };
        if previous == libc::SIG_ERR {
            return Err(io::Error::last_os_error());
        }
        Ok(Self { previous })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        INTERRUPTED.store(false, Ordering::SeqCst);
        Ok(Self {})
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            // SAFETY: restoring the disposition returned by the earlier `signal` call.
            unsafe {
                libc::signal(libc::SIGINT, self.previous);
            }
        }
    }
}
