//! Child process supervision.
//!
//! Once the app is running the launcher has exactly one job: relay the app's
//! exit code, unless the user interrupts. On Ctrl-C the app is asked to stop
//! (SIGTERM on unix), given a grace period to comply, and force-killed if it
//! doesn't. Every exit path reaps the child; the launcher never leaves an
//! orphaned process behind.

use crate::error::Result;
use crate::ui::Output;
use anyhow::anyhow;
use std::process::{Child, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Exit code reported after an interrupt, whether the stop was graceful or forced.
pub const EXIT_INTERRUPTED: i32 = 130;

/// How often the wait loop checks the child and the interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Install the Ctrl-C handler, returning the flag it raises.
///
/// Must be called at most once per process.
pub fn install_interrupt_handler() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| anyhow!("failed to install interrupt handler: {e}"))?;
    Ok(flag)
}

/// Owns a child process and guarantees it is reaped.
///
/// If the guard is dropped before the child was waited on (an error path or
/// a panic), the child is killed and reaped on the spot.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Wait for the child to exit, honoring the interrupt flag.
///
/// Returns the child's exit code on normal completion, or
/// [`EXIT_INTERRUPTED`] when the flag was raised while the child was still
/// running.
pub fn wait_with_interrupt(
    child: Child,
    interrupted: &AtomicBool,
    grace_period: Duration,
    output: &Output,
) -> Result<i32> {
    let mut guard = ChildGuard::new(child);

    loop {
        if interrupted.load(Ordering::SeqCst) {
            output.status("\nStopping app...");
            shutdown(&mut guard, grace_period)?;
            return Ok(EXIT_INTERRUPTED);
        }

        if let Some(status) = guard.child.try_wait()? {
            guard.reaped = true;
            let code = exit_code(status);
            tracing::debug!("app exited with code {code}");
            return Ok(code);
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Ask the child to stop, then force-kill it once the grace period elapses.
fn shutdown(guard: &mut ChildGuard, grace_period: Duration) -> Result<()> {
    terminate(&mut guard.child);

    let deadline = Instant::now() + grace_period;
    while Instant::now() < deadline {
        if guard.child.try_wait()?.is_some() {
            guard.reaped = true;
            tracing::debug!("app stopped within the grace period");
            return Ok(());
        }
        thread::sleep(POLL_INTERVAL);
    }

    tracing::debug!("grace period elapsed, killing app");
    // kill() fails if the child already exited; wait() below reaps either way.
    let _ = guard.child.kill();
    guard.child.wait()?;
    guard.reaped = true;
    Ok(())
}

/// Request graceful termination.
#[cfg(unix)]
fn terminate(child: &mut Child) {
    let pid = child.id() as libc::pid_t;
    // SAFETY: pid belongs to a child we spawned and still own.
    let _ = unsafe { libc::kill(pid, libc::SIGTERM) };
}

/// Windows has no graceful termination signal; kill outright.
#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.kill();
}

/// Map an [`ExitStatus`] to the code the launcher should relay.
///
/// On unix a signal death maps to the conventional 128 plus the signal
/// number.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
