//! Forcing OS input focus onto a target window
//!
//! A single SetForegroundWindow-style call is not reliable when the calling
//! process is not itself focused; the OS restricts focus stealing. The Win32
//! backend works around this with thread-input attachment, and every attempt
//! ends with a bounded verification poll so failure carries a real diagnostic.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{WindowCandidate, WindowError, WindowHandle, WindowResult};

/// OS window-system operations, seam for the Win32 backend and for tests
pub trait Desktop: Send {
    /// Enumerate visible top-level windows with non-empty titles
    fn list_windows(&self) -> WindowResult<Vec<(WindowHandle, String)>>;

    /// Restore the window if minimized and raise it in the z-order
    fn restore_and_raise(&self, handle: WindowHandle) -> WindowResult<()>;

    /// Direct foreground-set call, with any privilege bypass the OS needs
    fn set_foreground(&self, handle: WindowHandle) -> WindowResult<()>;

    /// OS "switch to this window" request, fallback for a refused set
    fn switch_to(&self, handle: WindowHandle) -> WindowResult<()>;

    /// The currently foregrounded window, if any
    fn foreground_window(&self) -> Option<(WindowHandle, String)>;
}

/// Verification polling knobs
#[derive(Debug, Clone, Copy)]
pub struct FocusTiming {
    pub verify_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for FocusTiming {
    fn default() -> Self {
        Self {
            verify_timeout: Duration::from_millis(1500),
            poll_interval: Duration::from_millis(50),
        }
    }
}

/// Force foreground focus onto `target` and verify it actually landed.
///
/// The direct set call may be refused; the switch-to fallback is then issued.
/// Either way success is only claimed once the OS reports the target as the
/// actual foreground window. On timeout the error names both the expected and
/// the actually-foregrounded window.
pub fn force_foreground(
    desk: &dyn Desktop,
    target: &WindowCandidate,
    timing: FocusTiming,
) -> WindowResult<()> {
    desk.restore_and_raise(target.handle)?;

    if let Err(e) = desk.set_foreground(target.handle) {
        warn!(error = %e, window = %target.handle, "direct foreground set refused, trying switch-to");
        if let Err(e) = desk.switch_to(target.handle) {
            warn!(error = %e, window = %target.handle, "switch-to request failed");
        }
    }

    let started = Instant::now();
    loop {
        let observed = desk.foreground_window();
        if observed.as_ref().map(|(h, _)| *h) == Some(target.handle) {
            debug!(window = %target.handle, title = %target.title, "foreground verified");
            return Ok(());
        }

        if started.elapsed() >= timing.verify_timeout {
            let (actual, actual_title) = match observed {
                Some((h, t)) => (Some(h), t),
                None => (None, String::new()),
            };
            return Err(WindowError::FocusTimeout {
                expected: target.handle,
                expected_title: target.title.clone(),
                actual,
                actual_title,
            });
        }

        std::thread::sleep(timing.poll_interval);
    }
}
