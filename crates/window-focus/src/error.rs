//! Window location and focus error types

use thiserror::Error;

use crate::WindowHandle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// The target application window is not running or not visible.
    /// An expected, reportable condition, not a crash.
    #[error("No visible window matching {filter:?} was found. Make sure the game is running.")]
    NotFound { filter: String },

    /// Foreground focus could not be proven within the verification timeout.
    /// Carries both identities so the caller can say "expected X, got Y".
    #[error(
        "Could not bring {expected_title:?} ({expected:?}) to the foreground; \
         foreground is {actual_title:?} ({actual:?})"
    )]
    FocusTimeout {
        expected: WindowHandle,
        expected_title: String,
        actual: Option<WindowHandle>,
        actual_title: String,
    },

    #[error("Window system call failed: {0}")]
    Platform(String),

    #[error("Window automation not supported on this platform")]
    UnsupportedPlatform,
}

pub type WindowResult<T> = Result<T, WindowError>;
