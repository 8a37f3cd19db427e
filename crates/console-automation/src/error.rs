//! Console automation error types

use std::time::Duration;

use input_synth::InputDeliveryError;
use thiserror::Error;
use window_focus::WindowError;

/// Render every attempted fallback failure, in attempted order.
fn join_attempts(attempts: &[InputDeliveryError]) -> String {
    attempts
        .iter()
        .enumerate()
        .map(|(i, e)| format!("[{}] {e}", i + 1))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("Game console automation is only supported on Windows")]
    UnsupportedPlatform,

    /// Window location or focus failure, propagated unchanged
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Every console-open delivery technique failed
    #[error("Could not open the game console: {}", join_attempts(attempts))]
    ConsoleOpenFailed { attempts: Vec<InputDeliveryError> },

    /// Every Enter delivery technique failed
    #[error("Could not confirm the command: {}", join_attempts(attempts))]
    ConfirmFailed { attempts: Vec<InputDeliveryError> },

    /// Command text delivery failed
    #[error(transparent)]
    Delivery(#[from] InputDeliveryError),

    #[error("Clipboard access failed: {0}")]
    Clipboard(String),

    /// The command executed but the game never replied through the clipboard
    #[error(
        "Timed out after {waited:?} waiting for console output in the clipboard. \
         This usually means the command did not execute."
    )]
    CaptureTimeout { waited: Duration },
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregated_error_enumerates_attempts_in_order() {
        let err = ConsoleError::ConsoleOpenFailed {
            attempts: vec![
                InputDeliveryError::LegacyFailed(0xC0),
                InputDeliveryError::NoScanCodeMapping(0xC0),
            ],
        };
        let text = err.to_string();
        let first = text.find("[1] Legacy key event").unwrap();
        let second = text.find("[2] No scan code").unwrap();
        assert!(first < second);
    }
}
