//! Input delivery error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputDeliveryError {
    /// The OS keyboard layout has no scan code for this virtual key.
    /// Never guess a scan code of zero; fail instead.
    #[error("No scan code mapping for virtual key 0x{0:02X}")]
    NoScanCodeMapping(u16),

    /// The OS accepted fewer input events than requested.
    #[error("{attempted}: OS accepted {accepted}/{requested} input events")]
    Rejected {
        /// What was being delivered, e.g. "VK 0xC0" or "unicode text"
        attempted: String,
        accepted: u32,
        requested: u32,
    },

    #[error("Legacy key event delivery failed for 0x{0:02X}")]
    LegacyFailed(u16),

    #[error("Input synthesis not supported on this platform")]
    UnsupportedPlatform,
}

pub type InputResult<T> = Result<T, InputDeliveryError>;
