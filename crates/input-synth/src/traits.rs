//! Key delivery trait abstraction

use crate::InputResult;

/// Synthetic keyboard delivery into the OS input stream.
///
/// Every method either fully delivers the requested events and returns, or
/// fails with an [`InputDeliveryError`](crate::InputDeliveryError) carrying the
/// attempted code and how many sub-events the OS actually accepted. No method
/// sleeps internally; calls block only for the duration of the OS call.
pub trait KeyDelivery: Send {
    /// Press and release a key by virtual-key code.
    ///
    /// The virtual key is mapped to a hardware scan code first so the event is
    /// layout-correct; if the mapping fails this fails fast rather than
    /// guessing a scan code of zero.
    fn press_virtual_key(&self, vk: u16) -> InputResult<()>;

    /// Press and release a key by hardware scan code (layout-independent).
    fn press_scan_code(&self, scan: u16) -> InputResult<()>;

    /// Press and release a key through the legacy single-call-per-edge path.
    ///
    /// Behaves differently from message-queue-based delivery in some target
    /// applications; used only as a last-resort fallback.
    fn press_legacy_key(&self, vk: u16) -> InputResult<()>;

    /// Deliver each character of `text` as a down+up Unicode key event pair.
    /// An empty string is a no-op returning success.
    fn send_text(&self, text: &str) -> InputResult<()>;

    /// Deliver modifier-down, key-down, key-up, modifier-up in that strict
    /// order. Both keys are mapped to scan codes before delivery so the chord
    /// stays layout-independent.
    fn send_chord(&self, modifier_vk: u16, key_vk: u16) -> InputResult<()>;
}
