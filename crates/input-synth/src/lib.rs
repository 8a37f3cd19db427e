//! Input Synth - synthetic keyboard delivery for Warden
//!
//! Low-level primitives for pressing keys by virtual-key code or hardware scan
//! code, sending Unicode text, and sending modifier chords.

mod error;
mod keys;
mod traits;

#[cfg(target_os = "windows")]
mod windows;

pub use error::*;
pub use keys::*;
pub use traits::*;

#[cfg(target_os = "windows")]
pub use windows::WindowsKeySynth;

/// Create a platform-appropriate key delivery backend
pub fn create_key_delivery() -> InputResult<Box<dyn KeyDelivery>> {
    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(WindowsKeySynth::new()?))
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(InputDeliveryError::UnsupportedPlatform)
    }
}
