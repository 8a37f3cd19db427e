//! Console Automation - driving the in-game console for Warden
//!
//! Composes window location, foreground forcing, and synthetic input into the
//! open-console / deliver-command / confirm sequence, plus the
//! clipboard-mediated bridge used to read console output back.

mod bridge;
mod clipboard;
mod config;
mod error;
mod orchestrator;

pub use bridge::*;
pub use clipboard::*;
pub use config::*;
pub use error::*;
pub use orchestrator::*;

/// Fail fast when the current OS cannot drive the game console.
/// Checked before any side effect at every public entry point.
pub fn ensure_platform_supported() -> ConsoleResult<()> {
    #[cfg(target_os = "windows")]
    {
        Ok(())
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(ConsoleError::UnsupportedPlatform)
    }
}
