//! Window Focus - locating and foregrounding the target game window
//!
//! Enumerates top-level OS windows, ranks candidates against a title spec,
//! and forces input focus onto the winner with verification polling.

mod error;
mod foreground;
mod locator;

#[cfg(target_os = "windows")]
mod windows;

pub use error::*;
pub use foreground::*;
pub use locator::*;

#[cfg(target_os = "windows")]
pub use windows::{Win32Desktop, enumerate_top_level_windows};

/// Create a platform-appropriate desktop backend
pub fn create_desktop() -> WindowResult<Box<dyn Desktop>> {
    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(Win32Desktop::new()))
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(WindowError::UnsupportedPlatform)
    }
}
