//! Web Automation - the browser collaborator interface for Warden
//!
//! Holds only what the flows depend on: the driver trait, its error type,
//! and the panel's URL/selector contract. The concrete browser session is
//! provided by the hosting shell.

mod config;
mod error;
mod traits;

pub use config::*;
pub use error::*;
pub use traits::*;
