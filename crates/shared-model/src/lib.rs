//! Shared value types for Warden
//!
//! This crate contains the result types, browser selection, and the admin
//! command grammar shared across the worker, flows, and the UI shell.

mod command;
mod results;

pub use command::*;
pub use results::*;
