//! Task Worker - serialized execution for Warden's automation operations

mod error;
mod worker;

pub use error::*;
pub use worker::*;
