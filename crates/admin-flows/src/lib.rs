//! Admin Flows - the operations Warden exposes to its UI shell
//!
//! Each flow composes the console-automation and web-automation layers into
//! one operator-facing operation and reports a plain result struct instead of
//! raising. Flows assume they run on the single worker thread.

mod auth;
mod command;
mod panel;
mod profile;
mod registry;
mod roster;

#[cfg(test)]
mod testutil;

pub use auth::AuthFlow;
pub use command::CommandFlow;
pub use panel::AdminPanel;
pub use profile::{safe_dirname, AppPaths};
pub use registry::SessionRegistry;
pub use roster::{RosterFlow, ROSTER_COMMAND};
