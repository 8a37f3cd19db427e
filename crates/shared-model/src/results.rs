//! Operation results reported back to the UI shell

use serde::{Deserialize, Serialize};

/// Supported browser selections for the persistent panel session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
}

impl BrowserKind {
    /// Stable name used for profile directory paths
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Edge => "edge",
            BrowserKind::Firefox => "firefox",
        }
    }
}

/// Outcome of an authentication attempt against the admin panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    /// True if authenticated as the requested profile
    pub success: bool,
    /// Human-readable status message
    pub message: String,
    /// Profile parsed from the navbar element, if present
    pub detected_profile: Option<String>,
}

impl AuthResult {
    pub fn ok(message: impl Into<String>, detected_profile: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            detected_profile,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            detected_profile: None,
        }
    }
}

/// Outcome of a roster capture-and-submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterResult {
    /// True if the roster was captured and submitted to the panel
    pub success: bool,
    /// Human-readable status message
    pub message: String,
    /// Size of the captured roster text, in characters
    pub char_count: usize,
}

impl RosterResult {
    pub fn ok(message: impl Into<String>, char_count: usize) -> Self {
        Self {
            success: true,
            message: message.into(),
            char_count,
        }
    }

    pub fn failed(message: impl Into<String>, char_count: usize) -> Self {
        Self {
            success: false,
            message: message.into(),
            char_count,
        }
    }
}

/// Outcome of an admin command execution attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// True if a valid command was executed in the game console
    pub success: bool,
    /// Human-readable status message
    pub message: String,
    /// Normalized command string executed, if any
    pub executed_command: Option<String>,
}

impl CommandResult {
    pub fn ok(message: impl Into<String>, executed_command: String) -> Self {
        Self {
            success: true,
            message: message.into(),
            executed_command: Some(executed_command),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            executed_command: None,
        }
    }
}
