//! Admin command grammar and validation
//!
//! Supported formats:
//! - `KickById <PlayerId> <reason...>`
//! - `BanById <PlayerId> <durationSeconds> <reason...>`
//! - `UnbanById <PlayerId> <reason...>`
//!
//! Validation happens before any OS side effect, so a rejected command never
//! partially executes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a pasted command text can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Command is empty.")]
    Empty,

    #[error(
        "Invalid command. Expected one of: KickById <PlayerId> <reason>, \
         BanById <PlayerId> <durationSeconds> <reason>, UnbanById <PlayerId> <reason>."
    )]
    UnknownVerb(String),

    #[error("{verb} requires: {usage}.")]
    MissingArguments { verb: String, usage: &'static str },

    #[error("Invalid PlayerId. Expected 16-32 hex characters (0-9, A-F). Got: {0:?}")]
    InvalidPlayerId(String),

    #[error("BanById duration must be an integer.")]
    NonNumericDuration(String),

    #[error("BanById duration must be a positive integer.")]
    NonPositiveDuration(i64),

    #[error("BanById duration must be at most {} seconds.", u32::MAX)]
    DurationTooLarge(i64),

    #[error("{0} requires a non-empty reason.")]
    EmptyReason(String),
}

/// The moderation action a command performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminVerb {
    KickById,
    BanById,
    UnbanById,
}

impl AdminVerb {
    /// Match a verb case-insensitively
    fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "kickbyid" => Some(AdminVerb::KickById),
            "banbyid" => Some(AdminVerb::BanById),
            "unbanbyid" => Some(AdminVerb::UnbanById),
            _ => None,
        }
    }

    fn usage(&self) -> &'static str {
        match self {
            AdminVerb::KickById => "KickById <PlayerId> <reason>",
            AdminVerb::BanById => "BanById <PlayerId> <durationSeconds> <reason>",
            AdminVerb::UnbanById => "UnbanById <PlayerId> <reason>",
        }
    }
}

/// A validated, normalized admin command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCommand {
    /// Verb exactly as the operator typed it
    verb_text: String,
    pub verb: AdminVerb,
    pub player_id: String,
    /// Ban duration in seconds; only present for bans
    pub duration_secs: Option<u32>,
    /// Reason with whitespace runs collapsed to single spaces
    pub reason: String,
}

impl AdminCommand {
    /// Parse and validate raw command text.
    ///
    /// Whitespace between arguments is normalized; the verb keeps the casing
    /// the operator typed so the console sees a familiar command.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let Some(&verb_word) = parts.first() else {
            return Err(ValidationError::Empty);
        };

        let verb = AdminVerb::from_word(verb_word)
            .ok_or_else(|| ValidationError::UnknownVerb(verb_word.to_string()))?;

        let min_parts = match verb {
            AdminVerb::BanById => 4,
            _ => 3,
        };
        if parts.len() < min_parts {
            return Err(ValidationError::MissingArguments {
                verb: verb_word.to_string(),
                usage: verb.usage(),
            });
        }

        let player_id = parts[1];
        validate_player_id(player_id)?;

        let (duration_secs, reason_parts) = match verb {
            AdminVerb::BanById => {
                let raw = parts[2];
                let value: i64 = raw
                    .parse()
                    .map_err(|_| ValidationError::NonNumericDuration(raw.to_string()))?;
                if value <= 0 {
                    return Err(ValidationError::NonPositiveDuration(value));
                }
                // A lossy narrowing here would wrap an oversized duration to a
                // value the positivity check just ruled out.
                let secs = u32::try_from(value)
                    .map_err(|_| ValidationError::DurationTooLarge(value))?;
                (Some(secs), &parts[3..])
            }
            _ => (None, &parts[2..]),
        };

        let reason = reason_parts.join(" ");
        if reason.trim().is_empty() {
            return Err(ValidationError::EmptyReason(verb_word.to_string()));
        }

        Ok(Self {
            verb_text: verb_word.to_string(),
            verb,
            player_id: player_id.to_string(),
            duration_secs,
            reason,
        })
    }
}

impl fmt::Display for AdminCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.duration_secs {
            Some(duration) => write!(
                f,
                "{} {} {} {}",
                self.verb_text, self.player_id, duration, self.reason
            ),
            None => write!(f, "{} {} {}", self.verb_text, self.player_id, self.reason),
        }
    }
}

/// PlayerId is 16-32 hex characters.
fn validate_player_id(id: &str) -> Result<(), ValidationError> {
    let ok = (16..=32).contains(&id.len()) && id.chars().all(|c| c.is_ascii_hexdigit());
    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidPlayerId(id.to_string()))
    }
}
