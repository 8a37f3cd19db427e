//! Clipboard access and snapshot/restore
//!
//! The OS clipboard is a global resource other applications mutate
//! concurrently; every read may be stale and every write may be clobbered.
//! Restoration is a courtesy, never a correctness requirement.

use tracing::warn;

use crate::{ConsoleError, ConsoleResult};

/// Text clipboard seam, faked in tests
pub trait Clipboard: Send {
    /// Read clipboard text; an empty or non-text clipboard reads as ""
    fn get_text(&mut self) -> ConsoleResult<String>;

    fn set_text(&mut self, text: &str) -> ConsoleResult<()>;
}

/// The real OS clipboard via arboard.
///
/// A fresh arboard handle is opened per operation; holding one across the
/// long waits in this crate keeps the clipboard locked on some platforms.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> ConsoleResult<String> {
        let mut board =
            arboard::Clipboard::new().map_err(|e| ConsoleError::Clipboard(e.to_string()))?;
        match board.get_text() {
            Ok(text) => Ok(text),
            // Empty clipboard is not an error for our purposes.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ConsoleError::Clipboard(e.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> ConsoleResult<()> {
        let mut board =
            arboard::Clipboard::new().map_err(|e| ConsoleError::Clipboard(e.to_string()))?;
        board
            .set_text(text.to_string())
            .map_err(|e| ConsoleError::Clipboard(e.to_string()))
    }
}

/// Clipboard content captured before a destructive operation.
///
/// Owned exclusively by the call that captured it; the single-worker queue
/// guarantees no concurrent automation call shares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    text: String,
}

impl ClipboardSnapshot {
    /// Capture the current clipboard text, best effort
    pub fn capture(clipboard: &mut dyn Clipboard) -> Self {
        let text = clipboard.get_text().unwrap_or_else(|e| {
            warn!(error = %e, "could not snapshot clipboard, will restore empty text");
            String::new()
        });
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write the snapshot back. Failures are logged and swallowed on every
    /// exit path; restoration must never mask the operation's own outcome.
    pub fn restore(&self, clipboard: &mut dyn Clipboard) {
        if let Err(e) = clipboard.set_text(&self.text) {
            warn!(error = %e, "clipboard restore failed");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::ScriptedClipboard;
    use super::*;

    #[test]
    fn test_snapshot_restores_captured_text() {
        let mut clip = ScriptedClipboard::new("precious");
        let state = clip.handle();
        let snapshot = ClipboardSnapshot::capture(&mut clip);

        clip.set_text("scratch").unwrap();
        snapshot.restore(&mut clip);
        assert_eq!(state.lock().unwrap().current, "precious");
    }
}
