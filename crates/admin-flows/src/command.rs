//! Admin command flow: clipboard text to game console

use console_automation::ConsoleAutomation;
use shared_model::{AdminCommand, CommandResult};
use tracing::info;

/// Validate the admin command currently on the clipboard and execute it in
/// the game console.
///
/// The clipboard is the hand-off point: the operator copies a command from
/// the panel, then triggers this flow. Nothing is typed into the game until
/// the text parses as a known admin command.
pub struct CommandFlow<'a> {
    console: &'a mut ConsoleAutomation,
}

impl<'a> CommandFlow<'a> {
    pub fn new(console: &'a mut ConsoleAutomation) -> Self {
        Self { console }
    }

    pub fn execute_from_clipboard(&mut self) -> CommandResult {
        let raw = match self.console.read_clipboard() {
            Ok(text) => text,
            Err(e) => return CommandResult::failed(format!("Could not read the clipboard: {e}")),
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return CommandResult::failed("Clipboard is empty. Copy a valid admin command first.");
        }

        let command = match AdminCommand::parse(raw) {
            Ok(command) => command,
            Err(e) => return CommandResult::failed(e.to_string()),
        };

        let normalized = command.to_string();
        info!(command = %normalized, "executing admin command");
        match self.console.type_and_execute(&normalized) {
            Ok(()) => CommandResult::ok("Admin command executed in the game console.", normalized),
            Err(e) => CommandResult::failed(format!("Console delivery failed: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{console_with, MemClipboard, RecordingKeys};

    #[test]
    fn test_valid_clipboard_command_is_typed_into_the_console() {
        let clip = MemClipboard::new("KickById ABCDEF0123456789 team killing");
        let keys = RecordingKeys::new();
        let texts = keys.texts();
        let mut console = console_with(keys, clip);

        let result = CommandFlow::new(&mut console).execute_from_clipboard();

        assert!(result.success, "{}", result.message);
        let executed = result.executed_command.unwrap();
        assert!(executed.starts_with("KickById ABCDEF0123456789"));
        assert!(texts.lock().unwrap().contains(&executed));
    }

    #[test]
    fn test_empty_clipboard_is_rejected_before_any_keystroke() {
        let clip = MemClipboard::new("   ");
        let keys = RecordingKeys::new();
        let texts = keys.texts();
        let mut console = console_with(keys, clip);

        let result = CommandFlow::new(&mut console).execute_from_clipboard();

        assert!(!result.success);
        assert!(result.message.contains("Clipboard is empty"));
        assert!(texts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_command_reports_the_validation_error() {
        let clip = MemClipboard::new("teleport 1 2 3");
        let keys = RecordingKeys::new();
        let texts = keys.texts();
        let mut console = console_with(keys, clip);

        let result = CommandFlow::new(&mut console).execute_from_clipboard();

        assert!(!result.success);
        assert!(result.executed_command.is_none());
        assert!(texts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_bad_player_id_never_reaches_the_console() {
        let clip = MemClipboard::new("BanById XYZ 60 griefing");
        let keys = RecordingKeys::new();
        let texts = keys.texts();
        let mut console = console_with(keys, clip);

        let result = CommandFlow::new(&mut console).execute_from_clipboard();

        assert!(!result.success);
        assert!(texts.lock().unwrap().is_empty());
    }
}
