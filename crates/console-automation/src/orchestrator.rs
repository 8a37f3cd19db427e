//! Console automation orchestrator
//!
//! One invocation walks: locate window, force foreground, open console,
//! deliver command, confirm, settle. No state survives an invocation except
//! the configuration; the single-worker queue serializes callers.

use std::thread;
use std::time::Duration;

use input_synth::{
    InputDeliveryError, KeyDelivery, SCAN_ENTER, SCAN_ESCAPE, VK_CONTROL, VK_RETURN, VK_V,
};
use tracing::{debug, info, warn};
use window_focus::{Desktop, WindowCandidate, force_foreground, locate};

use crate::{Clipboard, ClipboardSnapshot, ConsoleConfig, ConsoleError, ConsoleResult};

/// How command text reaches the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryStrategy {
    /// Type the text directly. Never touches the clipboard, so nothing can
    /// leak into the game's own paste history.
    #[default]
    TypeText,
    /// Put the text in the clipboard and send the paste chord. Used by the
    /// roster bridge, which round-trips through the clipboard anyway.
    ClipboardPaste,
}

/// Drives the in-game console end to end
pub struct ConsoleAutomation {
    config: ConsoleConfig,
    keys: Box<dyn KeyDelivery>,
    desk: Box<dyn Desktop>,
    pub(crate) clipboard: Box<dyn Clipboard>,
}

impl ConsoleAutomation {
    pub fn new(
        config: ConsoleConfig,
        keys: Box<dyn KeyDelivery>,
        desk: Box<dyn Desktop>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            config,
            keys,
            desk,
            clipboard,
        }
    }

    /// Construct with the real OS backends. Fails fast off-Windows, before
    /// any side effect.
    pub fn with_system(config: ConsoleConfig) -> ConsoleResult<Self> {
        crate::ensure_platform_supported()?;
        let keys = input_synth::create_key_delivery()?;
        let desk = window_focus::create_desktop()?;
        Ok(Self::new(config, keys, desk, Box::new(crate::SystemClipboard::new())))
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Current clipboard text, for callers that take their input from it
    pub fn read_clipboard(&mut self) -> ConsoleResult<String> {
        self.clipboard.get_text()
    }

    /// Locate the game window and force it to the foreground.
    ///
    /// On failure nothing has been typed yet, so this is a clean no-op
    /// failure the caller can report directly.
    pub fn focus_target(&self) -> ConsoleResult<WindowCandidate> {
        let target = locate(self.desk.as_ref(), &self.config.window)?;
        debug!(window = %target.handle, title = %target.title, "located game window");

        force_foreground(self.desk.as_ref(), &target, self.config.focus_timing)?;
        settle(self.config.focus_delay);
        debug!(window = %target.handle, "focused game window");
        Ok(target)
    }

    /// Execute `command` in the game console.
    ///
    /// With `preserve_clipboard` the clipboard is snapshotted before any
    /// mutation and restored on every exit path, best effort. The default
    /// typing strategy never mutates the clipboard at all.
    pub fn execute(
        &mut self,
        command: &str,
        strategy: DeliveryStrategy,
        preserve_clipboard: bool,
    ) -> ConsoleResult<()> {
        let target = self.focus_target()?;
        info!(command, window = %target.title, ?strategy, "executing console command");

        let snapshot =
            preserve_clipboard.then(|| ClipboardSnapshot::capture(self.clipboard.as_mut()));

        let result = self.drive_console(command, strategy);

        if let Some(snapshot) = snapshot {
            snapshot.restore(self.clipboard.as_mut());
        }
        result
    }

    /// Type the command directly and confirm. The default entry point.
    pub fn type_and_execute(&mut self, command: &str) -> ConsoleResult<()> {
        self.execute(command, DeliveryStrategy::TypeText, false)
    }

    /// Paste the command from the clipboard and confirm.
    pub fn paste_and_execute(
        &mut self,
        command: &str,
        restore_clipboard: bool,
    ) -> ConsoleResult<()> {
        self.execute(command, DeliveryStrategy::ClipboardPaste, restore_clipboard)
    }

    fn drive_console(&mut self, command: &str, strategy: DeliveryStrategy) -> ConsoleResult<()> {
        self.open_console()?;
        self.deliver_command(command, strategy)?;
        debug!("command sent");
        self.confirm()?;
        debug!("command confirmed");
        settle(self.config.after_command_delay);
        Ok(())
    }

    /// Open the in-game console, trying each delivery technique in order.
    fn open_console(&self) -> ConsoleResult<()> {
        if self.config.pre_console_escape {
            // Close any blocking in-game menu first. Best effort.
            if let Err(e) = self.keys.press_scan_code(SCAN_ESCAPE) {
                warn!(error = %e, "pre-console Escape failed");
            }
            settle(self.config.after_escape_delay);
        }

        let vk = self.config.console_open_vk;
        let scan = self.config.console_open_scan;
        let techniques: [(&str, &dyn Fn() -> Result<(), InputDeliveryError>); 3] = [
            ("legacy key event", &|| self.keys.press_legacy_key(vk)),
            ("scan code", &|| self.keys.press_scan_code(scan)),
            ("virtual key", &|| self.keys.press_virtual_key(vk)),
        ];

        match try_techniques("console open", &techniques) {
            Ok(()) => {
                settle(self.config.console_open_delay);
                debug!("console open");
                Ok(())
            }
            Err(attempts) => Err(ConsoleError::ConsoleOpenFailed { attempts }),
        }
    }

    fn deliver_command(&mut self, command: &str, strategy: DeliveryStrategy) -> ConsoleResult<()> {
        match strategy {
            DeliveryStrategy::TypeText => self.keys.send_text(command)?,
            DeliveryStrategy::ClipboardPaste => {
                self.clipboard.set_text(command)?;
                self.keys.send_chord(VK_CONTROL, VK_V)?;
            }
        }
        Ok(())
    }

    /// Press Enter. The deepest fallback chain: Windows blocks synthetic
    /// Enter at elevated privilege in some interactive sessions, so four
    /// distinct techniques are tried before giving up.
    fn confirm(&self) -> ConsoleResult<()> {
        let techniques: [(&str, &dyn Fn() -> Result<(), InputDeliveryError>); 4] = [
            ("virtual key", &|| self.keys.press_virtual_key(VK_RETURN)),
            ("scan code", &|| self.keys.press_scan_code(SCAN_ENTER)),
            ("legacy key event", &|| self.keys.press_legacy_key(VK_RETURN)),
            ("unicode return", &|| self.keys.send_text("\r")),
        ];

        try_techniques("confirm", &techniques)
            .map_err(|attempts| ConsoleError::ConfirmFailed { attempts })
    }
}

/// Run an ordered technique list, stopping at the first success. On
/// exhaustion every underlying failure is returned, in attempted order.
fn try_techniques(
    action: &str,
    techniques: &[(&str, &dyn Fn() -> Result<(), InputDeliveryError>)],
) -> Result<(), Vec<InputDeliveryError>> {
    let mut attempts = Vec::new();
    for (name, technique) in techniques {
        match technique() {
            Ok(()) => {
                debug!(action, technique = name, "delivery succeeded");
                return Ok(());
            }
            Err(e) => {
                warn!(action, technique = name, error = %e, "delivery technique failed");
                attempts.push(e);
            }
        }
    }
    Err(attempts)
}

fn settle(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}


#[cfg(test)]
mod tests {
    use window_focus::WindowError;

    use super::fakes::{FakeDesk, ScriptedKeys};
    use super::*;
    use crate::clipboard::fakes::ScriptedClipboard;

    fn automation(
        keys: ScriptedKeys,
        desk: FakeDesk,
        clip: ScriptedClipboard,
    ) -> ConsoleAutomation {
        ConsoleAutomation::new(
            ConsoleConfig::instant(),
            Box::new(keys),
            Box::new(desk),
            Box::new(clip),
        )
    }

    #[test]
    fn test_typing_path_never_mutates_clipboard() {
        let clip = ScriptedClipboard::new("user data");
        let clip_state = clip.handle();
        let mut auto = automation(ScriptedKeys::reliable(), FakeDesk::with_game(), clip);

        auto.type_and_execute("KickById ABCDEF0123456789 griefing")
            .unwrap();

        let state = clip_state.lock().unwrap();
        assert!(state.writes.is_empty());
        assert_eq!(state.current, "user data");
    }

    #[test]
    fn test_typing_path_types_the_command_text() {
        let keys = ScriptedKeys::reliable();
        let calls = keys.handle();
        let mut auto = automation(keys, FakeDesk::with_game(), ScriptedClipboard::new(""));

        auto.type_and_execute("listplayers").unwrap();

        let calls = calls.lock().unwrap();
        assert!(calls.contains(&"text:listplayers".to_string()));
        assert!(!calls.iter().any(|c| c.starts_with("chord:")));
    }

    #[test]
    fn test_paste_path_writes_command_and_sends_paste_chord() {
        let keys = ScriptedKeys::reliable();
        let calls = keys.handle();
        let clip = ScriptedClipboard::new("user data");
        let clip_state = clip.handle();
        let mut auto = automation(keys, FakeDesk::with_game(), clip);

        auto.paste_and_execute("listplayers", false).unwrap();

        assert_eq!(
            clip_state.lock().unwrap().writes,
            vec!["listplayers".to_string()]
        );
        assert!(
            calls
                .lock()
                .unwrap()
                .contains(&"chord:0x11+0x56".to_string())
        );
    }

    #[test]
    fn test_paste_path_restores_clipboard_when_requested() {
        let clip = ScriptedClipboard::new("user data");
        let clip_state = clip.handle();
        let mut auto = automation(ScriptedKeys::reliable(), FakeDesk::with_game(), clip);

        auto.paste_and_execute("listplayers", true).unwrap();

        let state = clip_state.lock().unwrap();
        assert_eq!(state.current, "user data");
        assert_eq!(state.writes.last().map(String::as_str), Some("user data"));
    }

    #[test]
    fn test_console_open_falls_back_in_order() {
        let keys = ScriptedKeys::failing_on(&["legacy:0xC0", "scan:0x29"]);
        let calls = keys.handle();
        let mut auto = automation(keys, FakeDesk::with_game(), ScriptedClipboard::new(""));

        auto.type_and_execute("UnbanById ABCDEF0123456789 appeal")
            .unwrap();

        let calls = calls.lock().unwrap();
        let open_calls: Vec<&str> = calls
            .iter()
            .map(String::as_str)
            .filter(|c| c.contains("0xC0") || *c == "scan:0x29")
            .collect();
        assert_eq!(open_calls, vec!["legacy:0xC0", "scan:0x29", "vk:0xC0"]);
    }

    #[test]
    fn test_console_open_exhaustion_aggregates_all_three_failures() {
        let keys = ScriptedKeys::failing_on(&["legacy:0xC0", "scan:0x29", "vk:0xC0"]);
        let mut auto = automation(keys, FakeDesk::with_game(), ScriptedClipboard::new(""));

        let err = auto.type_and_execute("listplayers").unwrap_err();

        match err {
            ConsoleError::ConsoleOpenFailed { attempts } => {
                assert_eq!(attempts.len(), 3);
                assert!(attempts[0].to_string().contains("legacy:0xC0"));
                assert!(attempts[1].to_string().contains("scan:0x29"));
                assert!(attempts[2].to_string().contains("vk:0xC0"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_confirm_exhaustion_aggregates_all_four_failures() {
        let keys =
            ScriptedKeys::failing_on(&["vk:0x0D", "scan:0x1C", "legacy:0x0D", "text:\r"]);
        let mut auto = automation(keys, FakeDesk::with_game(), ScriptedClipboard::new(""));

        let err = auto.paste_and_execute("listplayers", false).unwrap_err();

        match err {
            ConsoleError::ConfirmFailed { attempts } => assert_eq!(attempts.len(), 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_window_is_clean_failure_with_no_keystrokes() {
        let keys = ScriptedKeys::reliable();
        let calls = keys.handle();
        let clip = ScriptedClipboard::new("untouched");
        let clip_state = clip.handle();
        let mut auto = automation(keys, FakeDesk::empty(), clip);

        let err = auto.type_and_execute("listplayers").unwrap_err();

        assert!(matches!(
            err,
            ConsoleError::Window(WindowError::NotFound { .. })
        ));
        assert!(calls.lock().unwrap().is_empty());
        assert!(clip_state.lock().unwrap().writes.is_empty());
    }

    #[test]
    fn test_pre_console_escape_sent_before_console_key() {
        let keys = ScriptedKeys::reliable();
        let calls = keys.handle();
        let mut auto = automation(keys, FakeDesk::with_game(), ScriptedClipboard::new(""));

        auto.type_and_execute("listplayers").unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0], "scan:0x01");
        assert_eq!(calls[1], "legacy:0xC0");
    }

    #[test]
    fn test_escape_can_be_disabled() {
        let keys = ScriptedKeys::reliable();
        let calls = keys.handle();
        let mut config = ConsoleConfig::instant();
        config.pre_console_escape = false;
        let mut auto = ConsoleAutomation::new(
            config,
            Box::new(keys),
            Box::new(FakeDesk::with_game()),
            Box::new(ScriptedClipboard::new("")),
        );

        auto.type_and_execute("listplayers").unwrap();

        assert_eq!(calls.lock().unwrap()[0], "legacy:0xC0");
    }
}
