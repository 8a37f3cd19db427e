//! Console automation configuration

use std::time::Duration;

use input_synth::{SCAN_CONSOLE, VK_CONSOLE};
use window_focus::{FocusTiming, WindowSpec};

/// Process-wide immutable configuration for the in-game console.
///
/// Passed explicitly into the orchestrator so tests can inject zero delays.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// How to find the game window
    pub window: WindowSpec,
    /// Virtual-key code of the console key (VK_OEM_3 on US layouts)
    pub console_open_vk: u16,
    /// Scan code of the same physical key, for layout-independent delivery
    pub console_open_scan: u16,
    /// Settle delay after the window reaches the foreground
    pub focus_delay: Duration,
    /// Press Escape first to close any blocking in-game menu
    pub pre_console_escape: bool,
    pub after_escape_delay: Duration,
    /// Settle delay after the console-open key, before typing
    pub console_open_delay: Duration,
    /// Settle delay after Enter, so the caller's next action does not
    /// disturb the game's foreground state
    pub after_command_delay: Duration,
    /// Foreground verification polling
    pub focus_timing: FocusTiming,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            window: WindowSpec::default(),
            console_open_vk: VK_CONSOLE,
            console_open_scan: SCAN_CONSOLE,
            focus_delay: Duration::from_secs(2),
            pre_console_escape: true,
            after_escape_delay: Duration::from_millis(150),
            console_open_delay: Duration::from_secs(1),
            after_command_delay: Duration::from_millis(200),
            focus_timing: FocusTiming::default(),
        }
    }
}

impl ConsoleConfig {
    /// A configuration with every delay zeroed, for tests
    pub fn instant() -> Self {
        Self {
            focus_delay: Duration::ZERO,
            after_escape_delay: Duration::ZERO,
            console_open_delay: Duration::ZERO,
            after_command_delay: Duration::ZERO,
            focus_timing: FocusTiming {
                verify_timeout: Duration::ZERO,
                poll_interval: Duration::ZERO,
            },
            ..Self::default()
        }
    }
}
