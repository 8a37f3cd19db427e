//! Roster capture flow: game console to panel form

use std::time::Duration;

use console_automation::{BridgeConfig, ClipboardBridge, ConsoleAutomation};
use shared_model::RosterResult;
use tracing::{info, warn};
use web_automation::{PanelConfig, Selectors, WebDriver, WebResult};

/// Console command that prints the player roster and copies it
pub const ROSTER_COMMAND: &str = "listplayers";

const SUBMIT_WAIT: Duration = Duration::from_secs(15);

/// Capture the live roster through the clipboard bridge and post it to the
/// panel's roster form.
pub struct RosterFlow<'a> {
    console: &'a mut ConsoleAutomation,
    driver: &'a mut dyn WebDriver,
    panel: PanelConfig,
    selectors: Selectors,
    bridge: BridgeConfig,
}

impl<'a> RosterFlow<'a> {
    pub fn new(console: &'a mut ConsoleAutomation, driver: &'a mut dyn WebDriver) -> Self {
        Self::with_config(
            console,
            driver,
            PanelConfig::default(),
            Selectors::default(),
            BridgeConfig::default(),
        )
    }

    pub fn with_config(
        console: &'a mut ConsoleAutomation,
        driver: &'a mut dyn WebDriver,
        panel: PanelConfig,
        selectors: Selectors,
        bridge: BridgeConfig,
    ) -> Self {
        Self {
            console,
            driver,
            panel,
            selectors,
            bridge,
        }
    }

    /// Run the full capture-and-submit sequence.
    ///
    /// A roster that was captured but could not be posted still reports its
    /// character count, so the operator can tell the two failure halves apart.
    pub fn capture_and_submit(&mut self) -> RosterResult {
        let roster = match ClipboardBridge::with_config(&mut *self.console, self.bridge)
            .capture(ROSTER_COMMAND)
        {
            Ok(text) => text,
            Err(e) => return RosterResult::failed(format!("Roster capture failed: {e}"), 0),
        };

        if roster.trim().is_empty() {
            return RosterResult::failed("The game returned an empty roster.", 0);
        }
        let chars = roster.chars().count();
        info!(chars, "roster captured, submitting to panel");

        match self.submit(&roster) {
            Ok(()) => RosterResult::ok("Player roster submitted to the panel.", chars),
            Err(e) => {
                warn!(error = %e, "panel submission failed after a successful capture");
                RosterResult::failed(
                    format!("Roster captured but panel submission failed: {e}"),
                    chars,
                )
            }
        }
    }

    fn submit(&mut self, roster: &str) -> WebResult<()> {
        self.driver.navigate(&self.panel.base_url)?;
        let area = self.driver.find(&self.selectors.roster_textarea)?;
        self.driver.wait_visible(area, SUBMIT_WAIT)?;
        self.driver.fill(area, roster)?;
        let submit = self.driver.find(&self.selectors.roster_submit)?;
        self.driver.click(submit)
    }
}
