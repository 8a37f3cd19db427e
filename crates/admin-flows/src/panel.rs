//! Session-gated panel operations
//!
//! The worker-side entry point the UI shell submits against. Owns the live
//! browser sessions; roster and command operations require a session
//! established by an earlier authenticate call for the same
//! (browser, username) pair, so an operator can never act against the panel
//! anonymously.

use console_automation::{BridgeConfig, ConsoleAutomation};
use shared_model::{AuthResult, BrowserKind, CommandResult, RosterResult};
use tracing::warn;
use web_automation::{PanelConfig, Selectors, WebDriver};

use crate::{AuthFlow, CommandFlow, RosterFlow, SessionRegistry};

const NO_SESSION: &str = "No active authenticated session found. Authenticate first.";

pub struct AdminPanel {
    registry: SessionRegistry,
    panel: PanelConfig,
    selectors: Selectors,
    bridge: BridgeConfig,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::with_config(
            PanelConfig::default(),
            Selectors::default(),
            BridgeConfig::default(),
        )
    }

    pub fn with_config(panel: PanelConfig, selectors: Selectors, bridge: BridgeConfig) -> Self {
        Self {
            registry: SessionRegistry::new(),
            panel,
            selectors,
            bridge,
        }
    }

    /// Authenticate as `username`, opening a browser session with
    /// `open_browser` when none exists yet for this (browser, username) pair.
    pub fn authenticate(
        &mut self,
        browser: BrowserKind,
        username: &str,
        password: &str,
        open_browser: impl FnOnce() -> Box<dyn WebDriver>,
    ) -> AuthResult {
        let panel = self.panel.clone();
        let selectors = self.selectors.clone();
        let driver = self
            .registry
            .get_or_insert_with(browser, username, open_browser);
        AuthFlow::with_config(driver, panel, selectors).authenticate(username, password)
    }

    /// Capture the roster and post it through the authenticated session
    pub fn capture_and_submit_roster(
        &mut self,
        console: &mut ConsoleAutomation,
        browser: BrowserKind,
        username: &str,
    ) -> RosterResult {
        let panel = self.panel.clone();
        let selectors = self.selectors.clone();
        let bridge = self.bridge;
        let Some(driver) = self.registry.get_mut(browser, username) else {
            warn!(browser = browser.as_str(), username, "roster requested without a session");
            return RosterResult::failed(NO_SESSION, 0);
        };
        RosterFlow::with_config(console, driver, panel, selectors, bridge).capture_and_submit()
    }

    /// Execute the clipboard admin command.
    ///
    /// The command itself only touches the game, but it still demands an
    /// authenticated session so moderation actions are always attributable
    /// to a panel account.
    pub fn execute_admin_command(
        &mut self,
        console: &mut ConsoleAutomation,
        browser: BrowserKind,
        username: &str,
    ) -> CommandResult {
        if self.registry.get_mut(browser, username).is_none() {
            warn!(browser = browser.as_str(), username, "command requested without a session");
            return CommandResult::failed(NO_SESSION);
        }
        CommandFlow::new(console).execute_from_clipboard()
    }
}

impl Default for AdminPanel {
    fn default() -> Self {
        Self::new()
    }
}
