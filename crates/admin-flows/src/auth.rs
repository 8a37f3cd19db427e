//! Authentication flow against the admin panel

use std::time::Duration;

use shared_model::AuthResult;
use tracing::{debug, info};
use web_automation::{PanelConfig, Selectors, WebDriver, WebResult};

pub(crate) const SUCCESS_TEXT: &str = "You have been logged in.";
pub(crate) const FAIL_TEXT: &str = "Please check your login credentials and try again.";
const MODAL_TIMEOUT: Duration = Duration::from_secs(15);

/// Login check + login against the panel, verifying the resulting profile
pub struct AuthFlow<'a> {
    driver: &'a mut dyn WebDriver,
    panel: PanelConfig,
    selectors: Selectors,
}

impl<'a> AuthFlow<'a> {
    pub fn new(driver: &'a mut dyn WebDriver) -> Self {
        Self::with_config(driver, PanelConfig::default(), Selectors::default())
    }

    pub fn with_config(
        driver: &'a mut dyn WebDriver,
        panel: PanelConfig,
        selectors: Selectors,
    ) -> Self {
        Self {
            driver,
            panel,
            selectors,
        }
    }

    /// Authenticate the persistent browser session as `username`.
    ///
    /// Skips the login form when the session already reports the requested
    /// profile (case-folded comparison).
    pub fn authenticate(&mut self, username: &str, password: &str) -> AuthResult {
        if let Err(e) = self.driver.navigate(&self.panel.base_url) {
            return AuthResult::failed(format!("Could not reach the panel: {e}"));
        }

        if let Some(detected) = self.try_get_profile() {
            if detected.eq_ignore_ascii_case(username) {
                info!(profile = %detected, "session already authenticated");
                return AuthResult::ok(
                    "Already authenticated in this browser session.",
                    Some(detected),
                );
            }
            debug!(profile = %detected, "session authenticated as someone else, re-logging in");
        }

        let modal_text = match self.login(username, password) {
            Ok(text) => text,
            Err(e) => return AuthResult::failed(format!("Login flow failed: {e}")),
        };

        self.verdict(username, &modal_text)
    }

    fn login(&mut self, username: &str, password: &str) -> WebResult<String> {
        self.driver.navigate(&self.panel.login_url)?;

        let user_field = self.driver.find(&self.selectors.login_username)?;
        self.driver.fill(user_field, username)?;
        let password_field = self.driver.find(&self.selectors.login_password)?;
        self.driver.fill(password_field, password)?;
        let submit = self.driver.find(&self.selectors.login_submit)?;
        self.driver.click(submit)?;

        Ok(self.wait_for_modal_and_close())
    }

    /// Wait for the result modal, read its body, and close it best effort.
    fn wait_for_modal_and_close(&mut self) -> String {
        let Ok(body) = self.driver.find(&self.selectors.modal_body_visible) else {
            return "No modal appeared after login.".to_string();
        };
        if self.driver.wait_visible(body, MODAL_TIMEOUT).is_err() {
            return "No modal appeared after login.".to_string();
        }

        let text = self.driver.read_text(body).unwrap_or_default();
        if let Ok(close) = self.driver.find(&self.selectors.modal_close_visible) {
            let _ = self.driver.click(close);
        }
        text.trim().to_string()
    }

    fn verdict(&mut self, username: &str, modal_text: &str) -> AuthResult {
        if modal_text.contains(SUCCESS_TEXT) {
            if let Err(e) = self.driver.navigate(&self.panel.base_url) {
                return AuthResult::failed(format!("Could not reach the panel: {e}"));
            }
            return match self.try_get_profile() {
                None => {
                    AuthResult::failed("Login succeeded, but the profile element was not found.")
                }
                Some(detected) if !detected.eq_ignore_ascii_case(username) => AuthResult {
                    success: false,
                    message: "Logged in, but the detected profile does not match the requested \
                              username."
                        .to_string(),
                    detected_profile: Some(detected),
                },
                Some(detected) => {
                    info!(profile = %detected, "authenticated");
                    AuthResult::ok("Authenticated successfully.", Some(detected))
                }
            };
        }

        if modal_text.contains(FAIL_TEXT) {
            return AuthResult::failed("Authentication failed. Verify username/password.");
        }

        AuthResult::failed(format!("Unexpected response after login: {modal_text:?}"))
    }

    /// Best-effort detection of the logged-in profile via the navbar anchor
    fn try_get_profile(&mut self) -> Option<String> {
        let anchor = self.driver.find(&self.selectors.profile_anchor).ok()?;
        let raw = self.driver.read_text(anchor).ok()?;
        extract_profile(&raw).or_else(|| {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
    }
}

/// Extract the profile from text like `Profile (ARTISANAL)`
fn extract_profile(text: &str) -> Option<String> {
    let start = text.find('(')? + 1;
    let end = text[start..].find(')')? + start;
    let inner = text[start..end].trim();
    (!inner.is_empty()).then(|| inner.to_string())
}
