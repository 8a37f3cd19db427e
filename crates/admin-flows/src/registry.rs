//! Live browser session registry

use std::collections::HashMap;

use shared_model::BrowserKind;
use tracing::debug;
use web_automation::WebDriver;

/// Open browser sessions keyed by (browser, case-folded username).
///
/// Authentication creates or reuses a session; the roster flow only reuses.
/// Owned by the worker thread, so no interior locking is needed.
pub struct SessionRegistry {
    sessions: HashMap<(BrowserKind, String), Box<dyn WebDriver>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    fn key(browser: BrowserKind, username: &str) -> (BrowserKind, String) {
        (browser, username.trim().to_lowercase())
    }

    /// Session for the pair, creating it with `make` when absent
    pub fn get_or_insert_with(
        &mut self,
        browser: BrowserKind,
        username: &str,
        make: impl FnOnce() -> Box<dyn WebDriver>,
    ) -> &mut dyn WebDriver {
        let key = Self::key(browser, username);
        self.sessions
            .entry(key)
            .or_insert_with(|| {
                debug!(browser = browser.as_str(), username, "opening browser session");
                make()
            })
            .as_mut()
    }

    /// Existing session for the pair, if one was authenticated earlier
    pub fn get_mut(&mut self, browser: BrowserKind, username: &str) -> Option<&mut dyn WebDriver> {
        self.sessions
            .get_mut(&Self::key(browser, username))
            .map(|b| &mut **b as &mut dyn WebDriver)
    }

    pub fn remove(&mut self, browser: BrowserKind, username: &str) {
        self.sessions.remove(&Self::key(browser, username));
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakePanel;

    fn driver() -> Box<dyn WebDriver> {
        Box::new(FakePanel::accepting("admin", "pw"))
    }

    #[test]
    fn test_username_lookup_is_case_insensitive() {
        let mut registry = SessionRegistry::new();
        registry.get_or_insert_with(BrowserKind::Chrome, "Admin", driver);

        assert!(registry.get_mut(BrowserKind::Chrome, "ADMIN").is_some());
        registry.get_or_insert_with(BrowserKind::Chrome, "admin ", driver);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_sessions_are_separate_per_browser() {
        let mut registry = SessionRegistry::new();
        registry.get_or_insert_with(BrowserKind::Chrome, "admin", driver);
        registry.get_or_insert_with(BrowserKind::Firefox, "admin", driver);

        assert_eq!(registry.len(), 2);
        assert!(registry.get_mut(BrowserKind::Edge, "admin").is_none());
    }
}
