//! Shared fakes for flow tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use console_automation::{Clipboard, ConsoleAutomation, ConsoleConfig, ConsoleResult};
use input_synth::{InputResult, KeyDelivery};
use web_automation::{ElementHandle, Selectors, WebDriver, WebError, WebResult};
use window_focus::{Desktop, WindowHandle, WindowResult};

use crate::auth::{FAIL_TEXT, SUCCESS_TEXT};

/// Scripted stand-in for the admin panel behind a [`WebDriver`]
pub struct FakePanel {
    accept_user: String,
    accept_pass: String,
    /// What the navbar profile anchor currently shows, if logged in
    pub profile: Option<String>,
    /// Profile reported after a successful login; defaults to the accepted
    /// username uppercased
    pub post_login_profile: Option<String>,
    pub navigations: Vec<String>,
    pub filled: HashMap<String, String>,
    pub modal: Option<String>,
    pub roster_posts: Vec<String>,
    /// Simulate the roster textarea missing from the page
    pub roster_broken: bool,
    selectors: Selectors,
    elements: Vec<String>,
}

impl FakePanel {
    pub fn accepting(username: &str, password: &str) -> Self {
        Self {
            accept_user: username.to_string(),
            accept_pass: password.to_string(),
            profile: None,
            post_login_profile: None,
            navigations: Vec::new(),
            filled: HashMap::new(),
            modal: None,
            roster_posts: Vec::new(),
            roster_broken: false,
            selectors: Selectors::default(),
            elements: Vec::new(),
        }
    }

    fn intern(&mut self, selector: &str) -> ElementHandle {
        if let Some(idx) = self.elements.iter().position(|s| s == selector) {
            return ElementHandle(idx as u64);
        }
        self.elements.push(selector.to_string());
        ElementHandle((self.elements.len() - 1) as u64)
    }

    fn selector_of(&self, element: ElementHandle) -> String {
        self.elements
            .get(element.0 as usize)
            .cloned()
            .unwrap_or_default()
    }
}

impl WebDriver for FakePanel {
    fn navigate(&mut self, url: &str) -> WebResult<()> {
        self.navigations.push(url.to_string());
        Ok(())
    }

    fn find(&mut self, selector: &str) -> WebResult<ElementHandle> {
        let missing = (selector == self.selectors.profile_anchor && self.profile.is_none())
            || (selector == self.selectors.modal_body_visible && self.modal.is_none())
            || (selector == self.selectors.modal_close_visible && self.modal.is_none())
            || (selector == self.selectors.roster_textarea && self.roster_broken);
        if missing {
            return Err(WebError::NotFound(selector.to_string()));
        }
        Ok(self.intern(selector))
    }

    fn fill(&mut self, element: ElementHandle, text: &str) -> WebResult<()> {
        let selector = self.selector_of(element);
        self.filled.insert(selector, text.to_string());
        Ok(())
    }

    fn click(&mut self, element: ElementHandle) -> WebResult<()> {
        let selector = self.selector_of(element);
        if selector == self.selectors.login_submit {
            let user = self.filled.get(&self.selectors.login_username);
            let pass = self.filled.get(&self.selectors.login_password);
            if user == Some(&self.accept_user) && pass == Some(&self.accept_pass) {
                self.modal = Some(SUCCESS_TEXT.to_string());
                self.profile = Some(
                    self.post_login_profile
                        .clone()
                        .unwrap_or_else(|| self.accept_user.to_uppercase()),
                );
            } else {
                self.modal = Some(FAIL_TEXT.to_string());
            }
        } else if selector == self.selectors.roster_submit {
            let roster = self
                .filled
                .get(&self.selectors.roster_textarea)
                .cloned()
                .unwrap_or_default();
            self.roster_posts.push(roster);
        }
        Ok(())
    }

    fn wait_visible(&mut self, _element: ElementHandle, _timeout: Duration) -> WebResult<()> {
        Ok(())
    }

    fn read_text(&mut self, element: ElementHandle) -> WebResult<String> {
        let selector = self.selector_of(element);
        if selector == self.selectors.profile_anchor {
            let profile = self.profile.clone().unwrap_or_default();
            return Ok(format!("Profile ({profile})"));
        }
        if selector == self.selectors.modal_body_visible {
            return Ok(self.modal.clone().unwrap_or_default());
        }
        Ok(String::new())
    }
}

/// Key delivery fake that records typed text and accepts every key
pub struct RecordingKeys {
    texts: Arc<Mutex<Vec<String>>>,
}

impl RecordingKeys {
    pub fn new() -> Self {
        Self {
            texts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn texts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.texts)
    }
}

impl KeyDelivery for RecordingKeys {
    fn press_virtual_key(&self, _vk: u16) -> InputResult<()> {
        Ok(())
    }

    fn press_scan_code(&self, _scan: u16) -> InputResult<()> {
        Ok(())
    }

    fn press_legacy_key(&self, _vk: u16) -> InputResult<()> {
        Ok(())
    }

    fn send_text(&self, text: &str) -> InputResult<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn send_chord(&self, _modifier_vk: u16, _key_vk: u16) -> InputResult<()> {
        Ok(())
    }
}

/// Desktop fake with the game window present and foregrounded
pub struct GameDesk;

impl Desktop for GameDesk {
    fn list_windows(&self) -> WindowResult<Vec<(WindowHandle, String)>> {
        Ok(vec![(WindowHandle(42), "Chivalry 2".to_string())])
    }

    fn restore_and_raise(&self, _handle: WindowHandle) -> WindowResult<()> {
        Ok(())
    }

    fn set_foreground(&self, _handle: WindowHandle) -> WindowResult<()> {
        Ok(())
    }

    fn switch_to(&self, _handle: WindowHandle) -> WindowResult<()> {
        Ok(())
    }

    fn foreground_window(&self) -> Option<(WindowHandle, String)> {
        Some((WindowHandle(42), "Chivalry 2".to_string()))
    }
}

/// Observable state of a [`MemClipboard`]
#[derive(Debug, Default)]
pub struct MemClipState {
    pub current: String,
    pub writes: Vec<String>,
    pub read_count: usize,
    pub payload_after_reads: Option<(usize, String)>,
}

/// Clipboard fake; reads echo the last write until the scripted payload lands
pub struct MemClipboard {
    state: Arc<Mutex<MemClipState>>,
}

impl MemClipboard {
    pub fn new(initial: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(MemClipState {
                current: initial.to_string(),
                ..MemClipState::default()
            })),
        }
    }

    pub fn with_payload_after(self, reads: usize, payload: &str) -> Self {
        self.state.lock().unwrap().payload_after_reads = Some((reads, payload.to_string()));
        self
    }

    pub fn handle(&self) -> Arc<Mutex<MemClipState>> {
        Arc::clone(&self.state)
    }
}

impl Clipboard for MemClipboard {
    fn get_text(&mut self) -> ConsoleResult<String> {
        let mut state = self.state.lock().unwrap();
        state.read_count += 1;
        if let Some((after, payload)) = state.payload_after_reads.clone() {
            if state.read_count > after {
                state.current = payload;
            }
        }
        Ok(state.current.clone())
    }

    fn set_text(&mut self, text: &str) -> ConsoleResult<()> {
        let mut state = self.state.lock().unwrap();
        state.current = text.to_string();
        state.writes.push(text.to_string());
        Ok(())
    }
}

/// Console automation wired entirely to fakes, with zeroed delays
pub fn console_with(keys: RecordingKeys, clip: MemClipboard) -> ConsoleAutomation {
    ConsoleAutomation::new(
        ConsoleConfig::instant(),
        Box::new(keys),
        Box::new(GameDesk),
        Box::new(clip),
    )
}
