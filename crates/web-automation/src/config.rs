//! Panel URLs and the stable CSS selector contract

/// Target web application endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub base_url: String,
    pub login_url: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://panel.wardenhq.net".to_string(),
            login_url: "https://panel.wardenhq.net/auth/login".to_string(),
        }
    }
}

/// CSS selectors the panel markup guarantees stable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub profile_anchor: String,
    pub login_username: String,
    pub login_password: String,
    pub login_submit: String,
    pub modal_body_visible: String,
    pub modal_close_visible: String,
    pub roster_textarea: String,
    pub roster_submit: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            profile_anchor: "a#profile".to_string(),
            login_username: "#login-field-username".to_string(),
            login_password: "#login-field-password".to_string(),
            login_submit: "button[type='submit']".to_string(),
            modal_body_visible: "div.modal.show div.modal-body".to_string(),
            modal_close_visible: "div.modal.show button.btn.btn-secondary".to_string(),
            roster_textarea: "#listplayerdata".to_string(),
            roster_submit: "form#post-form button[type='submit']".to_string(),
        }
    }
}
