//! Per-user browser profile directory layout

use std::env;
use std::path::PathBuf;

use shared_model::BrowserKind;

/// Filesystem-safe directory name for a panel username.
///
/// Every character outside `[A-Za-z0-9._-]` becomes `_`; a name that ends up
/// empty falls back to `"default"`.
pub fn safe_dirname(value: &str) -> String {
    let cleaned: String = value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "default".to_string()
    } else {
        cleaned
    }
}

/// Root of the application's on-disk state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Platform-conventional data root: `%LOCALAPPDATA%\Warden` on Windows,
    /// `$HOME/Warden` elsewhere.
    pub fn default_for_os() -> Self {
        let var = if cfg!(target_os = "windows") {
            "LOCALAPPDATA"
        } else {
            "HOME"
        };
        let root = env::var_os(var)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_dir: root.join("Warden"),
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Persistent browser profile directory for one (browser, username) pair.
    ///
    /// Keyed per user so sessions never leak between operator accounts.
    pub fn profile_dir(&self, browser: BrowserKind, username: &str) -> PathBuf {
        self.data_dir
            .join("browser_profiles")
            .join(browser.as_str())
            .join(safe_dirname(username))
    }
}
