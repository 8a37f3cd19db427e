//! Clipboard-mediated command/result bridge
//!
//! The roster workflow needs output the game writes back to the clipboard.
//! A unique marker token is planted as the change-detection baseline, the
//! command is executed through the clipboard-paste variant, and the clipboard
//! is polled until its content differs from both the marker and the
//! pre-command content.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};
use uuid::Uuid;

use crate::{ClipboardSnapshot, ConsoleAutomation, ConsoleError, ConsoleResult, DeliveryStrategy};

/// Polling knobs for the clipboard rendezvous
#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
            timeout: Duration::from_secs(10),
        }
    }
}

/// One-shot capture of console output through the OS clipboard
pub struct ClipboardBridge<'a> {
    automation: &'a mut ConsoleAutomation,
    config: BridgeConfig,
}

impl<'a> ClipboardBridge<'a> {
    pub fn new(automation: &'a mut ConsoleAutomation) -> Self {
        Self {
            automation,
            config: BridgeConfig::default(),
        }
    }

    pub fn with_config(automation: &'a mut ConsoleAutomation, config: BridgeConfig) -> Self {
        Self { automation, config }
    }

    /// Execute `command` and wait for the game to answer via the clipboard.
    ///
    /// On timeout the pre-command clipboard content is restored and
    /// [`ConsoleError::CaptureTimeout`] is returned: everything executed, the
    /// game just never replied.
    pub fn capture(&mut self, command: &str) -> ConsoleResult<String> {
        let prior = ClipboardSnapshot::capture(self.automation.clipboard.as_mut());
        let marker = format!("warden:{}", Uuid::new_v4());
        if let Err(e) = self.automation.clipboard.set_text(&marker) {
            prior.restore(self.automation.clipboard.as_mut());
            return Err(e);
        }
        debug!(command, "bridge armed, executing capture command");

        if let Err(e) =
            self.automation
                .execute(command, DeliveryStrategy::ClipboardPaste, false)
        {
            prior.restore(self.automation.clipboard.as_mut());
            return Err(e);
        }

        // The paste variant left the command text in the clipboard; re-arm
        // the marker so command text is never mistaken for output.
        if let Err(e) = self.automation.clipboard.set_text(&marker) {
            prior.restore(self.automation.clipboard.as_mut());
            return Err(e);
        }

        let started = Instant::now();
        loop {
            let current = match self.automation.clipboard.get_text() {
                Ok(text) => text,
                Err(e) => {
                    prior.restore(self.automation.clipboard.as_mut());
                    return Err(e);
                }
            };
            let changed =
                current != marker && current != prior.text() && !current.trim().is_empty();
            if changed {
                info!(chars = current.len(), "captured console output from clipboard");
                return Ok(current);
            }

            if started.elapsed() >= self.config.timeout {
                prior.restore(self.automation.clipboard.as_mut());
                return Err(ConsoleError::CaptureTimeout {
                    waited: self.config.timeout,
                });
            }
            thread::sleep(self.config.poll_interval);
        }
    }
}
