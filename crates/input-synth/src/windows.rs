//! Windows key synthesis using SendInput / keybd_event

use std::mem::size_of;

use tracing::{debug, trace};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP,
    KEYEVENTF_SCANCODE, KEYEVENTF_UNICODE, MAPVK_VK_TO_VSC, MapVirtualKeyW, SendInput, VIRTUAL_KEY,
    keybd_event,
};

use crate::{InputDeliveryError, InputResult, KeyDelivery};

/// Key synthesis through the Win32 input stream
pub struct WindowsKeySynth;

impl WindowsKeySynth {
    pub fn new() -> InputResult<Self> {
        debug!("Initializing Windows key synthesis");
        Ok(Self)
    }

    /// Map a virtual key to its hardware scan code for the active layout.
    fn scan_code_for(vk: u16) -> InputResult<u16> {
        let scan = unsafe { MapVirtualKeyW(vk as u32, MAPVK_VK_TO_VSC) };
        if scan == 0 {
            return Err(InputDeliveryError::NoScanCodeMapping(vk));
        }
        Ok(scan as u16)
    }

    fn keyboard_input(vk: u16, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
        INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(vk),
                    wScan: scan,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        }
    }

    /// Deliver a batch of events, failing if the OS accepts fewer than asked.
    fn deliver(inputs: &[INPUT], attempted: &str) -> InputResult<()> {
        let requested = inputs.len() as u32;
        let accepted = unsafe { SendInput(inputs, size_of::<INPUT>() as i32) };
        trace!(attempted, accepted, requested, "SendInput");
        if accepted != requested {
            return Err(InputDeliveryError::Rejected {
                attempted: attempted.to_string(),
                accepted,
                requested,
            });
        }
        Ok(())
    }
}

impl KeyDelivery for WindowsKeySynth {
    fn press_virtual_key(&self, vk: u16) -> InputResult<()> {
        let scan = Self::scan_code_for(vk)?;
        let inputs = [
            Self::keyboard_input(vk, scan, KEYBD_EVENT_FLAGS(0)),
            Self::keyboard_input(vk, scan, KEYEVENTF_KEYUP),
        ];
        Self::deliver(&inputs, &format!("VK 0x{vk:02X}"))
    }

    fn press_scan_code(&self, scan: u16) -> InputResult<()> {
        let inputs = [
            Self::keyboard_input(0, scan, KEYEVENTF_SCANCODE),
            Self::keyboard_input(0, scan, KEYEVENTF_SCANCODE | KEYEVENTF_KEYUP),
        ];
        Self::deliver(&inputs, &format!("scan 0x{scan:02X}"))
    }

    fn press_legacy_key(&self, vk: u16) -> InputResult<()> {
        // keybd_event reports nothing back; the distinct delivery path is the
        // point, some targets consume it when SendInput is filtered out.
        let scan = unsafe { MapVirtualKeyW(vk as u32, MAPVK_VK_TO_VSC) } as u8;
        unsafe {
            keybd_event(vk as u8, scan, KEYBD_EVENT_FLAGS(0), 0);
            keybd_event(vk as u8, scan, KEYEVENTF_KEYUP, 0);
        }
        Ok(())
    }

    fn send_text(&self, text: &str) -> InputResult<()> {
        let units: Vec<u16> = text.encode_utf16().collect();
        if units.is_empty() {
            return Ok(());
        }

        let mut inputs = Vec::with_capacity(units.len() * 2);
        for unit in units {
            inputs.push(Self::keyboard_input(0, unit, KEYEVENTF_UNICODE));
            inputs.push(Self::keyboard_input(0, unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP));
        }
        Self::deliver(&inputs, "unicode text")
    }

    fn send_chord(&self, modifier_vk: u16, key_vk: u16) -> InputResult<()> {
        let modifier_scan = Self::scan_code_for(modifier_vk)?;
        let key_scan = Self::scan_code_for(key_vk)?;

        // Strict order: modifier down, key down, key up, modifier up.
        let inputs = [
            Self::keyboard_input(0, modifier_scan, KEYEVENTF_SCANCODE),
            Self::keyboard_input(0, key_scan, KEYEVENTF_SCANCODE),
            Self::keyboard_input(0, key_scan, KEYEVENTF_SCANCODE | KEYEVENTF_KEYUP),
            Self::keyboard_input(0, modifier_scan, KEYEVENTF_SCANCODE | KEYEVENTF_KEYUP),
        ];
        Self::deliver(
            &inputs,
            &format!("chord 0x{modifier_vk:02X}+0x{key_vk:02X}"),
        )
    }
}
