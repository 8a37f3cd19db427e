//! Win32 window enumeration and foreground control

use tracing::{debug, warn};
use windows::Win32::Foundation::{BOOL, FALSE, HWND, LPARAM, TRUE};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Input::KeyboardAndMouse::AttachThreadInput;
use windows::Win32::UI::WindowsAndMessaging::{
    BringWindowToTop, EnumWindows, GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsIconic, IsWindowVisible, SW_RESTORE, SetForegroundWindow,
    ShowWindow, SwitchToThisWindow,
};

use crate::{Desktop, WindowError, WindowHandle, WindowResult};

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut core::ffi::c_void)
}

fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as isize)
}

fn window_title(hwnd: HWND) -> String {
    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0u16; len as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buf) };
    String::from_utf16_lossy(&buf[..copied.max(0) as usize])
}

/// Enumerate visible top-level windows with non-empty titles.
pub fn enumerate_top_level_windows() -> WindowResult<Vec<(WindowHandle, String)>> {
    unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
        let collected = unsafe { &mut *(lparam.0 as *mut Vec<(WindowHandle, String)>) };
        if unsafe { IsWindowVisible(hwnd) }.as_bool() {
            let title = window_title(hwnd);
            if !title.is_empty() {
                collected.push((from_hwnd(hwnd), title));
            }
        }
        TRUE
    }

    let mut collected: Vec<(WindowHandle, String)> = Vec::new();
    unsafe {
        EnumWindows(
            Some(enum_proc),
            LPARAM(&mut collected as *mut _ as isize),
        )
    }
    .map_err(|e| WindowError::Platform(format!("EnumWindows failed: {e}")))?;

    debug!(count = collected.len(), "enumerated top-level windows");
    Ok(collected)
}

/// Attaches the calling thread's input state to the foreground and target
/// window threads so SetForegroundWindow is permitted, detaching on drop.
/// Detach happens even when the foreground-set call fails.
struct ThreadInputAttachment {
    current: u32,
    attached: Vec<u32>,
}

impl ThreadInputAttachment {
    fn attach_for(target: HWND) -> Self {
        let current = unsafe { GetCurrentThreadId() };
        let mut attached = Vec::with_capacity(2);

        let mut try_attach = |thread: u32| {
            if thread != 0
                && thread != current
                && !attached.contains(&thread)
                && unsafe { AttachThreadInput(current, thread, TRUE) }.as_bool()
            {
                attached.push(thread);
            }
        };

        let foreground = unsafe { GetForegroundWindow() };
        if !foreground.is_invalid() {
            try_attach(unsafe { GetWindowThreadProcessId(foreground, None) });
        }
        try_attach(unsafe { GetWindowThreadProcessId(target, None) });

        Self { current, attached }
    }
}

impl Drop for ThreadInputAttachment {
    fn drop(&mut self) {
        for thread in self.attached.drain(..) {
            let _ = unsafe { AttachThreadInput(self.current, thread, FALSE) };
        }
    }
}

/// Desktop backed by the Win32 window manager
pub struct Win32Desktop;

impl Win32Desktop {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop for Win32Desktop {
    fn list_windows(&self) -> WindowResult<Vec<(WindowHandle, String)>> {
        enumerate_top_level_windows()
    }

    fn restore_and_raise(&self, handle: WindowHandle) -> WindowResult<()> {
        let hwnd = to_hwnd(handle);
        unsafe {
            if IsIconic(hwnd).as_bool() {
                let _ = ShowWindow(hwnd, SW_RESTORE);
            }
            if let Err(e) = BringWindowToTop(hwnd) {
                // Not fatal; the verification poll decides success.
                warn!(window = %handle, error = %e, "BringWindowToTop failed");
            }
        }
        Ok(())
    }

    fn set_foreground(&self, handle: WindowHandle) -> WindowResult<()> {
        let hwnd = to_hwnd(handle);
        let _attachment = ThreadInputAttachment::attach_for(hwnd);
        if unsafe { SetForegroundWindow(hwnd) }.as_bool() {
            Ok(())
        } else {
            Err(WindowError::Platform(
                "SetForegroundWindow refused".to_string(),
            ))
        }
    }

    fn switch_to(&self, handle: WindowHandle) -> WindowResult<()> {
        unsafe { SwitchToThisWindow(to_hwnd(handle), TRUE) };
        Ok(())
    }

    fn foreground_window(&self) -> Option<(WindowHandle, String)> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            return None;
        }
        Some((from_hwnd(hwnd), window_title(hwnd)))
    }
}
