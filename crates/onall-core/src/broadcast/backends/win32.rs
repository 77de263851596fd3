//! Win32 implementation of [`WindowSystem`].

use std::mem::size_of;

use tracing::{debug, warn};
use windows_sys::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_KEYUP,
    KEYEVENTF_UNICODE, SendInput, VK_RETURN,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible, SW_SHOWNORMAL,
    SetForegroundWindow, ShowWindow,
};

use crate::broadcast::errors::BroadcastError;
use crate::broadcast::traits::{WindowInfo, WindowSystem};
use crate::broadcast::types::WindowHandle;

/// Desktop window access through user32.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowSystem;

// SAFETY: called by EnumWindows with the `lparam` passed in `visible_windows`,
// which is a live `&mut Vec<WindowInfo>` for the whole enumeration.
unsafe extern "system" fn collect_visible_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let windows = unsafe { &mut *(lparam as *mut Vec<WindowInfo>) };

    if unsafe { IsWindowVisible(hwnd) } == 0 {
        return 1;
    }

    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len <= 0 {
        return 1;
    }

    let mut buf = vec![0u16; len as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32) };
    if copied > 0 {
        windows.push(WindowInfo {
            handle: WindowHandle::new(hwnd as u64),
            title: String::from_utf16_lossy(&buf[..copied as usize]),
        });
    }

    1
}

fn key_input(vk: u16, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn send_inputs(inputs: &[INPUT]) -> Result<(), BroadcastError> {
    if inputs.is_empty() {
        return Ok(());
    }

    let count = inputs.len() as u32;
    let sent = unsafe { SendInput(count, inputs.as_ptr(), size_of::<INPUT>() as i32) };
    if sent as usize != inputs.len() {
        let os_error = std::io::Error::last_os_error();
        warn!(
            event = "core.broadcast.send_input_failed",
            expected = inputs.len(),
            sent = sent,
            error = %os_error
        );
        return Err(BroadcastError::InputFailed {
            message: format!(
                "SendInput injected {} of {} events: {}",
                sent,
                inputs.len(),
                os_error
            ),
        });
    }
    Ok(())
}

impl WindowSystem for Win32WindowSystem {
    fn visible_windows(&self) -> Result<Vec<WindowInfo>, BroadcastError> {
        let mut windows: Vec<WindowInfo> = Vec::new();

        let ok = unsafe {
            EnumWindows(
                Some(collect_visible_window),
                &mut windows as *mut Vec<WindowInfo> as LPARAM,
            )
        };
        if ok == 0 {
            return Err(BroadcastError::EnumerationFailed {
                message: std::io::Error::last_os_error().to_string(),
            });
        }

        debug!(
            event = "core.broadcast.win32_windows_enumerated",
            count = windows.len()
        );
        Ok(windows)
    }

    fn activate(&self, handle: WindowHandle) -> Result<(), BroadcastError> {
        let hwnd = handle.id() as HWND;

        // ShowWindow returns the previous visibility, not an error status.
        unsafe { ShowWindow(hwnd, SW_SHOWNORMAL) };

        if unsafe { SetForegroundWindow(hwnd) } == 0 {
            return Err(BroadcastError::FocusFailed {
                handle,
                message: "SetForegroundWindow was refused".to_string(),
            });
        }
        Ok(())
    }

    fn type_text(&self, text: &str) -> Result<(), BroadcastError> {
        let inputs: Vec<INPUT> = text
            .encode_utf16()
            .flat_map(|unit| {
                [
                    key_input(0, unit, KEYEVENTF_UNICODE),
                    key_input(0, unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP),
                ]
            })
            .collect();
        send_inputs(&inputs)
    }

    fn press_enter(&self) -> Result<(), BroadcastError> {
        send_inputs(&[
            key_input(VK_RETURN, 0, 0),
            key_input(VK_RETURN, 0, KEYEVENTF_KEYUP),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_windows_does_not_panic() {
        // Result depends on the desktop session the tests run in.
        let _result = Win32WindowSystem.visible_windows();
    }

    #[test]
    fn test_send_no_inputs_is_noop() {
        assert!(send_inputs(&[]).is_ok());
    }

    #[test]
    fn test_key_input_carries_unicode_unit() {
        let input = key_input(0, 'A' as u16, KEYEVENTF_UNICODE);
        assert_eq!(input.r#type, INPUT_KEYBOARD);
        let ki = unsafe { input.Anonymous.ki };
        assert_eq!(ki.wScan, 'A' as u16);
        assert_eq!(ki.dwFlags, KEYEVENTF_UNICODE);
    }
}
