//! Seams between the broadcast loop and the host platform.

use crate::broadcast::{
    errors::BroadcastError,
    types::{BroadcastCommand, DiscoveredWindow, WindowHandle},
};

/// One platform's way of finding terminal windows and typing into them.
///
/// Each supported platform (Terminal.app, xdotool, Win32 consoles) implements
/// this trait; the broadcast loop only talks to it.
pub trait PlatformStrategy {
    /// Canonical name of this strategy (e.g., "terminal_app").
    fn name(&self) -> &'static str;

    /// Display name (e.g., "Terminal.app").
    fn display_name(&self) -> &'static str;

    /// List terminal windows in the order the platform reports them.
    ///
    /// # Returns
    /// * `Ok(windows)` - May be empty; may contain unidentified entries
    /// * `Err(BroadcastError)` - Discovery itself failed (tool missing, API error)
    fn discover(&self) -> Result<Vec<DiscoveredWindow>, BroadcastError>;

    /// Activate one window, type `command` into it and submit it.
    ///
    /// Includes the strategy's settle delays, so consecutive calls are paced.
    fn deliver(
        &self,
        handle: WindowHandle,
        command: &BroadcastCommand,
    ) -> Result<(), BroadcastError>;
}

/// Captured result of one external tool run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for ToolOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs external programs (`osascript`, `xdotool`).
pub trait CommandRunner {
    /// Whether `program` can be found on `PATH`.
    fn is_available(&self, program: &str) -> bool;

    /// Run `program` with `args` and wait for it to exit.
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<ToolOutput>;
}

/// A visible top-level window and its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    pub title: String,
}

/// Native window manager access (Win32 on Windows).
pub trait WindowSystem {
    /// Visible top-level windows in enumeration order.
    fn visible_windows(&self) -> Result<Vec<WindowInfo>, BroadcastError>;

    /// Restore and bring a window to the foreground.
    fn activate(&self, handle: WindowHandle) -> Result<(), BroadcastError>;

    /// Type `text` into whatever window has keyboard focus.
    fn type_text(&self, text: &str) -> Result<(), BroadcastError>;

    /// Press and release Enter.
    fn press_enter(&self) -> Result<(), BroadcastError>;
}
