//! Terminal.app strategy (macOS).

use tracing::debug;

use crate::broadcast::common::applescript::{do_script_lines, parse_window_ids, window_ids_script};
use crate::broadcast::common::runner::{SystemRunner, pause, run_tool_checked};
use crate::broadcast::errors::BroadcastError;
use crate::broadcast::traits::{CommandRunner, PlatformStrategy};
use crate::broadcast::types::{BroadcastCommand, DeliveryTiming, DiscoveredWindow, WindowHandle};

const OSASCRIPT: &str = "osascript";

/// Drives a scriptable terminal through `osascript`.
///
/// A single `do script ... in window id` call both activates the window and
/// submits the command, so only the focus delay applies.
pub struct TerminalAppStrategy<R: CommandRunner = SystemRunner> {
    runner: R,
    application: String,
    timing: DeliveryTiming,
}

impl<R: CommandRunner> TerminalAppStrategy<R> {
    pub fn new(runner: R, application: impl Into<String>, timing: DeliveryTiming) -> Self {
        Self {
            runner,
            application: application.into(),
            timing,
        }
    }
}

impl<R: CommandRunner> PlatformStrategy for TerminalAppStrategy<R> {
    fn name(&self) -> &'static str {
        "terminal_app"
    }

    fn display_name(&self) -> &'static str {
        "Terminal.app"
    }

    fn discover(&self) -> Result<Vec<DiscoveredWindow>, BroadcastError> {
        let script = window_ids_script(&self.application);
        let output = run_tool_checked(&self.runner, OSASCRIPT, &["-e", &script])?;

        let windows = parse_window_ids(&output.stdout);
        debug!(
            event = "core.broadcast.applescript_windows_listed",
            application = %self.application,
            count = windows.len()
        );
        Ok(windows)
    }

    fn deliver(
        &self,
        handle: WindowHandle,
        command: &BroadcastCommand,
    ) -> Result<(), BroadcastError> {
        let lines = do_script_lines(&self.application);
        let window_id = handle.to_string();

        let mut args: Vec<&str> = Vec::with_capacity(lines.len() * 2 + 2);
        for line in &lines {
            args.push("-e");
            args.push(line);
        }
        // The numeric id goes first so osascript never mistakes a command
        // starting with '-' for one of its own options.
        args.push(&window_id);
        args.push(command.as_str());

        run_tool_checked(&self.runner, OSASCRIPT, &args)?;
        pause(self.timing.focus_delay);
        Ok(())
    }
}
