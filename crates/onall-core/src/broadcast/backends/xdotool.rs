//! xdotool strategy (Linux, X11).

use tracing::debug;

use crate::broadcast::common::runner::{SystemRunner, pause, run_tool, run_tool_checked};
use crate::broadcast::errors::BroadcastError;
use crate::broadcast::traits::{CommandRunner, PlatformStrategy};
use crate::broadcast::types::{BroadcastCommand, DeliveryTiming, DiscoveredWindow, WindowHandle};

const XDOTOOL: &str = "xdotool";

/// `xdotool search` exits with this status when nothing matched.
const XDOTOOL_NO_MATCH: i32 = 1;

/// Finds windows by X11 class and types into them with xdotool.
pub struct XdotoolStrategy<R: CommandRunner = SystemRunner> {
    runner: R,
    window_class: String,
    timing: DeliveryTiming,
}

impl<R: CommandRunner> XdotoolStrategy<R> {
    pub fn new(runner: R, window_class: impl Into<String>, timing: DeliveryTiming) -> Self {
        Self {
            runner,
            window_class: window_class.into(),
            timing,
        }
    }
}

impl<R: CommandRunner> PlatformStrategy for XdotoolStrategy<R> {
    fn name(&self) -> &'static str {
        "xdotool"
    }

    fn display_name(&self) -> &'static str {
        "xdotool (X11)"
    }

    fn discover(&self) -> Result<Vec<DiscoveredWindow>, BroadcastError> {
        if !self.runner.is_available(XDOTOOL) {
            return Err(BroadcastError::ToolNotFound {
                tool: XDOTOOL.to_string(),
            });
        }

        let output = run_tool(
            &self.runner,
            XDOTOOL,
            &["search", "--class", &self.window_class],
        )?;

        if !output.success {
            if output.code == Some(XDOTOOL_NO_MATCH)
                && output.stdout.trim().is_empty()
                && output.stderr.trim().is_empty()
            {
                debug!(
                    event = "core.broadcast.xdotool_no_match",
                    window_class = %self.window_class
                );
                return Ok(Vec::new());
            }
            return Err(BroadcastError::ToolFailed {
                tool: XDOTOOL.to_string(),
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output
            .stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(DiscoveredWindow::from_raw)
            .collect())
    }

    fn deliver(
        &self,
        handle: WindowHandle,
        command: &BroadcastCommand,
    ) -> Result<(), BroadcastError> {
        let window_id = handle.to_string();

        let activated = run_tool_checked(&self.runner, XDOTOOL, &["windowactivate", &window_id]);
        if let Err(e) = activated {
            return Err(BroadcastError::FocusFailed {
                handle,
                message: e.to_string(),
            });
        }
        pause(self.timing.focus_delay);

        run_tool_checked(&self.runner, XDOTOOL, &["type", "--", command.as_str()])?;
        run_tool_checked(&self.runner, XDOTOOL, &["key", "Return"])?;
        pause(self.timing.submit_delay);

        Ok(())
    }
}
