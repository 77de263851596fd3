//! External tool execution.

use std::io::ErrorKind;
use std::process::Command;
use std::time::Duration;

use tracing::debug;

use crate::broadcast::errors::BroadcastError;
use crate::broadcast::traits::{CommandRunner, ToolOutput};

/// Runs real processes, looking programs up on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<ToolOutput> {
        Command::new(program)
            .args(args)
            .output()
            .map(ToolOutput::from)
    }
}

/// Run a tool, mapping spawn failures to [`BroadcastError`].
///
/// The exit status is not checked; see [`run_tool_checked`].
pub fn run_tool<R: CommandRunner + ?Sized>(
    runner: &R,
    tool: &str,
    args: &[&str],
) -> Result<ToolOutput, BroadcastError> {
    debug!(event = "core.broadcast.tool_started", tool = tool, args = ?args);

    runner.run(tool, args).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BroadcastError::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            BroadcastError::ToolExecution {
                tool: tool.to_string(),
                message: e.to_string(),
            }
        }
    })
}

/// Run a tool and fail with [`BroadcastError::ToolFailed`] on a non-zero exit.
pub fn run_tool_checked<R: CommandRunner + ?Sized>(
    runner: &R,
    tool: &str,
    args: &[&str],
) -> Result<ToolOutput, BroadcastError> {
    let output = run_tool(runner, tool, args)?;

    if !output.success {
        return Err(BroadcastError::ToolFailed {
            tool: tool.to_string(),
            stderr: output.stderr.trim().to_string(),
        });
    }

    debug!(event = "core.broadcast.tool_completed", tool = tool);
    Ok(output)
}

/// Sleep for `delay` unless it is zero.
pub fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::common::testing::FakeRunner;

    #[test]
    fn test_run_tool_maps_not_found() {
        let runner = FakeRunner::new(|_, _| Err(std::io::Error::from(ErrorKind::NotFound)));
        let err = run_tool(&runner, "xdotool", &["search"]).unwrap_err();
        assert!(matches!(err, BroadcastError::ToolNotFound { tool } if tool == "xdotool"));
    }

    #[test]
    fn test_run_tool_maps_other_io_errors() {
        let runner = FakeRunner::new(|_, _| {
            Err(std::io::Error::from(ErrorKind::PermissionDenied))
        });
        let err = run_tool(&runner, "osascript", &[]).unwrap_err();
        assert!(matches!(err, BroadcastError::ToolExecution { .. }));
    }

    #[test]
    fn test_run_tool_checked_rejects_failure() {
        let runner = FakeRunner::new(|_, _| Ok(FakeRunner::failure(1, "  bad window  ")));
        let err = run_tool_checked(&runner, "xdotool", &["windowactivate", "1"]).unwrap_err();
        assert_eq!(err.to_string(), "xdotool failed: bad window");
    }

    #[test]
    fn test_run_tool_checked_passes_output_through() {
        let runner = FakeRunner::new(|_, _| Ok(FakeRunner::success("123\n")));
        let output = run_tool_checked(&runner, "xdotool", &["search"]).unwrap();
        assert_eq!(output.stdout, "123\n");
        assert_eq!(runner.calls(), vec![vec!["xdotool", "search"]]);
    }

    #[test]
    fn test_system_runner_reports_missing_program() {
        let runner = SystemRunner;
        assert!(!runner.is_available("onall-definitely-not-a-real-program"));
        let err = run_tool(&runner, "onall-definitely-not-a-real-program", &[]).unwrap_err();
        assert!(matches!(err, BroadcastError::ToolNotFound { .. }));
    }

    #[test]
    fn test_pause_zero_returns_immediately() {
        pause(Duration::ZERO);
    }
}
