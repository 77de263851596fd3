use crate::broadcast::types::WindowHandle;
use crate::errors::OnallError;

#[derive(Debug, thiserror::Error)]
pub enum BroadcastError {
    #[error("Unsupported operating system: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("'{tool}' not found. Please install {tool}.")]
    ToolNotFound { tool: String },

    #[error("Failed to execute {tool}: {message}")]
    ToolExecution { tool: String, message: String },

    #[error("{tool} failed: {stderr}")]
    ToolFailed { tool: String, stderr: String },

    #[error("Window enumeration failed: {message}")]
    EnumerationFailed { message: String },

    #[error("Failed to activate terminal window {handle}: {message}")]
    FocusFailed {
        handle: WindowHandle,
        message: String,
    },

    #[error("Failed to send keystrokes: {message}")]
    InputFailed { message: String },
}

impl OnallError for BroadcastError {
    fn error_code(&self) -> &'static str {
        match self {
            BroadcastError::UnsupportedPlatform { .. } => "UNSUPPORTED_PLATFORM",
            BroadcastError::ToolNotFound { .. } => "TOOL_NOT_FOUND",
            BroadcastError::ToolExecution { .. } => "TOOL_EXECUTION_FAILED",
            BroadcastError::ToolFailed { .. } => "TOOL_FAILED",
            BroadcastError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            BroadcastError::FocusFailed { .. } => "WINDOW_FOCUS_FAILED",
            BroadcastError::InputFailed { .. } => "KEYSTROKE_INPUT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            BroadcastError::UnsupportedPlatform { .. } | BroadcastError::ToolNotFound { .. }
        )
    }
}
