//! Built-in default values and the accessors that apply them.

use std::time::Duration;

use crate::config::types::{DeliveryConfig, LinuxConfig, MacosConfig, WindowsConfig};

/// Time for a freshly activated window to take keyboard focus.
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 500;

/// Pause after typing into one window before moving to the next.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 250;

pub const DEFAULT_MACOS_APPLICATION: &str = "Terminal";

pub const DEFAULT_LINUX_WINDOW_CLASS: &str = "Terminal";

/// Console window titles: Command Prompt (zh-TW and en) and PowerShell.
pub const DEFAULT_WINDOWS_TITLE_PATTERNS: &[&str] =
    &["命令提示字元", "Command Prompt", "Windows PowerShell"];

impl DeliveryConfig {
    pub fn focus_delay_ms(&self) -> u64 {
        self.focus_delay_ms.unwrap_or(DEFAULT_FOCUS_DELAY_MS)
    }

    pub fn submit_delay_ms(&self) -> u64 {
        self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms())
    }
}

impl MacosConfig {
    pub fn application(&self) -> &str {
        self.application
            .as_deref()
            .unwrap_or(DEFAULT_MACOS_APPLICATION)
    }
}

impl LinuxConfig {
    pub fn window_class(&self) -> &str {
        self.window_class
            .as_deref()
            .unwrap_or(DEFAULT_LINUX_WINDOW_CLASS)
    }
}

impl WindowsConfig {
    pub fn title_patterns(&self) -> Vec<String> {
        match &self.title_patterns {
            Some(patterns) => patterns.clone(),
            None => DEFAULT_WINDOWS_TITLE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}
