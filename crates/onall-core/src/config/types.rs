//! Configuration type definitions for onall.
//!
//! These types are serialized/deserialized from TOML config files.
//! Every field is optional so that project config can override only what
//! it sets; accessors in [`super::defaults`] fill in the built-in values.
//!
//! # Example Configuration
//!
//! ```toml
//! [delivery]
//! focus_delay_ms = 500
//! submit_delay_ms = 250
//!
//! [macos]
//! application = "Terminal"
//!
//! [linux]
//! window_class = "Terminal"
//!
//! [windows]
//! title_patterns = ["Command Prompt", "Windows PowerShell"]
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.onall/config.toml`
/// 2. Project config: `./.onall/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OnallConfig {
    /// Timing of window activation and command submission
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// Terminal.app scripting settings
    #[serde(default)]
    pub macos: MacosConfig,

    /// xdotool window search settings
    #[serde(default)]
    pub linux: LinuxConfig,

    /// Win32 window enumeration settings
    #[serde(default)]
    pub windows: WindowsConfig,
}

/// Delivery timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Wait after activating a window so focus can settle.
    /// Default: 500ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_delay_ms: Option<u64>,

    /// Wait after the command has been submitted (Linux and Windows).
    /// Default: 250ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MacosConfig {
    /// Scriptable terminal application queried for window ids.
    /// Default: "Terminal".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LinuxConfig {
    /// X11 window class passed to `xdotool search --class`.
    /// Default: "Terminal".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WindowsConfig {
    /// A visible window is a terminal if its title contains any of these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_patterns: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onall_config_serialization() {
        let config = OnallConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: OnallConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_delivery_config_serialization() {
        let config = DeliveryConfig {
            focus_delay_ms: Some(800),
            submit_delay_ms: None,
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("focus_delay_ms = 800"));
        assert!(!toml_str.contains("submit_delay_ms"));
    }

    #[test]
    fn test_partial_config_deserialize() {
        let toml_str = r#"
[linux]
window_class = "kitty"

[windows]
title_patterns = ["pwsh"]
"#;
        let config: OnallConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.linux.window_class, Some("kitty".to_string()));
        assert_eq!(
            config.windows.title_patterns,
            Some(vec!["pwsh".to_string()])
        );
        assert!(config.macos.application.is_none());
        assert!(config.delivery.focus_delay_ms.is_none());
    }
}
