//! Configuration validation.

use crate::config::types::OnallConfig;
use crate::errors::ConfigError;

/// Upper bound for any configured delay.
pub const MAX_DELAY_MS: u64 = 10_000;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] for empty application or
/// window class names, empty title patterns, or delays above [`MAX_DELAY_MS`].
pub fn validate_config(config: &OnallConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("delivery.focus_delay_ms", config.delivery.focus_delay_ms),
        ("delivery.submit_delay_ms", config.delivery.submit_delay_ms),
    ] {
        if let Some(ms) = value
            && ms > MAX_DELAY_MS
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} is {}ms, maximum is {}ms", name, ms, MAX_DELAY_MS),
            });
        }
    }

    if config.macos.application().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "macos.application cannot be empty".to_string(),
        });
    }

    if config.linux.window_class().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "linux.window_class cannot be empty".to_string(),
        });
    }

    if config.windows.title_patterns().iter().any(|p| p.is_empty()) {
        return Err(ConfigError::InvalidConfiguration {
            message: "windows.title_patterns cannot contain empty patterns".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&OnallConfig::default()).is_ok());
    }

    #[test]
    fn test_delay_above_maximum_rejected() {
        let mut config = OnallConfig::default();
        config.delivery.submit_delay_ms = Some(60_000);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("delivery.submit_delay_ms"));
    }

    #[test]
    fn test_delay_at_maximum_accepted() {
        let mut config = OnallConfig::default();
        config.delivery.focus_delay_ms = Some(MAX_DELAY_MS);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_window_class_rejected() {
        let mut config = OnallConfig::default();
        config.linux.window_class = Some("  ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_application_rejected() {
        let mut config = OnallConfig::default();
        config.macos.application = Some(String::new());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_title_pattern_rejected() {
        let mut config = OnallConfig::default();
        config.windows.title_patterns = Some(vec!["PowerShell".to_string(), String::new()]);
        assert!(validate_config(&config).is_err());
    }
}
