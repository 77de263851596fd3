use std::error::Error;

/// Base trait for all application errors
pub trait OnallError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ConfigError {
    /// Whether this error only means the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigReadError { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl OnallError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigReadError { .. } => "CONFIG_READ_ERROR",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error() {
        let error = ConfigError::ConfigParseError {
            path: "/tmp/config.toml".to_string(),
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file '/tmp/config.toml': invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_config_read_error_not_found() {
        let error = ConfigError::ConfigReadError {
            path: "/nonexistent/config.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.is_not_found());
        assert!(!error.is_user_error());
        assert_eq!(error.error_code(), "CONFIG_READ_ERROR");
    }

    #[test]
    fn test_config_read_error_permission_denied_is_not_not_found() {
        let error = ConfigError::ConfigReadError {
            path: "/root/config.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!error.is_not_found());
    }
}
