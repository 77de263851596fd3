//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.onall/config.toml` (global user preferences)
//! 3. **Project config** - `./.onall/config.toml` (directory-specific overrides)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{DeliveryConfig, LinuxConfig, MacosConfig, OnallConfig, WindowsConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".onall";
const CONFIG_FILE: &str = "config.toml";

/// Path of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Path of the project config file relative to `dir`.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.onall/config.toml`)
/// 3. Project config (`./.onall/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<OnallConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(user_path) = user_config_path() {
        paths.push(user_path);
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(project_config_path(&cwd));
    }
    load_from_paths(&paths)
}

/// Load and merge config files in order, later files taking precedence.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<OnallConfig, ConfigError> {
    let mut config = OnallConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => {
                debug!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(e) if e.is_not_found() => {
                debug!(event = "core.config.file_missing", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<OnallConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ConfigReadError {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: OnallConfig, override_config: OnallConfig) -> OnallConfig {
    OnallConfig {
        delivery: DeliveryConfig {
            focus_delay_ms: override_config
                .delivery
                .focus_delay_ms
                .or(base.delivery.focus_delay_ms),
            submit_delay_ms: override_config
                .delivery
                .submit_delay_ms
                .or(base.delivery.submit_delay_ms),
        },
        macos: MacosConfig {
            application: override_config.macos.application.or(base.macos.application),
        },
        linux: LinuxConfig {
            window_class: override_config
                .linux
                .window_class
                .or(base.linux.window_class),
        },
        windows: WindowsConfig {
            title_patterns: override_config
                .windows
                .title_patterns
                .or(base.windows.title_patterns),
        },
    }
}
