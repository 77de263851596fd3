//! # Configuration System
//!
//! Hierarchical TOML configuration for onall.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.onall/config.toml` (global user preferences)
//! 3. **Project config** - `./.onall/config.toml` (directory-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.onall/config.toml
//! [delivery]
//! focus_delay_ms = 750
//!
//! [linux]
//! window_class = "gnome-terminal-server"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use onall_core::config::OnallConfig;
//!
//! fn example() -> Result<(), onall_core::errors::ConfigError> {
//!     let config = OnallConfig::load_hierarchy()?;
//!     let delay = config.delivery.focus_delay();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{DeliveryConfig, LinuxConfig, MacosConfig, OnallConfig, WindowsConfig};
pub use validation::validate_config;

impl OnallConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
