//! onall-core: run one command in every open terminal window
//!
//! This library finds the terminal windows on the host (Terminal.app on
//! macOS, xdotool on X11 Linux, console windows on Windows) and types a
//! command into each of them. It is used by the `onall` CLI.
//!
//! # Main Entry Points
//!
//! - [`broadcast`] - Discover terminal windows and deliver a command
//! - [`config`] - Configuration management

pub mod broadcast;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use broadcast::{
    BroadcastCommand, BroadcastError, BroadcastOutcome, BroadcastReport, DiscoveredWindow,
    OsProfile, WindowHandle,
};
pub use config::OnallConfig;

// Re-export handler module as the primary API
pub use broadcast::handler as broadcast_ops;

// Re-export logging initialization
pub use logging::init_logging;
