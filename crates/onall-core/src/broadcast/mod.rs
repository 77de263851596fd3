pub mod backends;
pub mod common;
pub mod errors;
pub mod handler;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export commonly used types and functions
pub use errors::BroadcastError;
pub use handler::{broadcast, broadcast_on, broadcast_with, discover_windows};
pub use registry::strategy_for;
pub use traits::{CommandRunner, PlatformStrategy, ToolOutput, WindowInfo, WindowSystem};
pub use types::{
    BroadcastCommand, BroadcastOutcome, BroadcastReport, DeliveryTiming, DiscoveredWindow,
    OsProfile, WindowHandle, WindowResult,
};
