//! Strategy selection for the host platform.

use tracing::{debug, warn};

use super::backends::{TerminalAppStrategy, XdotoolStrategy};
use super::common::runner::SystemRunner;
use super::traits::PlatformStrategy;
use super::types::{DeliveryTiming, OsProfile};
use crate::config::OnallConfig;

/// Build the strategy for `profile`, configured from `config`.
///
/// Returns None for unsupported platforms, and for the Windows profile on
/// builds without Win32 support.
pub fn strategy_for(
    profile: &OsProfile,
    config: &OnallConfig,
) -> Option<Box<dyn PlatformStrategy>> {
    let timing = DeliveryTiming::from(&config.delivery);

    let strategy: Box<dyn PlatformStrategy> = match profile {
        OsProfile::MacOs => Box::new(TerminalAppStrategy::new(
            SystemRunner,
            config.macos.application(),
            timing,
        )),
        OsProfile::Linux => Box::new(XdotoolStrategy::new(
            SystemRunner,
            config.linux.window_class(),
            timing,
        )),
        OsProfile::Windows => windows_strategy(config, timing)?,
        OsProfile::Unsupported(platform) => {
            warn!(
                event = "core.broadcast.platform_not_supported",
                platform = %platform
            );
            return None;
        }
    };

    debug!(
        event = "core.broadcast.strategy_selected",
        profile = %profile,
        strategy = strategy.name()
    );
    Some(strategy)
}

#[cfg(windows)]
fn windows_strategy(
    config: &OnallConfig,
    timing: DeliveryTiming,
) -> Option<Box<dyn PlatformStrategy>> {
    use super::backends::{ConsoleStrategy, Win32WindowSystem};

    Some(Box::new(ConsoleStrategy::new(
        Win32WindowSystem,
        config.windows.title_patterns(),
        timing,
    )))
}

#[cfg(not(windows))]
fn windows_strategy(
    _config: &OnallConfig,
    _timing: DeliveryTiming,
) -> Option<Box<dyn PlatformStrategy>> {
    warn!(
        event = "core.broadcast.platform_not_supported",
        platform = "windows",
        message = "Built without Win32 support"
    );
    None
}
