use tracing::{info, warn};

use crate::broadcast::errors::BroadcastError;
use crate::broadcast::registry::strategy_for;
use crate::broadcast::traits::PlatformStrategy;
use crate::broadcast::types::{
    BroadcastCommand, BroadcastOutcome, BroadcastReport, DiscoveredWindow, OsProfile, WindowResult,
};
use crate::config::OnallConfig;

/// Send `command` to every terminal window on this machine.
///
/// Never fails: discovery problems, per-window failures and unsupported
/// platforms all end up in the returned report.
pub fn broadcast(command: &BroadcastCommand, config: &OnallConfig) -> BroadcastReport {
    broadcast_on(OsProfile::detect(), command, config)
}

/// [`broadcast`] for an explicit platform profile.
pub fn broadcast_on(
    profile: OsProfile,
    command: &BroadcastCommand,
    config: &OnallConfig,
) -> BroadcastReport {
    info!(
        event = "core.broadcast.started",
        profile = %profile,
        command = command.as_str()
    );

    match strategy_for(&profile, config) {
        Some(strategy) => broadcast_with(strategy.as_ref(), profile, command),
        None => {
            let platform = profile.to_string();
            BroadcastReport::new(profile, command, BroadcastOutcome::Unsupported { platform })
        }
    }
}

/// Discover windows with `strategy` and deliver to each one in order.
///
/// A delivery failure is recorded and the sweep moves on to the next window.
pub fn broadcast_with(
    strategy: &dyn PlatformStrategy,
    profile: OsProfile,
    command: &BroadcastCommand,
) -> BroadcastReport {
    let discovered = match strategy.discover() {
        Ok(windows) => windows,
        Err(e) => {
            warn!(
                event = "core.broadcast.discovery_failed",
                strategy = strategy.name(),
                error = %e
            );
            return BroadcastReport::new(
                profile,
                command,
                BroadcastOutcome::DiscoveryFailed {
                    error: e.to_string(),
                },
            );
        }
    };

    if discovered.is_empty() {
        info!(
            event = "core.broadcast.no_windows",
            strategy = strategy.name()
        );
        return BroadcastReport::new(profile, command, BroadcastOutcome::NoWindows);
    }

    info!(
        event = "core.broadcast.windows_discovered",
        strategy = strategy.name(),
        count = discovered.len()
    );

    let mut report = BroadcastReport::new(profile, command, BroadcastOutcome::Completed);

    for window in discovered {
        let result = match window {
            DiscoveredWindow::Unidentified { raw } => {
                warn!(
                    event = "core.broadcast.window_skipped",
                    strategy = strategy.name(),
                    raw = %raw
                );
                WindowResult::Skipped { raw }
            }
            DiscoveredWindow::Resolved { handle } => match strategy.deliver(handle, command) {
                Ok(()) => {
                    info!(
                        event = "core.broadcast.delivery_completed",
                        strategy = strategy.name(),
                        window = %handle
                    );
                    WindowResult::Delivered { handle }
                }
                Err(e) => {
                    warn!(
                        event = "core.broadcast.delivery_failed",
                        strategy = strategy.name(),
                        window = %handle,
                        error = %e
                    );
                    WindowResult::Failed {
                        handle,
                        error: e.to_string(),
                    }
                }
            },
        };
        report.windows.push(result);
    }

    info!(
        event = "core.broadcast.completed",
        strategy = strategy.name(),
        delivered = report.delivered_count(),
        failed = report.failed_count(),
        skipped = report.skipped_count()
    );

    report
}

/// List terminal windows without delivering anything.
///
/// # Errors
///
/// [`BroadcastError::UnsupportedPlatform`] when no strategy exists for this
/// platform, or the strategy's discovery error.
pub fn discover_windows(
    config: &OnallConfig,
) -> Result<(OsProfile, Vec<DiscoveredWindow>), BroadcastError> {
    let profile = OsProfile::detect();
    let strategy =
        strategy_for(&profile, config).ok_or_else(|| BroadcastError::UnsupportedPlatform {
            platform: profile.to_string(),
        })?;

    let windows = strategy.discover()?;
    info!(
        event = "core.broadcast.windows_listed",
        strategy = strategy.name(),
        count = windows.len()
    );
    Ok((profile, windows))
}
