use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::config::DeliveryConfig;

/// The command text typed into every terminal.
///
/// Kept exactly as given: no trimming, no quoting, no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastCommand(String);

impl BroadcastCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    /// Join command-line words with single spaces.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self(words.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BroadcastCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque numeric id of one terminal window.
///
/// AppleScript window id on macOS, X11 window id on Linux, `HWND` on Windows.
/// Only valid for the run that discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WindowHandle(u64);

impl WindowHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry returned by window discovery.
///
/// `Unidentified` means the platform listed a window but could not name it,
/// e.g. AppleScript's `missing value` for terminals embedded in other
/// applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscoveredWindow {
    Resolved { handle: WindowHandle },
    Unidentified { raw: String },
}

impl DiscoveredWindow {
    /// Parse one raw id token as printed by the platform tool.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(id) => DiscoveredWindow::Resolved {
                handle: WindowHandle::new(id),
            },
            Err(_) => DiscoveredWindow::Unidentified {
                raw: trimmed.to_string(),
            },
        }
    }

    pub fn handle(&self) -> Option<WindowHandle> {
        match self {
            DiscoveredWindow::Resolved { handle } => Some(*handle),
            DiscoveredWindow::Unidentified { .. } => None,
        }
    }
}

/// Host platform, which decides the discovery and delivery strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OsProfile {
    #[serde(rename = "macos")]
    MacOs,
    Linux,
    Windows,
    Unsupported(String),
}

impl OsProfile {
    /// Profile of the platform this binary runs on.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to a profile.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "macos" => OsProfile::MacOs,
            "linux" => OsProfile::Linux,
            "windows" => OsProfile::Windows,
            other => OsProfile::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for OsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsProfile::MacOs => write!(f, "macos"),
            OsProfile::Linux => write!(f, "linux"),
            OsProfile::Windows => write!(f, "windows"),
            OsProfile::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

/// Fixed waits around each delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryTiming {
    /// After activating a window, before typing.
    pub focus_delay: Duration,
    /// After submitting, before the next window.
    pub submit_delay: Duration,
}

impl DeliveryTiming {
    /// No waiting at all, for tests and dry runs.
    pub const IMMEDIATE: DeliveryTiming = DeliveryTiming {
        focus_delay: Duration::ZERO,
        submit_delay: Duration::ZERO,
    };
}

impl From<&DeliveryConfig> for DeliveryTiming {
    fn from(config: &DeliveryConfig) -> Self {
        Self {
            focus_delay: config.focus_delay(),
            submit_delay: config.submit_delay(),
        }
    }
}

/// What happened to one discovered window, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WindowResult {
    Delivered { handle: WindowHandle },
    Failed { handle: WindowHandle, error: String },
    Skipped { raw: String },
}

/// How a broadcast run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BroadcastOutcome {
    /// Every discovered window was visited.
    Completed,
    /// Discovery succeeded but found nothing.
    NoWindows,
    /// Discovery failed; nothing was delivered.
    DiscoveryFailed { error: String },
    /// No strategy for this platform; nothing was attempted.
    Unsupported { platform: String },
}

/// Summary of one broadcast run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BroadcastReport {
    pub profile: OsProfile,
    pub command: String,
    pub outcome: BroadcastOutcome,
    pub windows: Vec<WindowResult>,
}

impl BroadcastReport {
    pub fn new(profile: OsProfile, command: &BroadcastCommand, outcome: BroadcastOutcome) -> Self {
        Self {
            profile,
            command: command.as_str().to_string(),
            outcome,
            windows: Vec::new(),
        }
    }

    pub fn delivered_count(&self) -> usize {
        self.windows
            .iter()
            .filter(|w| matches!(w, WindowResult::Delivered { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.windows
            .iter()
            .filter(|w| matches!(w, WindowResult::Failed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.windows
            .iter()
            .filter(|w| matches!(w, WindowResult::Skipped { .. }))
            .count()
    }

    /// Number of delivery attempts made (delivered plus failed).
    pub fn attempted_count(&self) -> usize {
        self.delivered_count() + self.failed_count()
    }

    /// Human-readable lines for everything that did not go to plan.
    pub fn diagnostics(&self) -> Vec<String> {
        match &self.outcome {
            BroadcastOutcome::Unsupported { platform } => {
                vec![format!("Unsupported operating system: {}", platform)]
            }
            BroadcastOutcome::DiscoveryFailed { error } => {
                vec![format!("Could not discover terminal windows: {}", error)]
            }
            BroadcastOutcome::NoWindows => vec!["No terminal windows found".to_string()],
            BroadcastOutcome::Completed => self
                .windows
                .iter()
                .filter_map(|w| match w {
                    WindowResult::Delivered { .. } => None,
                    WindowResult::Failed { handle, error } => Some(format!(
                        "Failed to send command to terminal window {}: {}",
                        handle, error
                    )),
                    WindowResult::Skipped { raw } => {
                        Some(format!("Skipped an unidentified terminal window ({})", raw))
                    }
                })
                .collect(),
        }
    }

    /// One-line result for a completed run.
    pub fn summary(&self) -> Option<String> {
        match self.outcome {
            BroadcastOutcome::Completed => Some(format!(
                "Sent command to {} of {} terminal window(s)",
                self.delivered_count(),
                self.windows.len()
            )),
            _ => None,
        }
    }
}
