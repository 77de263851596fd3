//! AppleScript sources and output parsing for scriptable terminals.

use crate::broadcast::common::escape::applescript_escape;
use crate::broadcast::types::DiscoveredWindow;

/// Script listing the ids of every window of `application`.
///
/// Output looks like `829, 302, missing value, 747`.
pub fn window_ids_script(application: &str) -> String {
    format!(
        "tell application \"{}\" to get id of every window",
        applescript_escape(application)
    )
}

/// Script lines that run `item 2 of argv` in window `item 1 of argv`.
///
/// The command travels as an osascript argument instead of being spliced
/// into the source, so it reaches the terminal byte for byte.
pub fn do_script_lines(application: &str) -> Vec<String> {
    vec![
        "on run argv".to_string(),
        format!(
            "tell application \"{}\" to do script (item 2 of argv) in window id ((item 1 of argv) as integer)",
            applescript_escape(application)
        ),
        "end run".to_string(),
    ]
}

/// Parse the comma-separated id list printed by [`window_ids_script`].
pub fn parse_window_ids(output: &str) -> Vec<DiscoveredWindow> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(',').map(DiscoveredWindow::from_raw).collect()
}
