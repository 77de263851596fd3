//! String escaping utilities for script sources.

/// Escape a string for use inside an AppleScript string literal.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
