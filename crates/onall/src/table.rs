use onall_core::DiscoveredWindow;

pub struct TableFormatter {
    index_width: usize,
    window_width: usize,
    status_width: usize,
}

impl TableFormatter {
    pub fn new(windows: &[DiscoveredWindow]) -> Self {
        let window_width = windows
            .iter()
            .map(|w| window_label(w).chars().count())
            .max()
            .unwrap_or(6)
            .clamp(6, 40); // Between "Window" header min and reasonable terminal width max

        Self {
            index_width: windows.len().to_string().len().max(1),
            window_width,
            status_width: 12,
        }
    }

    pub fn print_table(&self, windows: &[DiscoveredWindow]) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
        for (index, window) in windows.iter().enumerate() {
            println!("{}", self.row(index + 1, window));
        }
        println!("{}", self.bottom_border());
    }

    fn row(&self, index: usize, window: &DiscoveredWindow) -> String {
        let status = match window {
            DiscoveredWindow::Resolved { .. } => "ready",
            DiscoveredWindow::Unidentified { .. } => "unidentified",
        };

        format!(
            "│ {:>width_index$} │ {} │ {} │",
            index,
            truncate(&window_label(window), self.window_width),
            truncate(status, self.status_width),
            width_index = self.index_width,
        )
    }

    fn top_border(&self) -> String {
        self.border('┌', '┬', '┐')
    }

    fn separator(&self) -> String {
        self.border('├', '┼', '┤')
    }

    fn bottom_border(&self) -> String {
        self.border('└', '┴', '┘')
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        format!(
            "{left}{}{middle}{}{middle}{}{right}",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.window_width + 2),
            "─".repeat(self.status_width + 2),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:>width_index$} │ {:<width_window$} │ {:<width_status$} │",
            "#",
            "Window",
            "Status",
            width_index = self.index_width,
            width_window = self.window_width,
            width_status = self.status_width,
        )
    }
}

fn window_label(window: &DiscoveredWindow) -> String {
    match window {
        DiscoveredWindow::Resolved { handle } => handle.to_string(),
        DiscoveredWindow::Unidentified { raw } => raw.clone(),
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("abc", 5), "abc  ");
    }

    #[test]
    fn test_truncate_long_strings() {
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("命令提示字元視窗", 5), "命令...");
    }

    #[test]
    fn test_rows_and_borders_align() {
        let windows = vec![
            DiscoveredWindow::from_raw("62914561"),
            DiscoveredWindow::from_raw("missing value"),
        ];
        let table = TableFormatter::new(&windows);

        let header = table.header_row();
        let first = table.row(1, &windows[0]);
        let second = table.row(2, &windows[1]);
        let border = table.top_border();

        let width = header.chars().count();
        assert_eq!(first.chars().count(), width);
        assert_eq!(second.chars().count(), width);
        assert_eq!(border.chars().count(), width);
        assert!(first.contains("62914561"));
        assert!(first.contains("ready"));
        assert!(second.contains("unidentified"));
    }
}
