//! Windows console strategy: Command Prompt and PowerShell windows.

use tracing::debug;

use crate::broadcast::common::runner::pause;
use crate::broadcast::errors::BroadcastError;
use crate::broadcast::traits::{PlatformStrategy, WindowSystem};
use crate::broadcast::types::{BroadcastCommand, DeliveryTiming, DiscoveredWindow, WindowHandle};

/// Selects visible windows by title substring and types into them.
pub struct ConsoleStrategy<W: WindowSystem> {
    windows: W,
    title_patterns: Vec<String>,
    timing: DeliveryTiming,
}

impl<W: WindowSystem> ConsoleStrategy<W> {
    pub fn new(windows: W, title_patterns: Vec<String>, timing: DeliveryTiming) -> Self {
        Self {
            windows,
            title_patterns,
            timing,
        }
    }

    fn is_terminal_title(&self, title: &str) -> bool {
        self.title_patterns
            .iter()
            .any(|pattern| title.contains(pattern.as_str()))
    }
}

impl<W: WindowSystem> PlatformStrategy for ConsoleStrategy<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn display_name(&self) -> &'static str {
        "Windows console"
    }

    fn discover(&self) -> Result<Vec<DiscoveredWindow>, BroadcastError> {
        let visible = self.windows.visible_windows()?;
        let total = visible.len();

        let terminals: Vec<DiscoveredWindow> = visible
            .into_iter()
            .filter(|w| self.is_terminal_title(&w.title))
            .map(|w| DiscoveredWindow::Resolved { handle: w.handle })
            .collect();

        debug!(
            event = "core.broadcast.console_windows_filtered",
            visible = total,
            matched = terminals.len()
        );
        Ok(terminals)
    }

    fn deliver(
        &self,
        handle: WindowHandle,
        command: &BroadcastCommand,
    ) -> Result<(), BroadcastError> {
        self.windows.activate(handle)?;
        pause(self.timing.focus_delay);

        self.windows.type_text(command.as_str())?;
        self.windows.press_enter()?;
        pause(self.timing.submit_delay);

        Ok(())
    }
}
