//! Platform strategy implementations.

mod console;
mod terminal_app;
#[cfg(windows)]
mod win32;
mod xdotool;

pub use console::ConsoleStrategy;
pub use terminal_app::TerminalAppStrategy;
#[cfg(windows)]
pub use win32::Win32WindowSystem;
pub use xdotool::XdotoolStrategy;
