//! Host implementations of the core ports.

pub mod console;
pub mod exit;
pub mod renderer;

pub use console::Console;
pub use exit::ShellExit;
pub use renderer::{render_snapshot, TerminalRenderer};
