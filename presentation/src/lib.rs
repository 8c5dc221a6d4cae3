//! Presentation layer for botbench
//!
//! CLI argument definitions, console formatting for transcripts, and
//! progress reporting implementations of the application's progress
//! port.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
