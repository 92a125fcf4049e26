//! Presentation layer for draftsmith
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters and the interactive topic prompt.

pub mod cli;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{console::ConsoleFormatter, formatter::OutputFormatter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use prompt::{TopicPrompt, usage};
