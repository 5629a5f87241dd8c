//! Presentation layer for humanoid
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::arguments::{ArgumentParseError, into_tool_arguments, parse_argument};
pub use cli::commands::{Cli, Command, CrewCommand, OutputFormat, ToolsCommand};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{CrewCheckReport, OutputFormatter};
pub use output::{formatter_for, set_color_enabled};
pub use output::json::JsonFormatter;
