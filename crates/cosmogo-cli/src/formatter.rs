//! Output formatters for command results.

use clap::ValueEnum;

use crate::commands::CommandOutput;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter {
    /// Format a command result.
    fn format(&self, output: &CommandOutput) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// One line per result.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, output: &CommandOutput) -> String {
        output.lines.join("\n")
    }
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, output: &CommandOutput) -> String {
        serde_json::to_string_pretty(&output.json).unwrap_or_else(|_| output.json.to_string())
    }
}
