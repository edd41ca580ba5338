//! Output formatting for command results.

use clap::ValueEnum;
use treekit::Value;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    Pretty,
    /// Compact JSON on one line
    Json,
}

/// Render a command result as JSON text.
pub fn render(value: &Value, format: OutputFormat) -> treekit::Result<String> {
    match format {
        OutputFormat::Pretty => value.to_json_string_pretty(),
        OutputFormat::Json => value.to_json_string(),
    }
}
