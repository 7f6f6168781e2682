//! CLI output: error mapping and the completion line.

use crate::error::ExportError;
use crate::export::ExportSummary;
use std::io::Write;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ExportError) -> String {
    match e {
        ExportError::Walk(walk) => format!("{} (no output written)", walk),
        other => other.to_string(),
    }
}

/// Completion line printed after a successful export.
pub fn format_export_summary(summary: &ExportSummary) -> String {
    format!(
        "Generated {} ({} files, {} unreadable)",
        summary.output.display(),
        summary.files,
        summary.unreadable
    )
}

/// Write a command's final message, if any, followed by a newline.
pub fn write_output<W: Write>(console: &mut W, output: &str) -> Result<(), ExportError> {
    if !output.is_empty() {
        writeln!(console, "{}", output)?;
        console.flush()?;
    }
    Ok(())
}
