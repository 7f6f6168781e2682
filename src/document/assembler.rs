//! Appends one file to the export document.

use crate::document::Document;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Append a section for `path`.
///
/// The heading is always added. The body is added only if the file could be
/// read; otherwise the read error is returned and the section stays
/// heading-only. Invalid UTF-8 is substituted, never rejected.
pub fn append_file(document: &mut Document, path: &Path) -> io::Result<()> {
    document.push_heading(path.to_string_lossy());

    match read_body(path) {
        Ok(body) => {
            debug!(path = %path.display(), bytes = body.len(), "Appended file");
            document.set_last_body(body);
            Ok(())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read file");
            Err(e)
        }
    }
}

/// Read a file as text the way a text-mode reader with replacement would:
/// lossy UTF-8 decoding and universal newlines.
pub fn read_body(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(normalize_newlines(&String::from_utf8_lossy(&bytes)))
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
