//! Export run: walk the roots, assemble the document, persist it once.

use crate::config::TreedocConfig;
use crate::document::{append_file, Document, DocxWriter};
use crate::error::ExportError;
use crate::ignore::ExclusionSet;
use crate::tree::Walker;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    /// Sections written, one per included file
    pub files: usize,
    /// Files whose heading was written without a body
    pub unreadable: usize,
    pub elapsed: Duration,
}

/// Build a walker from the traversal and exclusion settings.
pub fn walker_for(config: &TreedocConfig) -> Walker {
    Walker::with_config(
        config.roots.clone(),
        ExclusionSet::from(&config.exclusions),
        config.traversal.clone(),
    )
}

/// Run a full export.
///
/// Per-file read failures are written to `console` as one diagnostic line
/// each and the run continues. Traversal and persistence failures abort the
/// run before anything is written to the output path.
#[instrument(skip_all, fields(roots = config.roots.len()))]
pub fn run_export<W: Write>(
    config: &TreedocConfig,
    console: &mut W,
) -> Result<ExportSummary, ExportError> {
    let started = Instant::now();
    let document = assemble(config, console)?;

    DocxWriter::new().save(&document, &config.output.path)?;

    let summary = ExportSummary {
        output: config.output.path.clone(),
        files: document.len(),
        unreadable: document.headings_without_body(),
        elapsed: started.elapsed(),
    };
    info!(
        output = %summary.output.display(),
        files = summary.files,
        unreadable = summary.unreadable,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "Export complete"
    );
    Ok(summary)
}

/// Walk and read every included file into a fresh document.
pub fn assemble<W: Write>(
    config: &TreedocConfig,
    console: &mut W,
) -> Result<Document, ExportError> {
    let mut document = Document::new(config.output.title(), config.output.body_style());

    for path in walker_for(config).files() {
        let path = path?;
        if let Err(e) = append_file(&mut document, &path) {
            writeln!(console, "{}", read_failure_line(&path, &e))?;
        }
    }

    if document.is_empty() {
        warn!(roots = config.roots.len(), "No files matched; writing an empty document");
    }
    Ok(document)
}

/// Walk only, writing one included path per line.
pub fn run_list<W: Write>(config: &TreedocConfig, console: &mut W) -> Result<usize, ExportError> {
    let walker = walker_for(config);
    debug!(roots = ?walker.roots(), "Listing included files");
    let mut count = 0;
    for path in walker.files() {
        writeln!(console, "{}", path?.display())?;
        count += 1;
    }
    info!(files = count, "Listing complete");
    Ok(count)
}

/// Console diagnostic for a file whose content could not be read.
pub fn read_failure_line(path: &Path, error: &std::io::Error) -> String {
    format!("Could not read {}: {}", path.display(), error)
}
