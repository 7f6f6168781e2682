//! In-memory export document
//!
//! The document is an append-only sequence of sections, one per exported
//! file, plus an optional title. It is owned by a single export run and
//! persisted once at the end (see [`docx::DocxWriter`]).

pub mod assembler;
pub mod docx;

pub use assembler::append_file;
pub use docx::DocxWriter;

use serde::{Deserialize, Serialize};

/// One exported file: its path as heading and its decoded text as body.
///
/// `body` is `None` when the file could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: Option<String>,
}

/// Font settings applied to every section body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyStyle {
    pub font: String,
    pub size_pt: u32,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            font: "Courier New".to_string(),
            size_pt: 10,
        }
    }
}

/// Append-only export document
#[derive(Debug, Clone, Default)]
pub struct Document {
    title: Option<String>,
    style: BodyStyle,
    sections: Vec<Section>,
}

impl Document {
    pub fn new(title: Option<String>, style: BodyStyle) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            style,
            sections: Vec::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn style(&self) -> &BodyStyle {
        &self.style
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Start a new section with the given heading and no body yet.
    pub fn push_heading(&mut self, heading: impl Into<String>) {
        self.sections.push(Section {
            heading: heading.into(),
            body: None,
        });
    }

    /// Attach a body to the most recent section.
    ///
    /// Returns `false` if there is no section or it already has a body;
    /// sections are never rewritten once complete.
    pub fn set_last_body(&mut self, body: String) -> bool {
        match self.sections.last_mut() {
            Some(section) if section.body.is_none() => {
                section.body = Some(body);
                true
            }
            _ => false,
        }
    }

    /// Number of sections that ended up without a body.
    pub fn headings_without_body(&self) -> usize {
        self.sections.iter().filter(|s| s.body.is_none()).count()
    }
}
