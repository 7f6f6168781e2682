//! WordprocessingML (`.docx`) writer
//!
//! Produces the smallest package Word and LibreOffice open cleanly: content
//! types, package relationships, the main document part, its relationships
//! and a style sheet defining `Heading1` and `Heading2`.
//!
//! Output is reproducible: no timestamps are embedded and every zip entry
//! carries the same fixed modification time.

use crate::document::{BodyStyle, Document};
use crate::error::PersistError;
use quick_xml::escape::escape;
use std::borrow::Cow;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="480" w:after="0"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="28"/><w:szCs w:val="28"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="200" w:after="0"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/><w:szCs w:val="26"/></w:rPr></w:style></w:styles>"#;

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_CLOSE: &str = "<w:sectPr/></w:body></w:document>";

/// Heading style applied to the document title
pub const TITLE_STYLE: &str = "Heading1";

/// Heading style applied to each file path
pub const SECTION_STYLE: &str = "Heading2";

/// Serializes a [`Document`] into a `.docx` package
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete package into memory.
    pub fn render(&self, document: &Document) -> Result<Vec<u8>, PersistError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let parts: [(&str, Cow<'_, str>); 5] = [
            ("[Content_Types].xml", Cow::Borrowed(CONTENT_TYPES_XML)),
            ("_rels/.rels", Cow::Borrowed(PACKAGE_RELS_XML)),
            ("word/document.xml", Cow::Owned(document_xml(document))),
            ("word/_rels/document.xml.rels", Cow::Borrowed(DOCUMENT_RELS_XML)),
            ("word/styles.xml", Cow::Borrowed(STYLES_XML)),
        ];
        for (name, content) in parts {
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Render and write the package to `path`, replacing any existing file.
    ///
    /// Bytes go to a temporary sibling first and are renamed into place, so a
    /// failed save leaves an existing file at `path` untouched.
    pub fn save(&self, document: &Document, path: &Path) -> Result<(), PersistError> {
        let bytes = self.render(document)?;

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, &bytes).map_err(|source| PersistError::Write {
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, path).map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            PersistError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(
            path = %path.display(),
            sections = document.len(),
            bytes = bytes.len(),
            "Document saved"
        );
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Build `word/document.xml`.
fn document_xml(document: &Document) -> String {
    let mut xml = String::from(DOCUMENT_OPEN);

    if let Some(title) = document.title() {
        push_heading(&mut xml, TITLE_STYLE, title);
    }
    for section in document.sections() {
        push_heading(&mut xml, SECTION_STYLE, &section.heading);
        if let Some(body) = &section.body {
            push_body(&mut xml, document.style(), body);
        }
    }

    xml.push_str(DOCUMENT_CLOSE);
    debug!(sections = document.len(), xml_bytes = xml.len(), "Rendered document part");
    xml
}

fn push_heading(xml: &mut String, style: &str, text: &str) {
    xml.push_str("<w:p><w:pPr><w:pStyle w:val=\"");
    xml.push_str(style);
    xml.push_str("\"/></w:pPr><w:r>");
    push_text(xml, &sanitize(text));
    xml.push_str("</w:r></w:p>");
}

/// A body is a single paragraph holding a single monospaced run. Line feeds
/// become `<w:br/>` and tabs `<w:tab/>` inside that run.
fn push_body(xml: &mut String, style: &BodyStyle, body: &str) {
    let font = escape(style.font.as_str());
    let half_points = style.size_pt * 2;

    xml.push_str("<w:p><w:r><w:rPr>");
    xml.push_str(&format!(
        "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>\
         <w:sz w:val=\"{half_points}\"/><w:szCs w:val=\"{half_points}\"/>"
    ));
    xml.push_str("</w:rPr>");

    let body = sanitize(body);
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        for (j, chunk) in line.split('\t').enumerate() {
            if j > 0 {
                xml.push_str("<w:tab/>");
            }
            if !chunk.is_empty() {
                push_text(xml, chunk);
            }
        }
    }
    if body.is_empty() {
        push_text(xml, "");
    }

    xml.push_str("</w:r></w:p>");
}

fn push_text(xml: &mut String, text: &str) {
    xml.push_str("<w:t xml:space=\"preserve\">");
    xml.push_str(&escape(text));
    xml.push_str("</w:t>");
}

/// Replace characters XML 1.0 cannot carry with U+FFFD.
///
/// Lossy decoding lets binary files through as text; their control bytes
/// would otherwise produce a document no reader accepts.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
            .collect(),
    )
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}
