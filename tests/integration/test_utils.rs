//! Shared test utilities for integration tests
//!
//! Builds fixture trees and reads exported `.docx` packages back into
//! heading/body pairs so tests can assert on content instead of markup.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Content recovered from an exported document
#[derive(Debug, Default)]
pub struct ExportedDocument {
    pub title: Option<String>,
    /// (heading, body) in document order
    pub sections: Vec<(String, Option<String>)>,
}

impl ExportedDocument {
    pub fn headings(&self) -> BTreeSet<String> {
        self.sections.iter().map(|(h, _)| h.clone()).collect()
    }

    pub fn body_of(&self, heading: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(h, _)| h == heading)
            .and_then(|(_, body)| body.as_deref())
    }

    /// Sections sorted by heading, for order-independent comparisons.
    pub fn sorted_sections(&self) -> Vec<(String, Option<String>)> {
        let mut sections = self.sections.clone();
        sections.sort();
        sections
    }
}

#[derive(Debug, Default)]
struct Paragraph {
    style: Option<String>,
    text: String,
}

/// Read `word/document.xml` out of a `.docx` and split it into sections.
pub fn read_docx(path: &Path) -> ExportedDocument {
    let file = fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    let mut exported = ExportedDocument::default();
    for paragraph in parse_paragraphs(&xml) {
        match paragraph.style.as_deref() {
            Some("Heading1") => exported.title = Some(paragraph.text),
            Some("Heading2") => exported.sections.push((paragraph.text, None)),
            _ => {
                let (_, body) = exported
                    .sections
                    .last_mut()
                    .expect("body paragraph before any heading");
                assert!(body.is_none(), "section has two body paragraphs");
                *body = Some(paragraph.text);
            }
        }
    }
    exported
}

fn parse_paragraphs(xml: &str) -> Vec<Paragraph> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<Paragraph> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:p" => current = Some(Paragraph::default()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if let Some(paragraph) = current.as_mut() {
                    match e.name().as_ref() {
                        b"w:pStyle" => {
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"w:val" {
                                    paragraph.style =
                                        Some(String::from_utf8(attr.value.into_owned()).unwrap());
                                }
                            }
                        }
                        b"w:br" => paragraph.text.push('\n'),
                        b"w:tab" => paragraph.text.push('\t'),
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_text {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.text.push_str(&e.unescape().unwrap());
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.extend(current.take()),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parsing error: {}", e),
            _ => {}
        }
        buf.clear();
    }

    paragraphs
}

/// Create the reference tree under `root`:
///
/// ```text
/// R/
///   a.txt               "hello"
///   node_modules/x.js   "ignored"
///   .git/HEAD           "ignored"
///   package-lock.json   "ignored"
///   sub/b.py            "world"
/// ```
pub fn build_scenario_tree(root: &Path) {
    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    fs::write(root.join("node_modules").join("x.js"), "ignored").unwrap();
    fs::write(root.join(".git").join("HEAD"), "ignored").unwrap();
    fs::write(root.join("package-lock.json"), "ignored").unwrap();
    fs::write(root.join("sub").join("b.py"), "world").unwrap();
}
