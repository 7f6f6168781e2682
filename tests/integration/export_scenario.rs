//! End-to-end export through the library API.

use super::test_utils::{build_scenario_tree, read_docx};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treedoc::config::TreedocConfig;
use treedoc::error::ExportError;
use treedoc::export::run_export;

fn config_for(roots: &[&Path], output: &Path) -> TreedocConfig {
    let mut config = TreedocConfig {
        roots: roots.iter().map(|r| r.to_path_buf()).collect(),
        ..TreedocConfig::default()
    };
    config.output.path = output.to_path_buf();
    config
}

fn heading(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_reference_scenario_has_exactly_two_sections() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("R");
    build_scenario_tree(&root);
    let output = temp_dir.path().join("extractor.docx");

    let mut console = Vec::new();
    let summary = run_export(&config_for(&[&root], &output), &mut console).unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.unreadable, 0);
    assert!(console.is_empty(), "no diagnostics expected");

    let exported = read_docx(&output);
    assert_eq!(exported.title.as_deref(), Some("Code export"));
    assert_eq!(
        exported.sorted_sections(),
        vec![
            (heading(&root.join("a.txt")), Some("hello".to_string())),
            (heading(&root.join("sub").join("b.py")), Some("world".to_string())),
        ]
    );
}

#[test]
fn test_multiple_roots_each_contribute() {
    let temp_dir = TempDir::new().unwrap();
    let backend = temp_dir.path().join("backend");
    let frontend = temp_dir.path().join("crm-frontend");
    fs::create_dir_all(backend.join("dist")).unwrap();
    fs::create_dir_all(frontend.join("src")).unwrap();
    fs::write(backend.join("server.js"), "listen()").unwrap();
    fs::write(backend.join("dist").join("server.min.js"), "ignored").unwrap();
    fs::write(backend.join("package-lock.json"), "{}").unwrap();
    fs::write(frontend.join("src").join("App.tsx"), "<App />").unwrap();
    fs::write(frontend.join("package-lock.json"), "{}").unwrap();
    let output = temp_dir.path().join("out.docx");

    let mut console = Vec::new();
    run_export(&config_for(&[&backend, &frontend], &output), &mut console).unwrap();

    let exported = read_docx(&output);
    assert_eq!(exported.sections.len(), 2);
    // Roots are processed in input order.
    assert_eq!(exported.sections[0].0, heading(&backend.join("server.js")));
    assert_eq!(
        exported.sections[1].0,
        heading(&frontend.join("src").join("App.tsx"))
    );
    assert_eq!(
        exported.body_of(&heading(&frontend.join("src").join("App.tsx"))),
        Some("<App />")
    );
}

#[test]
fn test_body_text_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    fs::create_dir_all(&root).unwrap();
    let source = "fn main() {\n\tif a < b && c > d {\n\t\tprintln!(\"hi\");\n\t}\n}\n";
    fs::write(root.join("main.rs"), source).unwrap();
    fs::write(root.join("dos.txt"), "one\r\ntwo\r\n").unwrap();
    fs::write(root.join("empty.txt"), "").unwrap();
    let output = temp_dir.path().join("out.docx");

    let mut console = Vec::new();
    run_export(&config_for(&[&root], &output), &mut console).unwrap();

    let exported = read_docx(&output);
    assert_eq!(exported.body_of(&heading(&root.join("main.rs"))), Some(source));
    assert_eq!(
        exported.body_of(&heading(&root.join("dos.txt"))),
        Some("one\ntwo\n")
    );
    assert_eq!(exported.body_of(&heading(&root.join("empty.txt"))), Some(""));
}

#[test]
fn test_binary_content_is_substituted_not_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("assets");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("logo.png"), b"\x89PNG\r\n\x1a\n\x00\x00\xff").unwrap();
    let output = temp_dir.path().join("out.docx");

    let mut console = Vec::new();
    let summary = run_export(&config_for(&[&root], &output), &mut console).unwrap();
    assert_eq!(summary.unreadable, 0);
    assert!(console.is_empty());

    let exported = read_docx(&output);
    let body = exported
        .body_of(&heading(&root.join("logo.png")))
        .expect("binary file keeps a body");
    assert!(body.contains("PNG"));
    assert!(body.contains('\u{FFFD}'));
    assert!(!body.contains('\u{0}'));
}

#[test]
fn test_repeated_runs_produce_identical_content() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("R");
    build_scenario_tree(&root);
    fs::create_dir_all(root.join("more")).unwrap();
    fs::write(root.join("more").join("c.md"), "# notes").unwrap();
    let output = temp_dir.path().join("extractor.docx");

    let mut config = config_for(&[&root], &output);
    let mut console = Vec::new();
    run_export(&config, &mut console).unwrap();
    let first = read_docx(&output);
    run_export(&config, &mut console).unwrap();
    let second = read_docx(&output);
    assert_eq!(first.sorted_sections(), second.sorted_sections());

    // With sorted traversal the package bytes are identical as well.
    config.traversal.sorted = true;
    run_export(&config, &mut console).unwrap();
    let bytes_first = fs::read(&output).unwrap();
    run_export(&config, &mut console).unwrap();
    let bytes_second = fs::read(&output).unwrap();
    assert_eq!(bytes_first, bytes_second);
}

#[test]
fn test_missing_root_creates_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("extractor.docx");
    let config = config_for(&[&temp_dir.path().join("nope")], &output);

    let mut console = Vec::new();
    let err = run_export(&config, &mut console).unwrap_err();

    assert!(matches!(err, ExportError::Walk(_)));
    assert!(!output.exists());
}

#[test]
fn test_missing_root_leaves_previous_output_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("R");
    build_scenario_tree(&root);
    let output = temp_dir.path().join("extractor.docx");

    let mut console = Vec::new();
    run_export(&config_for(&[&root], &output), &mut console).unwrap();
    let before = fs::read(&output).unwrap();

    // A later root that does not exist aborts the whole run.
    let missing = temp_dir.path().join("gone");
    let err = run_export(&config_for(&[&root, &missing], &output), &mut console).unwrap_err();
    assert!(matches!(err, ExportError::Walk(_)));

    assert_eq!(fs::read(&output).unwrap(), before);
}

#[test]
fn test_title_can_be_disabled() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("R");
    build_scenario_tree(&root);
    let output = temp_dir.path().join("out.docx");

    let mut config = config_for(&[&root], &output);
    config.output.title = String::new();
    let mut console = Vec::new();
    run_export(&config, &mut console).unwrap();

    let exported = read_docx(&output);
    assert_eq!(exported.title, None);
    assert_eq!(exported.sections.len(), 2);
}
