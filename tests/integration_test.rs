//! End-to-end integration tests for the extraction pipeline.
//!
//! Runs the library against a fixture wordprocessingML payload and checks
//! the document-order run-text output.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use doctext::extractor::{extract_file, extract_from_str};

/// Path to a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn test_document_fixture_run_texts() {
    let texts = extract_file(&fixture_path("document.xml")).unwrap();
    assert_eq!(
        texts,
        vec![
            "Quarterly report".to_string(),
            "Revenue grew by ".to_string(),
            "12 percent".to_string(),
            "Closing remarks".to_string(),
        ]
    );
}

#[test]
fn test_document_fixture_preserves_trailing_space() {
    // xml:space="preserve" runs keep their whitespace verbatim.
    let texts = extract_file(&fixture_path("document.xml")).unwrap();
    assert!(texts.iter().any(|t| t.ends_with(' ')));
}

#[test]
fn test_document_fixture_idempotent() {
    let first = extract_file(&fixture_path("document.xml")).unwrap();
    let second = extract_file(&fixture_path("document.xml")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_fixture_is_parse_error() {
    let err = extract_file(&fixture_path("malformed.xml")).unwrap_err();
    assert!(err.to_string().starts_with("XML parsing failed:"));
}

#[test]
fn test_string_pipeline_matches_file_pipeline() {
    let xml = load_fixture("document.xml");
    let from_str = extract_from_str(&xml).unwrap();
    let from_file = extract_file(&fixture_path("document.xml")).unwrap();
    assert_eq!(from_str, from_file);
}
