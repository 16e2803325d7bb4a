//! doctext - Extract run text from word-processing XML documents.
//!
//! Given an XML document (typically the `document.xml` payload of an Office
//! Open XML word-processing file), this crate walks the tree in document
//! order and collects the direct text of every element whose tag name ends
//! in `t`, which picks out `<w:t>` run-text elements without namespace
//! handling.
//!
//! # Example
//!
//! ```
//! use doctext::extractor::extract_from_str;
//!
//! let xml = r#"<root><w:t xmlns:w="x">Hello</w:t></root>"#;
//! assert_eq!(extract_from_str(xml).unwrap(), vec!["Hello".to_string()]);
//! ```
//!
//! # Architecture
//!
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML node helpers
//! - [`extractor`]: Document traversal and text collection
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod error;
pub mod extractor;
pub mod xml;

// Re-export main functions
pub use extractor::{extract_file, extract_from_doc, extract_from_str};

// Re-export commonly used items
pub use error::{ExtractError, Result};
