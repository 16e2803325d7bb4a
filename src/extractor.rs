//! Document traversal and run-text collection.
//!
//! The extraction walks the whole tree in document order (pre-order) and
//! collects the direct text of every element whose tag name ends in `t`.
//! That suffix rule is deliberately blunt: it is how word-processing run
//! text (`<w:t>`) is picked out without namespace handling, and it also
//! matches any other tag that happens to end in `t`.

use std::fs;
use std::path::Path;

use roxmltree::Document;

use crate::error::Result;
use crate::xml::{direct_text, tag_ends_with};

/// Tag-name suffix identifying run-text elements.
const RUN_TEXT_SUFFIX: &str = "t";

/// Collect run text from an already-parsed document.
///
/// Visits every element, the root included, in document order. Each element
/// whose tag name ends in `t` contributes its direct text content when that
/// text is non-empty, verbatim and untrimmed.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use doctext::extractor::extract_from_doc;
///
/// let doc = Document::parse("<root><w:t xmlns:w=\"x\">Hi</w:t></root>").unwrap();
/// assert_eq!(extract_from_doc(&doc), vec!["Hi".to_string()]);
/// ```
pub fn extract_from_doc(doc: &Document<'_>) -> Vec<String> {
    let texts: Vec<String> = doc
        .descendants()
        .filter(|n| tag_ends_with(*n, RUN_TEXT_SUFFIX))
        .filter_map(|n| direct_text(n).map(str::to_string))
        .collect();

    tracing::debug!(matched = texts.len(), "collected run text");
    texts
}

/// Parse an XML string and collect run text from it.
///
/// # Arguments
/// * `xml` - Well-formed XML document text
///
/// # Returns
/// Matched text contents in document order, or a parse error
pub fn extract_from_str(xml: &str) -> Result<Vec<String>> {
    let doc = Document::parse(xml)?;
    Ok(extract_from_doc(&doc))
}

/// Read an XML file and collect run text from it.
///
/// # Arguments
/// * `path` - Path to a readable, well-formed XML file
///
/// # Returns
/// Matched text contents in document order, or a read/parse error
pub fn extract_file(path: &Path) -> Result<Vec<String>> {
    tracing::debug!(path = %path.display(), "reading XML file");
    let xml = fs::read_to_string(path)?;
    extract_from_str(&xml)
}
