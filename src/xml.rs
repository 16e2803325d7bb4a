//! XML node helpers for tag inspection and text access.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Tag name without namespace (e.g., "t" for `<w:t>`)
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use doctext::xml::get_tag_name;
///
/// let xml = r#"<root><w:t xmlns:w="http://example.com">text</w:t></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let run = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(run), "t");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Test whether an element's tag name ends with the given suffix.
///
/// This is a plain string suffix test on the tag name, not a semantic
/// element-type check. With suffix `"t"`, `<w:t>` matches, but so does any
/// tag whose last character is `t` (`<root>`, `<text>`); `<title>` does not.
pub fn tag_ends_with(node: Node<'_, '_>, suffix: &str) -> bool {
    node.is_element() && get_tag_name(node).ends_with(suffix)
}

/// Get the direct text content of an element, if any.
///
/// Direct text is character data appearing immediately inside the element,
/// before any child element. Text nested inside children is not included.
/// Whitespace is preserved verbatim; `None` is returned when the element
/// has no leading text node or it is the empty string.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use doctext::xml::direct_text;
///
/// let xml = r#"<p>lead<b>bold</b>tail</p>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(direct_text(doc.root_element()), Some("lead"));
/// ```
pub fn direct_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text().filter(|s| !s.is_empty())
}
