//! Transform-style helpers over the built-in formats
//!
//! Small functional wrappers for pipelines that receive the tree as JSON text and want the tag
//! dump straight away, without going through a [`crate::FormatRegistry`].

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::json::JsonFormat;
use crate::formats::tag::TagFormat;

/// Parse a JSON tree and dump it as tags starting at `initial_level`.
///
/// # Example
///
/// ```ignore
/// let dump = json_to_tag(r#"{"kind": "integer", "value": 7}"#, 0)?;
/// assert_eq!(dump, "<integer_node>7</integer_node>\n");
/// ```
pub fn json_to_tag(source: &str, initial_level: usize) -> Result<String, FormatError> {
    let root = JsonFormat::default().parse(source)?;
    TagFormat::new(initial_level).serialize(&root)
}

/// Parse a JSON tree and write it back out, normalized.
pub fn normalize_json(source: &str, pretty: bool) -> Result<String, FormatError> {
    let root = JsonFormat::default().parse(source)?;
    JsonFormat::new(pretty).serialize(&root)
}
