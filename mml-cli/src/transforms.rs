//! CLI-specific transforms
//!
//! This module defines the views `mml-dump inspect` can show of a tree. Input is always the
//! JSON interchange form of a typed tree, as written by the front end.
//!
//! - `ast-tag`:  tag dump (one tag pair per node), the default
//! - `ast-json`: the tree re-serialized as JSON, pretty by default
//!
//! ## Extra Parameters
//!
//! - `initial-level`: indentation of the root node for `ast-tag`
//! - `pretty`: `false` collapses `ast-json` to a single line
//!
//! Example: `mml-dump inspect tree.json ast-tag --extra-initial-level 4`

use mml_dump::format::Format;
use mml_dump::formats::{JsonFormat, TagFormat};
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ast-tag", "ast-json"];

/// Transform used when `inspect` is given none.
pub const DEFAULT_TRANSFORM: &str = "ast-tag";

/// Execute a named transform on JSON tree source with optional extra parameters
///
/// # Example
///
/// ```ignore
/// let output = execute_transform(r#"{"kind": "nil"}"#, "ast-tag", &HashMap::new())?;
/// assert_eq!(output, "<nil_node>\n</nil_node>\n");
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let root = JsonFormat::default()
        .parse(source)
        .map_err(|e| format!("Transform failed: {e}"))?;

    match transform_name {
        "ast-tag" => TagFormat::default()
            .serialize_with_options(&root, extra_params)
            .map_err(|e| e.to_string()),
        "ast-json" => {
            // inspect is read by people, so pretty unless told otherwise
            let mut params = extra_params.clone();
            params
                .entry("pretty".to_string())
                .or_insert_with(|| "true".to_string());
            let mut output = JsonFormat::default()
                .serialize_with_options(&root, &params)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            output.push('\n');
            Ok(output)
        }
        _ => Err(format!(
            "Unknown transform '{transform_name}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}
