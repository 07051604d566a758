//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading and writing syntax trees.

use crate::ast::Node;
use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for tree formats
///
/// Implementors convert between a text representation and the typed AST. Formats can support
/// parsing, serialization, or both. The tag dump only serializes; JSON does both so trees can
/// travel between the front-end stages and this crate.
///
/// # Examples
///
/// ```ignore
/// struct LineCount;
///
/// impl Format for LineCount {
///     fn name(&self) -> &str {
///         "lines"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, root: &Node) -> Result<String, FormatError> {
///         Ok(dump(root, 0).lines().count().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "tag", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → tree)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (tree → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a tree
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Node, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a tree into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _root: &Node) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a tree, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::serialize`] and rejects any option.
    fn serialize_with_options(
        &self,
        root: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(root)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Parse a boolean option value (`true`/`false`, `yes`/`no`, `1`/`0`).
pub fn parse_bool_option(option: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(FormatError::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}
