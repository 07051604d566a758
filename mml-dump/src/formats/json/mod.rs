//! JSON interchange format for typed trees
//!
//! This is how trees reach the dumper from the front end. The encoding is the serde derive of
//! [`crate::ast`]: nodes are objects tagged with `kind`, optional children may be omitted.

use crate::ast::Node;
use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use std::collections::HashMap;

/// Option key switching between compact and indented output.
pub const PRETTY_OPTION: &str = "pretty";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        JsonFormat { pretty }
    }

    fn render(&self, root: &Node, pretty: bool) -> Result<String, FormatError> {
        let result = if pretty {
            serde_json::to_string_pretty(root)
        } else {
            serde_json::to_string(root)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Typed AST as kind-tagged JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        self.render(root, self.pretty)
    }

    fn serialize_with_options(
        &self,
        root: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = self.pretty;
        for (key, value) in options {
            match key.as_str() {
                PRETTY_OPTION => pretty = parse_bool_option(key, value)?,
                _ => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support option '{key}'"
                    )))
                }
            }
        }
        self.render(root, pretty)
    }
}
