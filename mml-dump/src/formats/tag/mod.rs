//! XML-like tag dump of the typed AST
//!
//! Serializes a syntax tree to an indented, tagged tree meant for inspection and golden files.
//! It looks like XML but is not: nothing is escaped and no declaration or schema is emitted.
//!
//! ## Format
//!
//! - Node kind → tag name (`<label>_node`)
//! - Literals and variable names → text between the tags, on one line
//! - Declarations, function definitions, stop/next and sequences → single-quoted attributes
//! - Structural children → nested tags, often inside a named wrapper (`condition`, `block`, ...)
//! - One space of indentation per level
//!
//! ## Example
//!
//! ```text
//! <while_node>
//!   <condition>
//!     <lt_node>
//!       <rvalue_node>
//!           <variable_node>x</variable_node>
//!       </rvalue_node>
//!       <integer_node>10</integer_node>
//!     </lt_node>
//!   </condition>
//!   <block>
//!     <block_node>
//!       <declarations>
//!       </declarations>
//!       <instructions>
//!       </instructions>
//!     </block_node>
//!   </block>
//! </while_node>
//! ```

mod visitor;
pub mod writer;

pub use writer::{PendingDeclaration, TagWriter};

use crate::ast::Node;
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;
use std::fmt;

/// Option key selecting the indentation level of the root node.
pub const INITIAL_LEVEL_OPTION: &str = "initial-level";

/// Dump `root` into `out`, starting at `initial_level`.
///
/// Errors come only from the sink. Output written before an error stays in the sink.
pub fn dump_to<W: fmt::Write>(out: &mut W, root: &Node, initial_level: usize) -> fmt::Result {
    log::debug!("dumping {} at level {initial_level}", root.label());
    TagWriter::new(out).visit(root, initial_level)
}

/// Dump `root` to a string, starting at `initial_level`.
pub fn dump(root: &Node, initial_level: usize) -> String {
    let mut out = String::new();
    // String sinks never fail.
    let _ = dump_to(&mut out, root, initial_level);
    out
}

/// Format implementation for the tag dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFormat {
    initial_level: usize,
}

impl TagFormat {
    pub fn new(initial_level: usize) -> Self {
        TagFormat { initial_level }
    }

    pub fn initial_level(&self) -> usize {
        self.initial_level
    }

    fn render(&self, root: &Node, initial_level: usize) -> Result<String, FormatError> {
        let mut out = String::new();
        dump_to(&mut out, root, initial_level).map_err(|_| {
            FormatError::SerializationError(format!("failed to write tag dump of {}", root.label()))
        })?;
        Ok(out)
    }
}

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag dump with one tag pair per node"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        self.render(root, self.initial_level)
    }

    fn serialize_with_options(
        &self,
        root: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut initial_level = self.initial_level;
        for (key, value) in options {
            match key.as_str() {
                INITIAL_LEVEL_OPTION => {
                    initial_level = value.parse().map_err(|_| FormatError::InvalidOption {
                        option: key.clone(),
                        value: value.clone(),
                    })?;
                }
                _ => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'tag' does not support option '{key}'"
                    )))
                }
            }
        }
        self.render(root, initial_level)
    }
}
