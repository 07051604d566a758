//! Resolved types and declaration qualifiers

use crate::common::names::functional_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type attached to declarations and function definitions by the type checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Int,
    Double,
    String,
    Void,
    /// Not yet known (e.g. `auto` before inference).
    Unspec,
    Pointer {
        referenced: Box<TypeDescriptor>,
    },
    Functional {
        #[serde(default)]
        inputs: Vec<TypeDescriptor>,
        output: Box<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn pointer(referenced: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer {
            referenced: Box::new(referenced),
        }
    }

    pub fn functional(inputs: Vec<TypeDescriptor>, output: TypeDescriptor) -> Self {
        TypeDescriptor::Functional {
            inputs,
            output: Box::new(output),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Int => f.write_str("int"),
            TypeDescriptor::Double => f.write_str("double"),
            TypeDescriptor::String => f.write_str("string"),
            TypeDescriptor::Void => f.write_str("void"),
            TypeDescriptor::Unspec => f.write_str("unspec"),
            TypeDescriptor::Pointer { referenced } => write!(f, "[{referenced}]"),
            TypeDescriptor::Functional { inputs, output } => {
                f.write_str(&functional_name(inputs, output))
            }
        }
    }
}

/// Storage/visibility qualifier of a declaration.
///
/// Qualifier names this crate does not know deserialize to [`Qualifier::Unknown`] instead of
/// failing, so a newer front end can still be dumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    Public,
    Forward,
    Private,
    Foreign,
    #[serde(other)]
    Unknown,
}
