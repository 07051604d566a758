//! Display names for qualifiers and types
//!
//!     Both helpers are total: an absent type renders as the empty string and a qualifier this
//!     crate does not know renders as `unknown qualifier`.

use crate::ast::{Qualifier, TypeDescriptor};

/// Canonical name of a declaration qualifier.
pub fn qualifier_name(qualifier: Qualifier) -> &'static str {
    match qualifier {
        Qualifier::Public => "public",
        Qualifier::Forward => "forward",
        Qualifier::Private => "private",
        Qualifier::Foreign => "foreign",
        Qualifier::Unknown => "unknown qualifier",
    }
}

/// Display name of an optional type.
///
/// Functional types render as `function with output <O> and inputs (<I1>,<I2>)`, inputs
/// rendered recursively. Everything else uses the type's [`Display`](std::fmt::Display).
pub fn type_name(ty: Option<&TypeDescriptor>) -> String {
    match ty {
        None => String::new(),
        Some(TypeDescriptor::Functional { inputs, output }) => functional_name(inputs, output),
        Some(other) => other.to_string(),
    }
}

/// Rendering of a functional type from its parts.
pub fn functional_name(inputs: &[TypeDescriptor], output: &TypeDescriptor) -> String {
    let mut name = format!("function with output {output} and inputs (");
    for input in inputs {
        name.push_str(&type_name(Some(input)));
        name.push(',');
    }
    if !inputs.is_empty() {
        name.pop();
    }
    name.push(')');
    name
}
