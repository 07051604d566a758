//! Rendering helpers shared by the output formats.

pub mod literal;
pub mod names;
