//! Format implementations
//!
//! This module contains the formats a typed tree can be written to (and, for JSON, read from).

pub mod json;
pub mod tag;

pub use json::JsonFormat;
pub use tag::TagFormat;
