//! Tagged-tree dumps of typed MML syntax trees
//!
//!     This crate is the debug-dump stage of the MML front end. It takes a tree that the parser
//!     built and the type checker annotated, and writes it out as an indented, tagged text in
//!     which every node is one open/close tag pair. The dumps are meant for people and for golden
//!     files, so the one requirement on them is that a given tree always produces the same bytes.
//!
//!     This is a pure lib: it never touches the shell, files or environment. The `mml-dump`
//!     binary in mml-cli is the shell around it.
//!
//!     The file structure :
//!     .
//!     ├── ast                     # Typed tree (nodes, types, qualifiers), serde-enabled
//!     ├── common
//!     │   ├── names.rs            # qualifier_name / type_name
//!     │   └── literal.rs          # literal rendering (doubles)
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── tag                 # The tag dump: writer primitives + one handler per node kind
//!     │   └── json                # JSON interchange of trees
//!     └── transforms.rs           # json → tag shortcuts
//!
//! Core Algorithm
//!
//!     The dump is a depth-first walk with an exhaustive `match` on the node kind (see
//!     ./formats/tag/visitor.rs). Each handler opens its own tag, recurses into its children at a
//!     deeper level and closes its tag, so the output is well nested whatever the tree. The only
//!     state besides the output sink is a pending-declaration flag scoped to a single dump.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── common                 # tree builders, tag balance checker
//!     └── tag
//!         ├── expressions.rs
//!         ├── statements.rs
//!         └── properties.rs      # proptest: balance, order, idempotence
//!
//!     Rust does not discover tests in subdirectories, so tests/lib.rs includes them.

pub mod ast;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub use ast::{Node, Qualifier, TypeDescriptor};
pub use common::names::{qualifier_name, type_name};
pub use error::FormatError;
pub use format::Format;
pub use formats::tag::{dump, dump_to};
pub use registry::FormatRegistry;
