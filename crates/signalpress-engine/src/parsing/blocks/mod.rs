//! # Block Parsing
//!
//! Groups the lines of a (repaired) document into flat block nodes.
//!
//! `classify` records what can be known about a line in isolation: whether
//! it is blank and whether it looks like a code fence. `open` decides which
//! block, if any, that line starts. `builder` holds the current run and
//! turns runs into `BlockNode`s when a line of another kind, a blank line or
//! end of input closes them.
//!
//! Fenced code is a raw zone: once a fence opens, every line up to the
//! closing fence (or end of input) is content. Blocks never nest. A quote
//! or list is a run of lines, and a table is a run of pipe rows whose
//! second row is a delimiter row.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
