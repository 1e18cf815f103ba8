//! Test support for the block parser.
//!
//! `normalize` prints one line per block so a whole document fits in an
//! inline `insta` snapshot; `invariants` panics if spans are out of order,
//! overlap, or leave a non-blank line without exactly one owning block.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
