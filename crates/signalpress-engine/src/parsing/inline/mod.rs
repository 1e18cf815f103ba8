//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over one content
//! span at a time: a paragraph or quote line, a heading, a list item or a
//! table cell. Spans never cross a line break.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Emphasis, Image, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Code span, then image, then link, then emphasis. Code spans are raw zones
//! and images are tried before links so the `!` is never left dangling.
//! Emphasis bodies and link text are parsed recursively.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
