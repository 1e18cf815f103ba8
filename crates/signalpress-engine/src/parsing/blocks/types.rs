use crate::parsing::text::Span;

use super::kinds::{Alignment, FenceKind};

/// The kind of a parsed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// `#`, `##` or `###` heading.
    Heading { level: u8 },
    /// A fenced code block. `info` is the language tag (may be empty).
    FencedCode { kind: FenceKind, info: Span },
    /// A run of consecutive `> ` lines.
    BlockQuote,
    /// A run of consecutive `- ` items.
    List,
    /// `---`
    ThematicBreak,
    /// A pipe table. The delimiter row is consumed into `alignments`.
    Table { alignments: Vec<Alignment> },
}

/// A parsed block node with its kind and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    /// The kind of block.
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Per-line content spans with prefixes stripped.
    ///
    /// Paragraph and quote lines, list items, heading text, raw code lines,
    /// or table rows (header first, delimiter row excluded). Empty for
    /// thematic breaks.
    pub lines: Vec<Span>,
}
