use crate::parsing::text::Span;

use super::kinds::EmphasisKind;

/// A parsed inline node with byte spans into the source.
///
/// Container variants own their parsed children; leaf variants store spans
/// rather than text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `*x*`, `**x**` or `***x***`.
    Emphasis {
        kind: EmphasisKind,
        /// Full span including markers.
        full: Span,
        /// Parsed content between the markers.
        children: Vec<InlineNode>,
    },
    /// `![alt](url)`
    Image { full: Span, alt: Span, url: Span },
    /// `[text](url)`
    Link {
        full: Span,
        /// Parsed link text.
        text: Vec<InlineNode>,
        url: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::Image { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }
}
