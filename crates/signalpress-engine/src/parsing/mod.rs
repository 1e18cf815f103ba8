pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use text::lines_with_spans;

/// The block structure of one markdown document.
///
/// Holds spans only; pair it with the source it was parsed from.
#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(src: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(src) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Convenience: inline parse of every content line of a block.
///
/// Fenced code and thematic breaks have no inline content. Table rows are
/// returned whole; use [`blocks::kinds::TableRow::cells`] to parse per cell.
pub fn parse_inline_for_block(src: &str, b: &BlockNode) -> Vec<Vec<inline::InlineNode>> {
    match b.kind {
        BlockKind::FencedCode { .. } | BlockKind::ThematicBreak => vec![],
        _ => b
            .lines
            .iter()
            .map(|&line| inline::parse_inline(src, line))
            .collect(),
    }
}
