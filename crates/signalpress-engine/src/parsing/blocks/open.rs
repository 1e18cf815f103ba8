use crate::parsing::text::Span;

use super::{
    classify::LineClass,
    kinds::{Alignment, BlockQuote, CodeFence, FenceKind, Heading, ListItem, TableRow, ThematicBreak},
};

/// What a non-blank line opens or continues, decided from the line alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { kind: FenceKind, info: Span },
    Heading { level: u8, content: Span },
    ThematicBreak,
    TableRow { delimiter: Option<Vec<Alignment>> },
    QuoteLine { content: Span },
    ListItem { content: Span },
}

/// Detects a block opener. `None` means the line is paragraph text.
pub fn try_open(c: &LineClass<'_>) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(kind) = c.fence {
        let (s, e) = CodeFence::info_range(c.text, kind);
        return Some(BlockOpen::FencedCode {
            kind,
            info: Span::new(c.line.start + s, c.line.start + e),
        });
    }
    if let Some((level, offset)) = Heading::parse(c.text) {
        return Some(BlockOpen::Heading {
            level,
            content: c.content_from(offset),
        });
    }
    if ThematicBreak::matches(c.text) {
        return Some(BlockOpen::ThematicBreak);
    }
    if TableRow::matches(c.text) {
        return Some(BlockOpen::TableRow {
            delimiter: TableRow::delimiter(c.text),
        });
    }
    if let Some(offset) = BlockQuote::content_offset(c.text) {
        return Some(BlockOpen::QuoteLine {
            content: c.content_from(offset),
        });
    }
    if let Some(offset) = ListItem::content_offset(c.text) {
        return Some(BlockOpen::ListItem {
            content: c.content_from(offset),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::MarkdownLineClassifier, text::lines_with_spans};

    fn open(src: &str) -> Option<BlockOpen> {
        let lr = lines_with_spans(src).next().expect("line");
        try_open(&MarkdownLineClassifier.classify(&lr))
    }

    #[test]
    fn fence_with_info() {
        assert_eq!(
            open("```rust"),
            Some(BlockOpen::FencedCode {
                kind: FenceKind::Backticks,
                info: Span::new(3, 7)
            })
        );
    }

    #[test]
    fn heading_content_span() {
        assert_eq!(
            open("## Sub"),
            Some(BlockOpen::Heading {
                level: 2,
                content: Span::new(3, 6)
            })
        );
    }

    #[test]
    fn rule_quote_list_and_text() {
        assert_eq!(open("---"), Some(BlockOpen::ThematicBreak));
        assert_eq!(
            open("> quoted"),
            Some(BlockOpen::QuoteLine {
                content: Span::new(2, 8)
            })
        );
        assert_eq!(
            open("- item"),
            Some(BlockOpen::ListItem {
                content: Span::new(2, 6)
            })
        );
        assert_eq!(open("just text"), None);
    }

    #[test]
    fn table_rows_carry_delimiter_facts() {
        assert_eq!(
            open("| a | b |"),
            Some(BlockOpen::TableRow { delimiter: None })
        );
        assert_eq!(
            open("|---|:-:|"),
            Some(BlockOpen::TableRow {
                delimiter: Some(vec![Alignment::None, Alignment::Center])
            })
        );
    }
}
