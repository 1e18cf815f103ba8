use crate::parsing::text::{LineRef, Span};

use super::kinds::{CodeFence, FenceKind};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Byte span of this line in the source, without its line ending.
    pub line: Span,
    /// The line text.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence: Option<FenceKind>,
}

impl LineClass<'_> {
    /// Span of `text[offset..]` with trailing whitespace removed.
    pub fn content_from(&self, offset: usize) -> Span {
        let end = self.text.trim_end().len().max(offset);
        Span::new(self.line.start + offset, self.line.start + end)
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        LineClass {
            line: lr.span,
            text: lr.text,
            is_blank: lr.text.trim().is_empty(),
            fence: CodeFence::sig(lr.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::text::lines_with_spans;

    fn classify_first(src: &str) -> LineClass<'_> {
        let lr = lines_with_spans(src).next().expect("at least one line");
        MarkdownLineClassifier.classify(&lr)
    }

    #[test]
    fn blank_line() {
        assert!(classify_first("   \t").is_blank);
        assert!(!classify_first(" x ").is_blank);
    }

    #[test]
    fn fence_line() {
        assert_eq!(classify_first("```js").fence, Some(FenceKind::Backticks));
        assert_eq!(classify_first("text").fence, None);
    }

    #[test]
    fn content_excludes_prefix_and_trailing_space() {
        let c = classify_first("# Title  ");
        assert_eq!(c.content_from(2), Span::new(2, 7));
    }
}
