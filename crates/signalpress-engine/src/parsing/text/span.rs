/// A byte range `[start, end)` into the source markdown.
///
/// Parsed nodes store spans rather than copied text; slicing the source with
/// any span reproduces the exact markdown it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the text this span covers in `src`.
    ///
    /// Spans are always produced on char boundaries of the same source, so
    /// slicing cannot split a UTF-8 sequence.
    pub fn slice(self, src: &str) -> &str {
        &src[self.start..self.end]
    }

    /// Narrows the span to exclude surrounding whitespace in `src`.
    #[must_use]
    pub fn trim(self, src: &str) -> Span {
        let text = self.slice(src);
        let lead = text.len() - text.trim_start().len();
        let trail = text.len() - text.trim_end().len();
        if lead == text.len() {
            return Span::new(self.start, self.start);
        }
        Span::new(self.start + lead, self.end - trail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::new(5, 3).is_empty());
    }

    #[test]
    fn slice_returns_covered_text() {
        assert_eq!(Span::new(6, 11).slice("hello world"), "world");
    }

    #[test]
    fn trim_strips_both_sides() {
        let src = "|  cell  |";
        let sp = Span::new(1, 9).trim(src);
        assert_eq!(sp.slice(src), "cell");
        assert_eq!(sp, Span::new(3, 7));
    }

    #[test]
    fn trim_of_whitespace_only_is_empty() {
        let sp = Span::new(0, 3).trim("   ");
        assert!(sp.is_empty());
    }
}
