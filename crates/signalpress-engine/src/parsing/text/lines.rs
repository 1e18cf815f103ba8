use super::span::Span;

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of the line, excluding the `\n` (and a preceding `\r`).
    pub span: Span,
    /// The line text without its line ending.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `src` with their byte spans.
///
/// Splits on `\n` only, so an input ending in a newline yields a final empty
/// line; the block builder treats it as blank.
pub fn lines_with_spans(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    src.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        LineRef {
            span: Span::new(start, start + text.len()),
            text,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_exclude_line_endings() {
        let src = "one\r\ntwo\nthree";
        let lines: Vec<_> = lines_with_spans(src).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "one");
        assert_eq!(lines[0].span, Span::new(0, 3));
        assert_eq!(lines[1].span.slice(src), "two");
        assert_eq!(lines[2].span.slice(src), "three");
    }

    #[test]
    fn trailing_newline_yields_empty_line() {
        let lines: Vec<_> = lines_with_spans("a\n").collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].text.is_empty());
        assert_eq!(lines[1].span, Span::new(2, 2));
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        let lines: Vec<_> = lines_with_spans("").collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].span.is_empty());
    }
}
