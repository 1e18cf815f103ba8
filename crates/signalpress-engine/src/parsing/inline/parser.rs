use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link},
    types::InlineNode,
};

/// Parses the inline content of `span` into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `src`: The whole source document (spans are absolute into it)
/// - `span`: The content to parse (a line, heading text, list item or cell)
///
/// # Precedence
/// Code spans are checked first and suppress all other parsing inside them.
/// Images are tried before links, and both before emphasis.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`; unclosed constructs stay text.
pub fn parse_inline(src: &str, span: Span) -> Vec<InlineNode> {
    let mut cur = Cursor::new(span.slice(src), span.start);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_image(&mut cur))
            .or_else(|| try_parse_link(src, &mut cur))
            .or_else(|| try_parse_emphasis(src, &mut cur));

        match node {
            Some(node) => {
                let full = node.span();
                flush_text(&mut out, text_start, full.start);
                text_start = full.end;
                out.push(node);
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// The content must be at least one byte long, so ``` `` ``` is text.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let start = cur.pos();
    let close = cur.find(&[CodeSpan::TICK], 2)?;
    cur.seek(close);
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(start + 1, close),
    })
}

/// Attempts to parse `![alt](url)`. The alt text may be empty, the url may not.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }

    let start = cur.pos();
    let alt = Span::new(start + Image::OPEN.len(), cur.find(&[Link::CLOSE], Image::OPEN.len())?);
    let url = url_after(cur, alt.end)?;

    cur.seek(url.end);
    cur.bump(); // )
    Some(InlineNode::Image {
        full: Span::new(start, cur.pos()),
        alt,
        url,
    })
}

/// Attempts to parse `[text](url)`. Link text is parsed recursively.
fn try_parse_link(src: &str, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let start = cur.pos();
    let text = Span::new(start + 1, cur.find(&[Link::CLOSE], 1)?);
    if text.is_empty() {
        return None;
    }
    let url = url_after(cur, text.end)?;

    cur.seek(url.end);
    cur.bump(); // )
    Some(InlineNode::Link {
        full: Span::new(start, cur.pos()),
        text: parse_inline(src, text),
        url,
    })
}

/// Given the position of a `]`, returns the span of a non-empty `(url)`
/// that immediately follows it. The url ends at the first `)`.
fn url_after(cur: &Cursor<'_>, close_bracket: usize) -> Option<Span> {
    if cur.byte_at(close_bracket + 1) != Some(Link::URL_OPEN) {
        return None;
    }
    let url_start = close_bracket + 2;
    let url_end = cur.find_from(&[Link::URL_CLOSE], url_start)?;
    (url_end > url_start).then_some(Span::new(url_start, url_end))
}

/// Attempts to parse `***x***`, `**x**` or `*x*`, longest marker first.
///
/// The closing marker is the nearest one that leaves at least one byte of
/// content. If a longer marker has no partner the shorter ones are tried at
/// the same position.
fn try_parse_emphasis(src: &str, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::STAR) {
        return None;
    }

    let start = cur.pos();
    for (marker, kind) in Emphasis::MARKERS {
        if !cur.starts_with(marker) {
            continue;
        }
        let Some(close) = cur.find(marker, marker.len() + 1) else {
            continue;
        };
        let inner = Span::new(start + marker.len(), close);
        cur.seek(close);
        cur.advance(marker.len());
        return Some(InlineNode::Emphasis {
            kind,
            full: Span::new(start, cur.pos()),
            children: parse_inline(src, inner),
        });
    }
    None
}
