use crate::parsing::{blocks::BlockNode, text::lines_with_spans};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Block spans are within bounds and in document order without overlap
/// - Every content line span is contained within its block span
/// - Every non-blank source line is covered by exactly one block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &str, blocks: &[BlockNode]) {
    let n = src.len();
    let mut prev_end = 0usize;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block span overlaps previous block: {:?} starts before {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;
        for line in &b.lines {
            assert!(
                line.start >= b.span.start && line.end <= b.span.end,
                "line span not contained in block span: line {:?}, block {:?}",
                line,
                b.span
            );
        }
    }

    for lr in lines_with_spans(src) {
        if lr.text.trim().is_empty() {
            continue;
        }
        let owners = blocks
            .iter()
            .filter(|b| b.span.start <= lr.span.start && lr.span.end <= b.span.end)
            .count();
        assert_eq!(
            owners, 1,
            "line {:?} at {:?} belongs to {} blocks",
            lr.text, lr.span, owners
        );
    }
}
