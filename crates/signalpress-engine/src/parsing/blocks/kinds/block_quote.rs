/// Blockquote line type with owned delimiter constant.
///
/// Only single-level quotes are recognised. Consecutive quote lines are
/// grouped into one blockquote by the builder.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the byte offset where quoted content begins.
    ///
    /// `None` unless the line starts with `> ` and has non-blank content
    /// after it; a bare `>` is ordinary paragraph text.
    pub fn content_offset(line: &str) -> Option<usize> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        if rest.trim().is_empty() {
            return None;
        }
        Some(Self::PREFIX.len())
    }
}
