/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Each source line of a paragraph is
/// inline-parsed on its own and the lines are joined with a line break.
pub struct Paragraph;

impl Paragraph {
    /// Markup placed between the lines of a multi-line paragraph or quote.
    pub const LINE_BREAK: &'static str = "<br />";
}
