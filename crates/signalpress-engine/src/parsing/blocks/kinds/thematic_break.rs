pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";

    /// A line consisting solely of three hyphens (trailing whitespace allowed).
    pub fn matches(line: &str) -> bool {
        line.trim_end() == Self::MARKER
    }
}
