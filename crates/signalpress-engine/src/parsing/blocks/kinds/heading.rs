/// ATX heading type, levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Markers checked longest first so `### x` is never read as `# ` + `## x`.
    pub const MARKERS: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns `(level, content_offset)` for a heading line.
    ///
    /// Deeper markers such as `#### ` are not headings here and fall through
    /// to paragraph text.
    pub fn parse(line: &str) -> Option<(u8, usize)> {
        Self::MARKERS.iter().find_map(|&(marker, level)| {
            let rest = line.strip_prefix(marker)?;
            (!rest.trim().is_empty()).then_some((level, marker.len()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, 2)))]
    #[case("## Title", Some((2, 3)))]
    #[case("### Title", Some((3, 4)))]
    #[case("#### Title", None)]
    #[case("#Title", None)]
    #[case("# ", None)]
    #[case("text # not a heading", None)]
    fn parses_levels(#[case] line: &str, #[case] expected: Option<(u8, usize)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
