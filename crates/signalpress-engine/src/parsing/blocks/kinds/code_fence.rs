#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> &'static str {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICKS,
            FenceKind::Tildes => CodeFence::TILDES,
        }
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence marker at the start of a line.
    ///
    /// A backtick info string may not contain a backtick, so a line like
    /// ```` ```x``` text ```` is inline code, not a fence.
    pub fn sig(line: &str) -> Option<FenceKind> {
        if line.starts_with(Self::BACKTICKS) {
            let info = line.trim_start_matches('`');
            (!info.contains('`')).then_some(FenceKind::Backticks)
        } else if line.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// Byte range of the language tag following an opening marker.
    ///
    /// The tag is the first whitespace-delimited word of the info string;
    /// an empty range means no language was given.
    pub fn info_range(line: &str, kind: FenceKind) -> (usize, usize) {
        let marker = kind.marker();
        let fence_char = marker.as_bytes()[0];
        let after = marker.len()
            + line.as_bytes()[marker.len()..]
                .iter()
                .take_while(|&&b| b == fence_char)
                .count();
        let rest = &line[after..];
        let start = after + (rest.len() - rest.trim_start().len());
        let word_len = line[start..]
            .find(char::is_whitespace)
            .unwrap_or(line.len() - start);
        (start, start + word_len)
    }

    /// A closing fence is a line made only of the opening fence character
    /// (at least three), optionally followed by whitespace.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        let fence_char = kind.marker().as_bytes()[0];
        let t = line.trim_end();
        t.len() >= kind.marker().len() && t.bytes().all(|b| b == fence_char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some(FenceKind::Backticks));
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~"), Some(FenceKind::Tildes));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``inline``"), None);
        assert_eq!(CodeFence::sig("```x``` is inline"), None);
        assert_eq!(CodeFence::sig("````"), Some(FenceKind::Backticks));
    }

    #[test]
    fn info_is_first_word_after_marker() {
        let line = "```rust ignore";
        let (s, e) = CodeFence::info_range(line, FenceKind::Backticks);
        assert_eq!(&line[s..e], "rust");
    }

    #[test]
    fn info_skips_extra_fence_chars_and_spaces() {
        let line = "````  python";
        let (s, e) = CodeFence::info_range(line, FenceKind::Backticks);
        assert_eq!(&line[s..e], "python");
    }

    #[test]
    fn missing_info_is_empty() {
        let (s, e) = CodeFence::info_range("```", FenceKind::Backticks);
        assert_eq!(s, e);
    }

    #[test]
    fn closes_matching_fence() {
        assert!(CodeFence::closes(FenceKind::Backticks, "```"));
        assert!(CodeFence::closes(FenceKind::Backticks, "````  "));
        assert!(CodeFence::closes(FenceKind::Tildes, "~~~"));
    }

    #[test]
    fn does_not_close_mismatched_or_tagged_fence() {
        assert!(!CodeFence::closes(FenceKind::Backticks, "~~~"));
        assert!(!CodeFence::closes(FenceKind::Tildes, "```"));
        assert!(!CodeFence::closes(FenceKind::Backticks, "```python"));
        assert!(!CodeFence::closes(FenceKind::Backticks, "``"));
    }
}
