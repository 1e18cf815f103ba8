/// Strength of an emphasis span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    /// `*text*`
    Emphasis,
    /// `**text**`
    Strong,
    /// `***text***`
    StrongEmphasis,
}

impl EmphasisKind {
    /// Opening and closing tags, outermost first.
    pub fn tags(self) -> (&'static str, &'static str) {
        match self {
            EmphasisKind::Emphasis => ("<em>", "</em>"),
            EmphasisKind::Strong => ("<strong>", "</strong>"),
            EmphasisKind::StrongEmphasis => ("<strong><em>", "</em></strong>"),
        }
    }
}

pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';

    /// Markers in the order they are tried. Longest first, so `***x***`
    /// is never read as `**` around `*x*` plus stray stars.
    pub const MARKERS: [(&'static [u8], EmphasisKind); 3] = [
        (b"***", EmphasisKind::StrongEmphasis),
        (b"**", EmphasisKind::Strong),
        (b"*", EmphasisKind::Emphasis),
    ];
}
