use crate::parsing::blocks::{BlockKind, BlockNode};

/// Renders parsed blocks as one line per block for snapshot testing.
///
/// Each line holds the block kind followed by its content lines, quoted:
///
/// ```text
/// Heading(1) "Title"
/// List "first" "second"
/// ```
pub fn normalize(src: &str, blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(|b| {
            let kind = match &b.kind {
                BlockKind::Paragraph => "Paragraph".to_string(),
                BlockKind::Heading { level } => format!("Heading({level})"),
                BlockKind::FencedCode { kind, info } => {
                    format!("FencedCode({kind:?}, {:?})", info.slice(src))
                }
                BlockKind::BlockQuote => "BlockQuote".to_string(),
                BlockKind::List => "List".to_string(),
                BlockKind::ThematicBreak => "ThematicBreak".to_string(),
                BlockKind::Table { alignments } => format!("Table({alignments:?})"),
            };
            let mut line = kind;
            for sp in &b.lines {
                line.push_str(&format!(" {:?}", sp.slice(src)));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
