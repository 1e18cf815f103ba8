//! Document-level tests for the parsing module.
//!
//! Uses inline `insta` snapshots of the block outline; every parse is also
//! run through the invariant checks.

use crate::parsing::{
    ParsedDoc,
    blocks::{BlockKind, kinds::Alignment},
    inline::InlineNode,
    parse_document, parse_inline_for_block, snapshot,
};

fn parse_checked(md: &str) -> ParsedDoc {
    let doc = parse_document(md);
    snapshot::invariants(md, &doc.blocks);
    doc
}

fn outline(md: &str) -> String {
    let doc = parse_checked(md);
    snapshot::normalize(md, &doc.blocks)
}

#[test]
fn article_outline() {
    let md = "# Title\n\nIntro line one\nline two\n\n## Steps\n- first\n- second\n\n> quoted\n> more\n\n---\n\n```rust\nfn main() {}\n```\n";
    insta::assert_snapshot!(outline(md), @r#"
    Heading(1) "Title"
    Paragraph "Intro line one" "line two"
    Heading(2) "Steps"
    List "first" "second"
    BlockQuote "quoted" "more"
    ThematicBreak
    FencedCode(Backticks, "rust") "fn main() {}"
    "#);
}

#[test]
fn heading_interrupts_paragraph() {
    insta::assert_snapshot!(outline("before\n### Sub\nafter"), @r#"
    Paragraph "before"
    Heading(3) "Sub"
    Paragraph "after"
    "#);
}

#[test]
fn table_with_delimiter_row() {
    let md = "| A | B |\n| :-- | --: |\n| 1 | two words |";
    insta::assert_snapshot!(outline(md), @r#"Table([Left, Right]) "| A | B |" "| 1 | two words |""#);
}

#[test]
fn pipe_rows_without_delimiter_are_a_paragraph() {
    let md = "| not | a table |\n| just | rows |";
    let doc = parse_checked(md);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::Paragraph);
    assert_eq!(doc.blocks[0].lines.len(), 2);
}

#[test]
fn single_delimiter_row_is_not_a_table() {
    let doc = parse_checked("|---|");
    assert_eq!(doc.blocks[0].kind, BlockKind::Paragraph);
}

#[test]
fn table_alignments_are_kept() {
    let doc = parse_checked("| a | b | c |\n|:-:|---|--:|");
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::Table {
            alignments: vec![Alignment::Center, Alignment::None, Alignment::Right]
        }
    );
    // Header only; the delimiter row is not content.
    assert_eq!(doc.blocks[0].lines.len(), 1);
}

#[test]
fn fence_is_a_raw_zone() {
    let md = "```\n# not a heading\n- not a list\n\n**raw**\n```";
    insta::assert_snapshot!(outline(md), @r###"FencedCode(Backticks, "") "# not a heading" "- not a list" "" "**raw**""###);
}

#[test]
fn unterminated_fence_runs_to_end() {
    let md = "text\n```py\nprint(1)\n\nmore";
    insta::assert_snapshot!(outline(md), @r#"
    Paragraph "text"
    FencedCode(Backticks, "py") "print(1)" "" "more"
    "#);
}

#[test]
fn fence_with_info_line_inside_does_not_close() {
    let md = "```md\n```python\n```";
    let doc = parse_checked(md);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].lines.len(), 1);
}

#[test]
fn blank_line_splits_lists() {
    insta::assert_snapshot!(outline("- a\n\n- b"), @r#"
    List "a"
    List "b"
    "#);
}

#[test]
fn list_then_text_line() {
    insta::assert_snapshot!(outline("- a\n- b\ntrailing"), @r#"
    List "a" "b"
    Paragraph "trailing"
    "#);
}

#[test]
fn crlf_input() {
    insta::assert_snapshot!(outline("# T\r\n\r\nbody\r\n"), @r#"
    Heading(1) "T"
    Paragraph "body"
    "#);
}

#[test]
fn unknown_constructs_are_paragraph_text() {
    insta::assert_snapshot!(outline("1. numbered\n#### deep\n* star"), @r#####"Paragraph "1. numbered" "#### deep" "* star""#####);
}

#[test]
fn inline_triple_backticks_do_not_open_a_fence() {
    insta::assert_snapshot!(outline("```x``` is inline\n\n# Heading\n\nbody"), @r#"
    Paragraph "```x``` is inline"
    Heading(1) "Heading"
    Paragraph "body"
    "#);
}

/// Test that raw zones (code spans) don't produce emphasis.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let md = "`**not bold**`";
    let doc = parse_checked(md);
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0].kind, BlockKind::Paragraph));

    let inlines = parse_inline_for_block(md, &doc.blocks[0]);
    assert_eq!(inlines.len(), 1);
    assert_eq!(inlines[0].len(), 1);
    assert!(matches!(inlines[0][0], InlineNode::CodeSpan { .. }));
}

#[test]
fn fences_have_no_inline_content() {
    let md = "```\n*x*\n```";
    let doc = parse_checked(md);
    assert!(parse_inline_for_block(md, &doc.blocks[0]).is_empty());
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let doc = parse_checked("");
    assert!(doc.blocks.is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let doc = parse_checked("\n\n  \n");
    assert!(doc.blocks.is_empty());
}
