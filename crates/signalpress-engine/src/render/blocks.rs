use crate::parsing::{
    blocks::{
        BlockKind, BlockNode,
        kinds::{Alignment, Paragraph, TableRow},
    },
    inline::{InlineNode, parse_inline},
    parse_document,
    text::Span,
};

use super::HtmlRenderer;

/// Renders from the parsed block/inline structure.
///
/// Block nesting is explicit in the parsed nodes, so paragraphs never wrap
/// block elements and each run of list items gets exactly one `<ul>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRenderer {
    escape: bool,
}

impl BlockRenderer {
    pub fn new(escape: bool) -> Self {
        Self { escape }
    }
}

impl HtmlRenderer for BlockRenderer {
    fn name(&self) -> &'static str {
        "blocks"
    }

    fn render(&self, markdown: &str) -> String {
        let doc = parse_document(markdown);
        let mut w = HtmlWriter {
            src: markdown,
            escape: self.escape,
            out: String::with_capacity(markdown.len() + markdown.len() / 2),
        };
        for block in &doc.blocks {
            w.block(block);
        }
        w.out
    }
}

struct HtmlWriter<'a> {
    src: &'a str,
    escape: bool,
    out: String,
}

impl HtmlWriter<'_> {
    fn block(&mut self, b: &BlockNode) {
        match &b.kind {
            BlockKind::Paragraph => {
                self.out.push_str("<p>");
                self.inline_lines(&b.lines);
                self.out.push_str("</p>");
            }
            BlockKind::Heading { level } => {
                self.out.push_str(&format!("<h{level}>"));
                self.inline_lines(&b.lines);
                self.out.push_str(&format!("</h{level}>"));
            }
            BlockKind::FencedCode { info, .. } => {
                if info.is_empty() {
                    self.out.push_str("<pre><code>");
                } else {
                    self.out.push_str("<pre><code class=\"language-");
                    self.attr(*info);
                    self.out.push_str("\">");
                }
                for (i, line) in b.lines.iter().enumerate() {
                    if i > 0 {
                        self.out.push('\n');
                    }
                    self.text(*line);
                }
                self.out.push_str("</code></pre>");
            }
            BlockKind::BlockQuote => {
                self.out.push_str("<blockquote>");
                self.inline_lines(&b.lines);
                self.out.push_str("</blockquote>");
            }
            BlockKind::List => {
                self.out.push_str("<ul>");
                for item in &b.lines {
                    self.out.push_str("<li>");
                    self.inline(*item);
                    self.out.push_str("</li>");
                }
                self.out.push_str("</ul>");
            }
            BlockKind::ThematicBreak => self.out.push_str("<hr />"),
            BlockKind::Table { alignments } => self.table(alignments, &b.lines),
        }
    }

    fn table(&mut self, alignments: &[Alignment], rows: &[Span]) {
        let Some((header, body)) = rows.split_first() else {
            return;
        };

        self.out.push_str("<table><thead>");
        self.row(*header, alignments, "th");
        self.out.push_str("</thead>");
        if !body.is_empty() {
            self.out.push_str("<tbody>");
            for row in body {
                self.row(*row, alignments, "td");
            }
            self.out.push_str("</tbody>");
        }
        self.out.push_str("</table>");
    }

    /// Writes one row with exactly one cell per column: short rows are
    /// padded with empty cells, surplus cells are dropped.
    fn row(&mut self, row: Span, alignments: &[Alignment], tag: &str) {
        let cells = TableRow::cells(row.slice(self.src), row.start);
        self.out.push_str("<tr>");
        for (i, alignment) in alignments.iter().enumerate() {
            match alignment.css() {
                Some(align) => self
                    .out
                    .push_str(&format!("<{tag} style=\"text-align: {align}\">")),
                None => self.out.push_str(&format!("<{tag}>")),
            }
            if let Some(cell) = cells.get(i) {
                self.inline(*cell);
            }
            self.out.push_str(&format!("</{tag}>"));
        }
        self.out.push_str("</tr>");
    }

    fn inline_lines(&mut self, lines: &[Span]) {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.out.push_str(Paragraph::LINE_BREAK);
            }
            self.inline(*line);
        }
    }

    fn inline(&mut self, span: Span) {
        let nodes = parse_inline(self.src, span);
        self.nodes(&nodes);
    }

    fn nodes(&mut self, nodes: &[InlineNode]) {
        for node in nodes {
            match node {
                InlineNode::Text(sp) => self.text(*sp),
                InlineNode::CodeSpan { inner, .. } => {
                    self.out.push_str("<code>");
                    self.text(*inner);
                    self.out.push_str("</code>");
                }
                InlineNode::Emphasis { kind, children, .. } => {
                    let (open, close) = kind.tags();
                    self.out.push_str(open);
                    self.nodes(children);
                    self.out.push_str(close);
                }
                InlineNode::Image { alt, url, .. } => {
                    self.out.push_str("<img src=\"");
                    self.attr(*url);
                    self.out.push_str("\" alt=\"");
                    self.attr(*alt);
                    self.out.push_str("\" />");
                }
                InlineNode::Link { text, url, .. } => {
                    self.out.push_str("<a href=\"");
                    self.attr(*url);
                    self.out.push_str("\">");
                    self.nodes(text);
                    self.out.push_str("</a>");
                }
            }
        }
    }

    fn text(&mut self, sp: Span) {
        let raw = sp.slice(self.src);
        if self.escape {
            html_escape::encode_text_to_string(raw, &mut self.out);
        } else {
            self.out.push_str(raw);
        }
    }

    fn attr(&mut self, sp: Span) {
        let raw = sp.slice(self.src);
        if self.escape {
            html_escape::encode_double_quoted_attribute_to_string(raw, &mut self.out);
        } else {
            self.out.push_str(raw);
        }
    }
}
