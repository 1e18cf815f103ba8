use crate::parsing::text::Span;

use super::{
    classify::LineClass,
    kinds::{Alignment, CodeFence, FenceKind},
    open::{BlockOpen, try_open},
    types::{BlockKind, BlockNode},
};

/// Blocks that are built from a run of consecutive lines of the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Paragraph,
    Quote,
    List,
    Table,
}

#[derive(Debug)]
enum LeafState {
    None,
    Run {
        kind: RunKind,
        start: usize,
        last_line_end: usize,
        lines: Vec<Span>,
        /// Delimiter facts of the second table row, if it was one.
        alignments: Option<Vec<Alignment>>,
    },
    Fence {
        kind: FenceKind,
        info: Span,
        start: usize,
        last_line_end: usize,
        lines: Vec<Span>,
    },
}

/// State machine that groups classified lines into [`BlockNode`]s.
///
/// Every pushed line ends up in exactly one block (blank lines only separate
/// blocks and belong to none, except inside a fence where they are code).
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_run();
            return;
        }

        match try_open(c) {
            Some(BlockOpen::FencedCode { kind, info }) => {
                self.flush_run();
                self.leaf = LeafState::Fence {
                    kind,
                    info,
                    start: c.line.start,
                    last_line_end: c.line.end,
                    lines: vec![],
                };
            }
            Some(BlockOpen::Heading { level, content }) => {
                self.flush_run();
                self.out.push(BlockNode {
                    kind: BlockKind::Heading { level },
                    span: c.line,
                    lines: vec![content],
                });
            }
            Some(BlockOpen::ThematicBreak) => {
                self.flush_run();
                self.out.push(BlockNode {
                    kind: BlockKind::ThematicBreak,
                    span: c.line,
                    lines: vec![],
                });
            }
            Some(BlockOpen::TableRow { delimiter }) => {
                self.extend_run(RunKind::Table, c.line, c.line);
                self.note_delimiter(delimiter);
            }
            Some(BlockOpen::QuoteLine { content }) => {
                self.extend_run(RunKind::Quote, c.line, content)
            }
            Some(BlockOpen::ListItem { content }) => self.extend_run(RunKind::List, c.line, content),
            None => self.extend_run(RunKind::Paragraph, c.line, c.line),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_run();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let closes = match &mut self.leaf {
            LeafState::Fence {
                kind,
                last_line_end,
                ..
            } => {
                *last_line_end = c.line.end;
                CodeFence::closes(*kind, c.text)
            }
            _ => return,
        };

        if closes {
            self.flush_fence();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.line);
        }
    }

    fn extend_run(&mut self, kind: RunKind, line: Span, content: Span) {
        if let LeafState::Run {
            kind: current,
            last_line_end,
            lines,
            ..
        } = &mut self.leaf
            && *current == kind
        {
            *last_line_end = line.end;
            lines.push(content);
            return;
        }

        self.flush_run();
        self.leaf = LeafState::Run {
            kind,
            start: line.start,
            last_line_end: line.end,
            lines: vec![content],
            alignments: None,
        };
    }

    /// Remembers the alignments when the second row of a table run is a
    /// delimiter row. Only that position makes the run a real table.
    fn note_delimiter(&mut self, delimiter: Option<Vec<Alignment>>) {
        if let LeafState::Run {
            kind: RunKind::Table,
            lines,
            alignments,
            ..
        } = &mut self.leaf
            && lines.len() == 2
        {
            *alignments = delimiter;
        }
    }

    fn flush_run(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        let LeafState::Run {
            kind,
            start,
            last_line_end,
            mut lines,
            alignments,
        } = prev
        else {
            self.leaf = prev; // put back non-run leaf (e.g. fence)
            return;
        };

        let span = Span::new(start, last_line_end);
        let kind = match (kind, alignments) {
            (RunKind::Table, Some(alignments)) => {
                lines.remove(1);
                BlockKind::Table { alignments }
            }
            // Pipe rows without a delimiter row are plain text.
            (RunKind::Table, None) | (RunKind::Paragraph, _) => BlockKind::Paragraph,
            (RunKind::Quote, _) => BlockKind::BlockQuote,
            (RunKind::List, _) => BlockKind::List,
        };
        self.out.push(BlockNode { kind, span, lines });
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind,
            info,
            start,
            last_line_end,
            lines,
        } = prev
        {
            // Unterminated fences are emitted as fence blocks anyway.
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode { kind, info },
                span: Span::new(start, last_line_end),
                lines,
            });
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
