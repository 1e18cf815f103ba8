use crate::parsing::text::Span;

/// Column alignment declared by a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` value, if the column is aligned at all.
    pub fn css(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

/// Pipe table row type.
///
/// A row starts and ends with `|`. Rows are expected to have been rejoined
/// by [`crate::repair`] before they reach the block parser.
pub struct TableRow;

impl TableRow {
    pub const PIPE: u8 = b'|';

    pub fn matches(line: &str) -> bool {
        let t = line.trim_end();
        t.len() >= 2 && t.starts_with('|') && t.ends_with('|')
    }

    /// Splits a row into trimmed cell spans, relative to `base`.
    ///
    /// The outer pipes are dropped and `\|` does not split a cell.
    pub fn cells(line: &str, base: usize) -> Vec<Span> {
        let t = line.trim_end();
        let inner_start = 1;
        let inner_end = t.len().saturating_sub(1).max(inner_start);
        let bytes = t.as_bytes();

        let mut cells = vec![];
        let mut cell_start = inner_start;
        let mut i = inner_start;
        while i < inner_end {
            match bytes[i] {
                b'\\' => i += 1,
                Self::PIPE => {
                    cells.push(Span::new(base + cell_start, base + i));
                    cell_start = i + 1;
                }
                _ => {}
            }
            i += 1;
        }
        cells.push(Span::new(base + cell_start, base + inner_end));

        cells
            .into_iter()
            .map(|sp| {
                let local = Span::new(sp.start - base, sp.end - base);
                let trimmed = local.trim(t);
                Span::new(trimmed.start + base, trimmed.end + base)
            })
            .collect()
    }

    /// Parses a delimiter row such as `| --- | :-: | --: |`.
    ///
    /// Returns the alignment of each column, or `None` if any cell is not a
    /// run of hyphens with optional leading/trailing colons.
    pub fn delimiter(line: &str) -> Option<Vec<Alignment>> {
        if !Self::matches(line) {
            return None;
        }
        Self::cells(line, 0)
            .into_iter()
            .map(|sp| Self::cell_alignment(sp.slice(line)))
            .collect()
    }

    fn cell_alignment(cell: &str) -> Option<Alignment> {
        let left = cell.starts_with(':');
        let right = cell.len() > 1 && cell.ends_with(':');
        let dashes = cell.strip_prefix(':').unwrap_or(cell);
        let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
        if dashes.is_empty() || !dashes.bytes().all(|b| b == b'-') {
            return None;
        }
        Some(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        })
    }
}
