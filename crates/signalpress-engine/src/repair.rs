//! # Table Row Repair
//!
//! The workspace exporter sometimes wraps a long table cell onto the next
//! physical line, leaving a row that starts with `|` but does not end with one.
//! Table parsers then see a truncated row followed by stray text. This pass
//! rejoins such rows before any HTML conversion runs.
//!
//! The repair is best-effort: a row that is never closed is emitted as far as
//! it got, and nothing here can fail.

use std::borrow::Cow;

/// Delimiter that opens and closes a table row.
pub const PIPE: char = '|';

/// Rejoins table rows that were split across several physical lines.
///
/// Lines that do not start a broken row are returned unchanged, so running
/// the repair on already repaired text is a no-op.
pub fn repair_table_rows(markdown: &str) -> String {
    repair_lines(markdown.split('\n')).join("\n")
}

/// Line-level form of [`repair_table_rows`].
///
/// Borrowed lines are passed through; only rejoined rows allocate.
pub fn repair_lines<'a, I>(lines: I) -> Vec<Cow<'a, str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();
    let mut out = Vec::new();
    let mut rejoined = 0usize;

    while let Some(line) = lines.next() {
        if !is_broken_row(line) {
            out.push(Cow::Borrowed(line));
            continue;
        }

        let mut row = line.trim_end().to_string();
        let mut fragments = 0usize;
        while !is_closed(&row) {
            let Some(next) = lines.next() else {
                log::debug!("table row never closed before end of input: {row:?}");
                break;
            };
            let fragment = next.trim();
            if !fragment.is_empty() {
                row.push(' ');
                row.push_str(fragment);
            }
            fragments += 1;
        }

        if fragments > 0 {
            rejoined += 1;
        }
        out.push(Cow::Owned(row));
    }

    if rejoined > 0 {
        log::debug!("rejoined {rejoined} broken table row(s)");
    }
    out
}

/// A row that opens with a pipe but is not closed on the same line.
pub fn is_broken_row(line: &str) -> bool {
    line.starts_with(PIPE) && !is_closed(line)
}

fn is_closed(row: &str) -> bool {
    row.trim_end().ends_with(PIPE)
}
