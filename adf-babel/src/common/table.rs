//! Pipe table codec.
//!
//! Turns a run of consecutive `|`-delimited lines into table rows and back.
//! Every line, header and body alike, goes through [`split_row`], so rows of a
//! well-formed table share the header's width without any post-hoc check.
//! Ragged rows are kept exactly as written.

use crate::formats::markdown::classify::CELL_DELIMITER;
use crate::formats::markdown::inline::split_inline;
use crate::ir::nodes::{Inline, Table, TableCell, TableRow};

/// Build a table from buffered row lines.
///
/// Separator lines contribute no row. Returns `None` when nothing but
/// separators was buffered.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Option<Table> {
    let rows: Vec<TableRow> = lines
        .iter()
        .map(|line| split_row(line.as_ref()))
        .filter(|pieces| !is_separator(pieces))
        .map(|pieces| TableRow {
            cells: pieces
                .into_iter()
                .map(|piece| TableCell::new(split_inline(piece)))
                .collect(),
        })
        .collect();

    log::trace!("table codec: {} lines -> {} rows", lines.len(), rows.len());

    if rows.is_empty() {
        None
    } else {
        Some(Table { rows })
    }
}

/// Split a row line into trimmed cell texts.
///
/// The empty pieces produced by a leading or trailing delimiter are dropped;
/// interior empty cells are kept.
pub fn split_row(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix(CELL_DELIMITER).unwrap_or(line);
    let line = line.strip_suffix(CELL_DELIMITER).unwrap_or(line);

    line.split(CELL_DELIMITER).map(str::trim).collect()
}

/// A header/body separator: at least one run of dashes and nothing but dashes
/// in the other pieces. Empty pieces are ignored.
pub fn is_separator(pieces: &[&str]) -> bool {
    let mut filled = pieces.iter().filter(|piece| !piece.is_empty()).peekable();
    filled.peek().is_some() && filled.all(|piece| piece.chars().all(|c| c == '-'))
}

/// Render a table as pipe rows, with a separator line after the header.
pub fn serialize_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);

    for (idx, row) in table.rows.iter().enumerate() {
        lines.push(serialize_row(row));
        if idx == 0 {
            let width = row.cells.len().max(1);
            lines.push(format!("|{}", " --- |".repeat(width)));
        }
    }

    lines.join("\n")
}

fn serialize_row(row: &TableRow) -> String {
    let mut line = String::from("|");
    for cell in &row.cells {
        let text = render_runs(&cell.content);
        if text.is_empty() {
            line.push_str("  |");
        } else {
            line.push_str(&format!(" {text} |"));
        }
    }
    line
}

/// Render runs back into marker syntax.
pub fn render_runs(runs: &[Inline]) -> String {
    let mut out = String::new();
    for run in runs {
        match run {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(text) => {
                out.push_str("**");
                out.push_str(text);
                out.push_str("**");
            }
        }
    }
    out
}
