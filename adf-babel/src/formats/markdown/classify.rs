//! Line classification
//!
//! Decides which block a single line starts, given only the line and whether
//! the caller is currently inside a fenced code block.

use crate::ir::nodes::HeadingLevel;

pub const FENCE: &str = "```";
pub const HEADING_MARKER: char = '#';
pub const CELL_DELIMITER: char = '|';

/// The kind of block a line opens (or continues).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A fence line. `info` is the trimmed text after the marker, possibly empty.
    Fence { info: &'a str },
    Heading(HeadingLevel),
    TableRow,
    Plain,
}

/// Classify one line.
///
/// Inside a code block only a fence is recognised; everything else is
/// verbatim content.
pub fn classify_line(line: &str, in_code_block: bool) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(info) = trimmed.strip_prefix(FENCE) {
        return LineKind::Fence { info: info.trim() };
    }
    if in_code_block {
        return LineKind::Plain;
    }
    if let Some(level) = heading_level(line) {
        return LineKind::Heading(level);
    }
    if is_table_row(trimmed) {
        return LineKind::TableRow;
    }
    LineKind::Plain
}

/// Exactly one to three leading markers followed by a space.
fn heading_level(line: &str) -> Option<HeadingLevel> {
    let count = line.chars().take_while(|&c| c == HEADING_MARKER).count();
    if !line[count..].starts_with(' ') {
        return None;
    }
    u8::try_from(count).ok().and_then(HeadingLevel::new)
}

fn is_table_row(trimmed: &str) -> bool {
    trimmed
        .strip_prefix(CELL_DELIMITER)
        .is_some_and(|rest| rest.contains(CELL_DELIMITER))
}

/// Text of a heading line after its marker and the following space.
pub fn heading_text(line: &str, level: HeadingLevel) -> &str {
    line[usize::from(level.get())..].trim()
}
