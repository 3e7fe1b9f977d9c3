//! Markup parsing (markup text → Document)
//!
//! A single left-to-right pass over the source lines with at most one line of
//! look-ahead (to find the end of a table). Every line lands in some block, so
//! parsing cannot fail.
//!
//! | Line kind | Block                                                   |
//! |-----------|---------------------------------------------------------|
//! | fence     | CodeBlock, verbatim up to the next fence or end of input |
//! | `#`–`###` | Heading, text taken as a single plain run               |
//! | `\|…\|`   | Table, via the table codec                              |
//! | blank     | empty Paragraph                                         |
//! | other     | Paragraph, split into plain/bold runs                   |

use super::classify::{classify_line, heading_text, LineKind};
use super::diagnostics::Diagnostic;
use super::inline::{has_unbalanced_bold, split_inline};
use crate::common::table::{parse_table, split_row};
use crate::ir::nodes::{Block, CodeBlock, Document, Heading, HeadingLevel, Inline, Paragraph};
use std::iter::{Enumerate, Peekable};

/// Knobs for the markup parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Language recorded for a code block whose opening fence names none.
    pub default_language: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_language: "text".to_string(),
        }
    }
}

/// A parsed document plus any irregularities noticed along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse markup with default options.
pub fn parse_markdown(source: &str) -> Document {
    parse_with_diagnostics(source, &ParseOptions::default()).document
}

pub fn parse_markdown_with_options(source: &str, options: &ParseOptions) -> Document {
    parse_with_diagnostics(source, options).document
}

/// Parse markup and report unterminated fences and unbalanced bold markers.
pub fn parse_with_diagnostics(source: &str, options: &ParseOptions) -> Parsed {
    let lines = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));
    BlockParser::new(lines, options).run()
}

struct BlockParser<'o, I: Iterator> {
    lines: Peekable<Enumerate<I>>,
    options: &'o ParseOptions,
    blocks: Vec<Block>,
    diagnostics: Vec<Diagnostic>,
}

impl<'s, 'o, I: Iterator<Item = &'s str>> BlockParser<'o, I> {
    fn new(lines: I, options: &'o ParseOptions) -> Self {
        Self {
            lines: lines.enumerate().peekable(),
            options,
            blocks: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn run(mut self) -> Parsed {
        let mut line_count = 0;
        while let Some((idx, line)) = self.lines.next() {
            line_count = idx + 1;
            log::trace!("line {line_count}: {line:?}");
            match classify_line(line, false) {
                LineKind::Fence { info } => self.code_block(idx, info),
                LineKind::Heading(level) => self.heading(line, level),
                LineKind::TableRow => self.table(idx, line),
                LineKind::Plain => self.paragraph(idx, line),
            }
        }

        log::debug!(
            "parsed {} blocks from {} lines ({} diagnostics)",
            self.blocks.len(),
            line_count,
            self.diagnostics.len()
        );

        Parsed {
            document: Document::new(self.blocks),
            diagnostics: self.diagnostics,
        }
    }

    fn code_block(&mut self, open_idx: usize, info: &str) {
        let language = if info.is_empty() {
            self.options.default_language.clone()
        } else {
            info.to_string()
        };

        let mut body = Vec::new();
        let mut closed = false;
        for (_, line) in self.lines.by_ref() {
            if matches!(classify_line(line, true), LineKind::Fence { .. }) {
                closed = true;
                break;
            }
            body.push(line);
        }

        if !closed {
            log::debug!("code fence opened on line {} is never closed", open_idx + 1);
            self.diagnostics.push(Diagnostic::UnterminatedFence { line: open_idx + 1 });
        }

        self.blocks.push(Block::CodeBlock(CodeBlock {
            language,
            content: body.join("\n"),
        }));
    }

    fn heading(&mut self, line: &str, level: HeadingLevel) {
        let text = heading_text(line, level);
        let content = if text.is_empty() {
            Vec::new()
        } else {
            vec![Inline::Text(text.to_string())]
        };
        self.blocks.push(Block::Heading(Heading { level, content }));
    }

    fn table(&mut self, first_idx: usize, first: &'s str) {
        let mut buffer = vec![(first_idx, first)];
        while let Some(&(idx, next)) = self.lines.peek() {
            if classify_line(next, false) != LineKind::TableRow {
                break;
            }
            buffer.push((idx, next));
            self.lines.next();
        }

        for &(idx, line) in &buffer {
            if split_row(line).into_iter().any(has_unbalanced_bold) {
                self.diagnostics.push(Diagnostic::UnbalancedBold { line: idx + 1 });
            }
        }

        let lines: Vec<&str> = buffer.iter().map(|&(_, line)| line).collect();
        if let Some(table) = parse_table(&lines) {
            self.blocks.push(Block::Table(table));
        }
    }

    fn paragraph(&mut self, idx: usize, line: &str) {
        if line.trim().is_empty() {
            self.blocks.push(Block::Paragraph(Paragraph::default()));
            return;
        }
        if has_unbalanced_bold(line) {
            self.diagnostics.push(Diagnostic::UnbalancedBold { line: idx + 1 });
        }
        self.blocks.push(Block::Paragraph(Paragraph {
            content: split_inline(line),
        }));
    }
}
