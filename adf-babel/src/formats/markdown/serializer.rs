//! Markup serialization (Document → markup text)
//!
//! Writes the same dialect the parser reads. For trees the parser itself
//! produces, parsing the output gives back an equal tree.

use crate::common::table::{render_runs, serialize_table};
use crate::ir::nodes::{Block, Document};

use super::classify::{FENCE, HEADING_MARKER};

/// Serialize a document to markup, one or more lines per block.
pub fn serialize_to_markdown(doc: &Document) -> String {
    doc.children
        .iter()
        .map(serialize_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn serialize_block(block: &Block) -> String {
    match block {
        Block::Heading(heading) => {
            let marker = HEADING_MARKER
                .to_string()
                .repeat(usize::from(heading.level.get()));
            let text: String = heading.content.iter().map(|run| run.text()).collect();
            format!("{marker} {text}")
        }
        Block::Paragraph(para) => render_runs(&para.content),
        Block::CodeBlock(code) => {
            if code.content.is_empty() {
                format!("{FENCE}{}\n{FENCE}", code.language)
            } else {
                format!("{FENCE}{}\n{}\n{FENCE}", code.language, code.content)
            }
        }
        Block::Table(table) => serialize_table(table),
    }
}
