//! ADF serialization (Document → ADF JSON)

use super::wire::{AdfNode, CodeBlockAttrs, HeadingAttrs, Mark, TableAttrs, ADF_VERSION};
use crate::error::FormatError;
use crate::ir::nodes::{Block, Document, Inline, Table, TableCell, TableRow};

/// Output knobs for ADF serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdfOptions {
    pub pretty: bool,
    pub table_layout: String,
    pub number_column: bool,
}

impl Default for AdfOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            table_layout: "default".to_string(),
            number_column: false,
        }
    }
}

/// Build the ADF node tree for a document.
pub fn to_adf(doc: &Document, options: &AdfOptions) -> AdfNode {
    AdfNode::Doc {
        version: ADF_VERSION,
        content: doc
            .children
            .iter()
            .map(|block| block_to_adf(block, options))
            .collect(),
    }
}

/// Serialize a document to ADF JSON text.
pub fn serialize_to_adf(doc: &Document, options: &AdfOptions) -> Result<String, FormatError> {
    let root = to_adf(doc, options);
    let json = if options.pretty {
        serde_json::to_string_pretty(&root)
    } else {
        serde_json::to_string(&root)
    };
    json.map_err(|e| FormatError::SerializationError(e.to_string()))
}

fn block_to_adf(block: &Block, options: &AdfOptions) -> AdfNode {
    match block {
        Block::Heading(heading) => AdfNode::Heading {
            attrs: HeadingAttrs {
                level: heading.level.get(),
            },
            content: runs_to_adf(&heading.content),
        },
        Block::Paragraph(para) => AdfNode::Paragraph {
            content: runs_to_adf(&para.content),
        },
        Block::CodeBlock(code) => AdfNode::CodeBlock {
            attrs: CodeBlockAttrs {
                language: Some(code.language.clone()),
            },
            content: if code.content.is_empty() {
                Vec::new()
            } else {
                vec![AdfNode::Text {
                    text: code.content.clone(),
                    marks: Vec::new(),
                }]
            },
        },
        Block::Table(table) => table_to_adf(table, options),
    }
}

fn table_to_adf(table: &Table, options: &AdfOptions) -> AdfNode {
    AdfNode::Table {
        attrs: TableAttrs {
            is_number_column_enabled: options.number_column,
            layout: options.table_layout.clone(),
        },
        content: table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| row_to_adf(row, idx == 0))
            .collect(),
    }
}

fn row_to_adf(row: &TableRow, header: bool) -> AdfNode {
    AdfNode::TableRow {
        content: row
            .cells
            .iter()
            .map(|cell| cell_to_adf(cell, header))
            .collect(),
    }
}

fn cell_to_adf(cell: &TableCell, header: bool) -> AdfNode {
    let content = vec![AdfNode::Paragraph {
        content: runs_to_adf(&cell.content),
    }];
    if header {
        AdfNode::TableHeader { content }
    } else {
        AdfNode::TableCell { content }
    }
}

fn runs_to_adf(runs: &[Inline]) -> Vec<AdfNode> {
    runs.iter()
        .map(|run| match run {
            Inline::Text(text) => AdfNode::Text {
                text: text.clone(),
                marks: Vec::new(),
            },
            Inline::Bold(text) => AdfNode::Text {
                text: text.clone(),
                marks: vec![Mark::Strong],
            },
        })
        .collect()
}
