//! ADF parsing (ADF JSON → Document)
//!
//! Only the node types the tree models are accepted. Anything else is an
//! error, since silently dropping it would lose content; callers that just
//! want the text of arbitrary ADF should use
//! [`crate::formats::text::extract_text_from_value`].

use super::wire::{AdfNode, Mark};
use crate::error::FormatError;
use crate::ir::nodes::{
    Block, CodeBlock, Document, Heading, HeadingLevel, Inline, Paragraph, Table, TableCell,
    TableRow,
};

/// Decode ADF JSON text into a document.
pub fn parse_adf(source: &str) -> Result<Document, FormatError> {
    let root: AdfNode = serde_json::from_str(source)?;
    from_adf(root)
}

/// Convert an already-decoded ADF node tree. The root must be a `doc` node.
pub fn from_adf(root: AdfNode) -> Result<Document, FormatError> {
    match root {
        AdfNode::Doc { content, .. } => content
            .into_iter()
            .map(block_from_adf)
            .collect::<Result<Vec<_>, _>>()
            .map(Document::new),
        other => Err(unexpected("doc", &other)),
    }
}

fn block_from_adf(node: AdfNode) -> Result<Block, FormatError> {
    match node {
        AdfNode::Heading { attrs, content } => {
            let level = HeadingLevel::new(attrs.level).ok_or_else(|| {
                FormatError::ParseError(format!(
                    "heading level {} is outside the supported range 1-{}",
                    attrs.level,
                    HeadingLevel::MAX
                ))
            })?;
            Ok(Block::Heading(Heading {
                level,
                content: runs_from_adf(content)?,
            }))
        }
        AdfNode::Paragraph { content } => Ok(Block::Paragraph(Paragraph {
            content: runs_from_adf(content)?,
        })),
        AdfNode::CodeBlock { attrs, content } => {
            let mut text = String::new();
            for node in content {
                match node {
                    AdfNode::Text { text: piece, .. } => text.push_str(&piece),
                    other => return Err(unexpected("text", &other)),
                }
            }
            Ok(Block::CodeBlock(CodeBlock {
                language: attrs.language.unwrap_or_else(|| "text".to_string()),
                content: text,
            }))
        }
        AdfNode::Table { content, .. } => {
            let rows = content
                .into_iter()
                .map(row_from_adf)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Block::Table(Table { rows }))
        }
        other => Err(unexpected("block", &other)),
    }
}

fn row_from_adf(node: AdfNode) -> Result<TableRow, FormatError> {
    let content = match node {
        AdfNode::TableRow { content } => content,
        other => return Err(unexpected("tableRow", &other)),
    };
    let cells = content
        .into_iter()
        .map(|cell| match cell {
            AdfNode::TableHeader { content } | AdfNode::TableCell { content } => {
                cell_from_adf(content)
            }
            other => Err(unexpected("tableHeader or tableCell", &other)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TableRow { cells })
}

/// A cell's paragraphs are flattened into one run list.
fn cell_from_adf(content: Vec<AdfNode>) -> Result<TableCell, FormatError> {
    let mut runs = Vec::new();
    for node in content {
        match node {
            AdfNode::Paragraph { content } => runs.extend(runs_from_adf(content)?),
            other => return Err(unexpected("paragraph", &other)),
        }
    }
    Ok(TableCell::new(runs))
}

fn runs_from_adf(content: Vec<AdfNode>) -> Result<Vec<Inline>, FormatError> {
    let mut runs = Vec::with_capacity(content.len());
    for node in content {
        match node {
            AdfNode::Text { text, .. } if text.is_empty() => {}
            AdfNode::Text { text, marks } => {
                if marks.contains(&Mark::Strong) {
                    runs.push(Inline::Bold(text));
                } else {
                    runs.push(Inline::Text(text));
                }
            }
            other => return Err(unexpected("text", &other)),
        }
    }
    Ok(runs)
}

fn unexpected(expected: &str, found: &AdfNode) -> FormatError {
    FormatError::ParseError(format!(
        "expected {expected} node, found '{}'",
        found.type_name()
    ))
}
