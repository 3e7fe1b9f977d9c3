//! Plain text extraction
//!
//! Flattens a tree into one string: a depth-first walk collects the text of
//! every inline run in document order and joins the pieces with a single
//! space. Structure and formatting are dropped; blocks get no line breaks
//! between them.
//!
//! Two entry points exist. [`extract_text`] walks the typed tree, where only
//! runs carry text: code block payloads are skipped, so the output is always a
//! single line that parses back into the same text. For description fields
//! fetched from the ticketing service, which may hold node types the typed
//! tree does not model (lists, panels, mentions), use
//! [`extract_text_from_value`] on the raw ADF JSON instead. It reads every
//! `text` node, code included.
//!
//! An empty result means "no content", not an error.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Block, Document, Inline, TableCell, TableRow};
use serde_json::Value;

const SEPARATOR: &str = " ";

/// A tree node that can contribute text to an extraction.
pub trait ExtractText {
    /// Push this node's text pieces, in pre-order, onto `out`.
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>);
}

impl ExtractText for Document {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        for block in &self.children {
            block.collect_text(out);
        }
    }
}

impl ExtractText for Block {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Block::Heading(heading) => heading.content.collect_text(out),
            Block::Paragraph(para) => para.content.collect_text(out),
            Block::CodeBlock(_) => {}
            Block::Table(table) => table.rows.collect_text(out),
        }
    }
}

impl ExtractText for TableRow {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.cells.collect_text(out);
    }
}

impl ExtractText for TableCell {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.content.collect_text(out);
    }
}

impl ExtractText for Inline {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.text());
    }
}

impl<T: ExtractText> ExtractText for [T] {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        for item in self {
            item.collect_text(out);
        }
    }
}

impl<T: ExtractText> ExtractText for Vec<T> {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.as_slice().collect_text(out);
    }
}

/// Flatten a document, block, row, cell or run into plain text.
pub fn extract_text<T: ExtractText + ?Sized>(node: &T) -> String {
    let mut pieces = Vec::new();
    node.collect_text(&mut pieces);
    pieces.join(SEPARATOR)
}

/// Flatten raw ADF JSON into plain text.
///
/// A JSON string is taken to be plain text already and returned unchanged.
/// Scalars yield an empty string. Objects with `"type": "text"` contribute
/// their `text`; other objects are walked through their `content` array.
pub fn extract_text_from_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(_) | Value::Array(_) => {
            let mut pieces = Vec::new();
            collect_value_text(value, &mut pieces);
            pieces.join(SEPARATOR)
        }
        _ => String::new(),
    }
}

fn collect_value_text<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::Object(node) => {
            if node.get("type").and_then(Value::as_str) == Some("text") {
                out.push(node.get("text").and_then(Value::as_str).unwrap_or(""));
            } else if let Some(content) = node.get("content") {
                collect_value_text(content, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_value_text(item, out);
            }
        }
        _ => {}
    }
}

/// Serialize-only format producing the flattened text of a document
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Flattened plain text (structure and formatting dropped)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(extract_text(doc))
    }
}
