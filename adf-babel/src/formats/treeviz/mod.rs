//! Treeviz formatter for document trees
//!
//! One line per node, nesting drawn with box connectors:
//! <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! ```text
//! ⧉ Document (3 blocks)
//! ├─ § h1 Estimate
//! │ └─ ◦ Estimate
//! ├─ 𝒱 sql (2 lines)
//! └─ ▦ 2 rows
//!   ├─ ⊤ 2 cells
//!   │ ├─ ▢ Task
//!   │ │ └─ ◦ Task
//!   ...
//! ```

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Block, Document, Inline, TableRow};

const LABEL_WIDTH: usize = 30;

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!(
        "{} Document ({} blocks)\n",
        get_icon("Document"),
        doc.children.len()
    );
    let count = doc.children.len();
    for (idx, block) in doc.children.iter().enumerate() {
        format_block(block, "", idx == count - 1, &mut output);
    }
    output
}

fn format_block(block: &Block, prefix: &str, is_last: bool, output: &mut String) {
    let label = match block {
        Block::Heading(h) => format!("h{} {}", h.level.get(), runs_label(&h.content)),
        Block::Paragraph(p) if p.is_blank() => "(blank)".to_string(),
        Block::Paragraph(p) => runs_label(&p.content),
        Block::CodeBlock(c) => format!("{} ({} lines)", c.language, c.content.lines().count()),
        Block::Table(t) => format!("{} rows", t.rows.len()),
    };
    push_line(output, prefix, is_last, block.node_type(), &label);

    let child_prefix = child_prefix(prefix, is_last);
    match block {
        Block::Heading(h) => format_runs(&h.content, &child_prefix, output),
        Block::Paragraph(p) => format_runs(&p.content, &child_prefix, output),
        Block::CodeBlock(_) => {}
        Block::Table(t) => {
            let count = t.rows.len();
            for (idx, row) in t.rows.iter().enumerate() {
                format_row(row, idx == 0, &child_prefix, idx == count - 1, output);
            }
        }
    }
}

fn format_row(row: &TableRow, header: bool, prefix: &str, is_last: bool, output: &mut String) {
    let node_type = if header { "TableHeader" } else { "TableRow" };
    push_line(
        output,
        prefix,
        is_last,
        node_type,
        &format!("{} cells", row.cells.len()),
    );

    let row_prefix = child_prefix(prefix, is_last);
    let count = row.cells.len();
    for (idx, cell) in row.cells.iter().enumerate() {
        let last = idx == count - 1;
        let mut label = runs_label(&cell.content);
        if cell.bold {
            label.push_str(" [bold]");
        }
        push_line(output, &row_prefix, last, "TableCell", &label);
        format_runs(&cell.content, &child_prefix(&row_prefix, last), output);
    }
}

fn format_runs(runs: &[Inline], prefix: &str, output: &mut String) {
    let count = runs.len();
    for (idx, run) in runs.iter().enumerate() {
        let node_type = if run.is_bold() { "Bold" } else { "Text" };
        push_line(output, prefix, idx == count - 1, node_type, &truncate(run.text()));
    }
}

fn push_line(output: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{prefix}{connector} {} {label}\n",
        get_icon(node_type)
    ));
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn runs_label(runs: &[Inline]) -> String {
    let text: String = runs.iter().map(Inline::text).collect();
    truncate(&text)
}

fn truncate(text: &str) -> String {
    if text.chars().count() > LABEL_WIDTH {
        let head: String = text.chars().take(LABEL_WIDTH).collect();
        format!("{head}…")
    } else {
        text.to_string()
    }
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
