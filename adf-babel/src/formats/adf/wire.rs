//! Serde model of the Atlassian Document Format subset we read and write.
//!
//! Nodes are tagged by their `"type"` field. Unknown fields (cell spans,
//! local ids, ...) are ignored on input; unknown node types are rejected.

use serde::{Deserialize, Serialize};

pub const ADF_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AdfNode {
    Doc {
        version: u32,
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    Heading {
        attrs: HeadingAttrs,
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    Paragraph {
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    CodeBlock {
        #[serde(default)]
        attrs: CodeBlockAttrs,
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    Table {
        #[serde(default)]
        attrs: TableAttrs,
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    TableRow {
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    TableHeader {
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    TableCell {
        #[serde(default)]
        content: Vec<AdfNode>,
    },
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
}

impl AdfNode {
    /// The node's wire `type` name.
    pub fn type_name(&self) -> &'static str {
        match self {
            AdfNode::Doc { .. } => "doc",
            AdfNode::Heading { .. } => "heading",
            AdfNode::Paragraph { .. } => "paragraph",
            AdfNode::CodeBlock { .. } => "codeBlock",
            AdfNode::Table { .. } => "table",
            AdfNode::TableRow { .. } => "tableRow",
            AdfNode::TableHeader { .. } => "tableHeader",
            AdfNode::TableCell { .. } => "tableCell",
            AdfNode::Text { .. } => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttrs {
    #[serde(default)]
    pub is_number_column_enabled: bool,
    #[serde(default = "default_layout")]
    pub layout: String,
}

impl Default for TableAttrs {
    fn default() -> Self {
        Self {
            is_number_column_enabled: false,
            layout: default_layout(),
        }
    }
}

fn default_layout() -> String {
    "default".to_string()
}

/// Text marks. Only `strong` maps onto the tree; every other mark is read and
/// then ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Strong,
    #[serde(other)]
    Unsupported,
}
