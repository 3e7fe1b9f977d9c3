//! Core data structures for the rich-document tree.
//!
//! The tree is intentionally shallow: a [`Document`] holds an ordered list of
//! [`Block`]s, and only tables nest further (rows, then cells). Every node is
//! built once by a parser and never mutated afterwards.

/// Represents the root of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Document {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A top-level block of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    Table(Table),
}

impl Block {
    /// Short node name, as used by the tree visualisation.
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::Heading(_) => "Heading",
            Block::Paragraph(_) => "Paragraph",
            Block::CodeBlock(_) => "CodeBlock",
            Block::Table(_) => "Table",
        }
    }
}

/// Heading depth. Only the three shallowest levels are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MAX: u8 = 3;

    /// Returns `None` for anything outside `1..=3`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Represents a heading with a specific level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub content: Vec<Inline>,
}

/// Represents a paragraph of text. An empty paragraph stands for a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

impl Paragraph {
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// Represents a fenced block of verbatim text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub content: String,
}

/// Represents a table. The first row is the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    pub fn body(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Whether every row has as many cells as the header.
    pub fn is_rectangular(&self) -> bool {
        match self.header() {
            Some(header) => self
                .rows
                .iter()
                .all(|row| row.cells.len() == header.cells.len()),
            None => false,
        }
    }
}

/// Represents a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// Represents a table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub content: Vec<Inline>,
    /// Set when the cell holds text and all of it is bold (header and total rows).
    pub bold: bool,
}

impl TableCell {
    pub fn new(content: Vec<Inline>) -> Self {
        let bold = !content.is_empty() && content.iter().all(Inline::is_bold);
        Self { content, bold }
    }
}

/// Represents inline content: a run of text sharing one formatting attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) | Inline::Bold(text) => text,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Inline::Bold(_))
    }
}
