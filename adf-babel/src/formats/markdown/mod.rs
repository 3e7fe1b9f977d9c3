//! Markup format implementation
//!
//! The line-oriented dialect used in issue descriptions and comments. It is a
//! small subset of Markdown, parsed by hand rather than by a CommonMark
//! library, because its rules differ from CommonMark in places (headings stop
//! at level three, tables need no separator row, bold markers are never
//! nested or escaped).
//!
//! # Element Mapping Table
//!
//! | Markup                    | Tree                    | Notes                                  |
//! |---------------------------|-------------------------|----------------------------------------|
//! | `# `, `## `, `### `       | Heading (level 1–3)     | `####` and deeper are plain paragraphs |
//! | text line                 | Paragraph               | Split into plain/bold runs             |
//! | blank line                | empty Paragraph         | Kept for spacing                       |
//! | ```` ```lang ````         | CodeBlock               | Language defaults to `text`            |
//! | `\| a \| b \|` lines      | Table                   | Dash-only rows are separators          |
//! | `**bold**`                | Inline::Bold            | Unbalanced markers are not repaired    |
//!
//! # Lossy Conversions
//!
//! - Bold markers inside headings stay literal text
//! - Whitespace around table cells and headings is trimmed
//! - Whether a fence was closed is only visible through [`diagnostics`]

pub mod classify;
pub mod diagnostics;
pub mod inline;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

pub use diagnostics::Diagnostic;
pub use parser::{ParseOptions, Parsed};

/// Format implementation for the markup dialect
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: ParseOptions,
}

impl MarkdownFormat {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Line-oriented markup: headings, bold runs, code fences, pipe tables"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_markdown_with_options(source, &self.options))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::{Block, CodeBlock};

    #[test]
    fn test_markdown_format_supports_both_directions() {
        let format = MarkdownFormat::default();
        assert_eq!(format.name(), "markdown");
        assert!(format.supports_parsing());
        assert!(format.supports_serialization());
    }

    #[test]
    fn test_markdown_format_uses_configured_language() {
        let format = MarkdownFormat::new(ParseOptions {
            default_language: "plaintext".to_string(),
        });
        let doc = format.parse("```\nx\n```").unwrap();
        assert_eq!(
            doc.children,
            vec![Block::CodeBlock(CodeBlock {
                language: "plaintext".to_string(),
                content: "x".to_string(),
            })]
        );
    }
}
