//! Atlassian Document Format implementation
//!
//! ADF is the JSON tree the ticketing service stores rich text fields and
//! comments in. This module maps the document tree onto the ADF subset below
//! and back.
//!
//! | Tree        | ADF                                                        |
//! |-------------|------------------------------------------------------------|
//! | Document    | `doc` (version 1)                                          |
//! | Heading     | `heading` with `attrs.level`                               |
//! | Paragraph   | `paragraph` (empty `content` for blank lines)              |
//! | CodeBlock   | `codeBlock` with `attrs.language`, one `text` child        |
//! | Table       | `table` › `tableRow` › `tableHeader` (first row) / `tableCell` |
//! | TableCell   | one `paragraph` holding the cell runs                      |
//! | Inline      | `text`; bold runs carry a `strong` mark                    |
//!
//! # Options
//!
//! `serialize_with_options` accepts `pretty` (bool), `table-layout` (string)
//! and `number-column` (bool).

pub mod parser;
pub mod serializer;
pub mod wire;

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::ir::nodes::Document;
use std::collections::HashMap;

pub use serializer::AdfOptions;

#[derive(Debug, Clone, Default)]
pub struct AdfFormat {
    options: AdfOptions,
}

impl AdfFormat {
    pub fn new(options: AdfOptions) -> Self {
        Self { options }
    }

    /// Layer string options (as passed on the command line) over the defaults.
    pub fn resolve_options(
        &self,
        options: &HashMap<String, String>,
    ) -> Result<AdfOptions, FormatError> {
        if let Some(key) = options
            .keys()
            .find(|key| !matches!(key.as_str(), "pretty" | "table-layout" | "number-column"))
        {
            return Err(FormatError::NotSupported(format!(
                "Format 'adf' has no option '{key}'"
            )));
        }

        Ok(AdfOptions {
            pretty: bool_option(options, "pretty", self.options.pretty)?,
            table_layout: options
                .get("table-layout")
                .cloned()
                .unwrap_or_else(|| self.options.table_layout.clone()),
            number_column: bool_option(options, "number-column", self.options.number_column)?,
        })
    }
}

impl Format for AdfFormat {
    fn name(&self) -> &str {
        "adf"
    }

    fn description(&self) -> &str {
        "Atlassian Document Format (JSON)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json", "adf"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_adf(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_adf(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let resolved = self.resolve_options(options)?;
        serializer::serialize_to_adf(doc, &resolved)
    }
}
