//! Format lookup for conversions
//!
//! The set of formats is closed: markup and ADF can be read and written, flat
//! text and the tree view are output only. A registry is built from the run's
//! parse and ADF options, so every format it hands out is already configured.
//!
//! | Name       | Extensions             | Read | Write |
//! |------------|------------------------|------|-------|
//! | `markdown` | `md`, `markdown`, `txt`| yes  | yes   |
//! | `adf`      | `json`, `adf`          | yes  | yes   |
//! | `text`     |                        |      | yes   |
//! | `treeviz`  | `tree`, `treeviz`      |      | yes   |

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::adf::AdfOptions;
use crate::formats::markdown::ParseOptions;
use crate::formats::{AdfFormat, MarkdownFormat, TextFormat, TreevizFormat};
use crate::ir::nodes::Document;
use std::collections::HashMap;
use std::path::Path;

/// The configured formats of one conversion run
///
/// ```ignore
/// let registry = FormatRegistry::with_options(parse_options, adf_options);
/// let doc = registry.parse("# Title", "markdown")?;
/// let json = registry.serialize_with_options(&doc, "adf", &extras)?;
/// ```
pub struct FormatRegistry {
    formats: Vec<Box<dyn Format>>,
}

impl FormatRegistry {
    /// All formats with library defaults
    pub fn with_defaults() -> Self {
        Self::with_options(ParseOptions::default(), AdfOptions::default())
    }

    /// All formats, markup reading and ADF writing configured by the caller
    pub fn with_options(parse: ParseOptions, adf: AdfOptions) -> Self {
        FormatRegistry {
            formats: vec![
                Box::new(MarkdownFormat::new(parse)),
                Box::new(AdfFormat::new(adf)),
                Box::new(TextFormat),
                Box::new(TreevizFormat),
            ],
        }
    }

    /// Formats in listing order: readable ones first
    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.iter().map(|format| format.as_ref())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// A format that can be used as conversion input
    pub fn reader(&self, name: &str) -> Result<&dyn Format, FormatError> {
        let format = self.get(name)?;
        if format.supports_parsing() {
            Ok(format)
        } else {
            Err(FormatError::NotSupported(format!(
                "'{name}' is an output-only format"
            )))
        }
    }

    /// A format that can be used as conversion output
    pub fn writer(&self, name: &str) -> Result<&dyn Format, FormatError> {
        let format = self.get(name)?;
        if format.supports_serialization() {
            Ok(format)
        } else {
            Err(FormatError::NotSupported(format!(
                "'{name}' cannot be written"
            )))
        }
    }

    /// Name of the format owning the path's extension, if any.
    pub fn format_for_path(&self, path: &str) -> Option<&str> {
        let extension = Path::new(path).extension()?.to_str()?;
        self.formats()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name())
    }

    pub fn parse(&self, source: &str, from: &str) -> Result<Document, FormatError> {
        self.reader(from)?.parse(source)
    }

    /// Write `doc` as `to`; options the format does not know are an error.
    pub fn serialize_with_options(
        &self,
        doc: &Document,
        to: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.writer(to)?.serialize_with_options(doc, options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
