//! Format trait definition
//!
//! Every format converts between its own text representation and the shared
//! [`Document`] tree. A format may support parsing, serialization, or both.

use crate::error::FormatError;
use crate::ir::nodes::Document;
use std::collections::HashMap;

/// Trait for document formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(adf_babel::formats::text::extract_text(doc).to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "adf")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Document
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Document into text
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a Document, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default, which rejects any
    /// non-empty option map.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Reads a boolean option, accepting the spellings the CLI accepts.
pub fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match options.get(key) {
        None => Ok(default),
        Some(raw) => match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            _ => Err(FormatError::InvalidOption {
                key: key.to_string(),
                value: raw.clone(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnly;

    impl Format for ReadOnly {
        fn name(&self) -> &str {
            "read-only"
        }
    }

    #[test]
    fn defaults_report_not_supported() {
        let doc = Document::default();
        assert!(matches!(
            ReadOnly.parse("x"),
            Err(FormatError::NotSupported(_))
        ));
        assert!(matches!(
            ReadOnly.serialize(&doc),
            Err(FormatError::NotSupported(_))
        ));
    }

    #[test]
    fn bool_option_parses_common_spellings() {
        let mut options = HashMap::new();
        assert!(bool_option(&options, "pretty", true).unwrap());

        options.insert("pretty".to_string(), "No".to_string());
        assert!(!bool_option(&options, "pretty", true).unwrap());

        options.insert("pretty".to_string(), "perhaps".to_string());
        assert_eq!(
            bool_option(&options, "pretty", true),
            Err(FormatError::InvalidOption {
                key: "pretty".to_string(),
                value: "perhaps".to_string()
            })
        );
    }
}
