//! Conversion between lightweight markup and Atlassian Document Format
//!
//!     This crate turns the small Markdown-like markup people type into ticket descriptions and
//!     comments into ADF, the JSON tree the ticketing service stores rich text in, and back. It
//!     also flattens either representation into plain text for search and indexing.
//!
//!     This is a pure lib, that is, it powers adf-cli but is shell agnostic: no code should be
//!     written that supposes a shell environment, be it std print, env vars etc. Logging goes
//!     through the `log` facade and is silent unless the host installs a logger.
//!
//! Architecture
//!
//!     Every format converts to and from one shared tree (./ir/nodes.rs). The markup parser is a
//!     single forward pass over lines: each line is classified (fence, heading, table row or
//!     plain), and the classification decides which block production consumes it. Code fences
//!     are modal; while one is open every line is payload.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # classify, inline, parser, serializer, diagnostics
//!     │   ├── adf                 # wire model, parser, serializer
//!     │   ├── text                # plain text extraction
//!     │   └── treeviz             # debugging tree view
//!     ├── lib.rs
//!     ├── ir                      # The shared document tree
//!     └── common                  # Pipe table codec shared by markup reader and writer
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── <area>.rs
//!
//!     Unit tests sit next to the code; the integration tests exercise the public API end to end
//!     and carry the property tests.
//!
//! Supported markup
//!
//!     - `#`, `##`, `###` headings (a space must follow the marks)
//!     - fenced code blocks with an optional language on the opening fence
//!     - pipe tables; dash-only separator rows are dropped, the first row is the header
//!     - `**bold**` runs inside paragraphs and cells (heading text is kept as written)
//!     - everything else is a paragraph, one per line; blank lines are empty paragraphs
//!
//!     The parser is total: any input produces a document. Unterminated fences and unbalanced
//!     bold markers are accepted as written and reported through
//!     [`formats::markdown::parser::parse_with_diagnostics`].
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub mod common;
pub mod ir;

pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::parser::{parse_markdown, parse_with_diagnostics};
pub use formats::text::{extract_text, extract_text_from_value};
pub use ir::nodes::Document;
pub use registry::FormatRegistry;

use formats::adf::AdfOptions;

/// Converts markup straight to ADF JSON using default options.
pub fn markdown_to_adf(source: &str) -> Result<String, FormatError> {
    formats::adf::serializer::serialize_to_adf(&parse_markdown(source), &AdfOptions::default())
}

/// Extracts the plain text of an ADF JSON document.
///
/// Works on any ADF, including node types the tree does not model; only
/// malformed JSON is an error.
pub fn adf_to_text(source: &str) -> Result<String, FormatError> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    Ok(extract_text_from_value(&value))
}
