//! Rich-document tree shared by every format.
//!
//! Parsers build a [`nodes::Document`]; serializers and the text extractor
//! consume one. The two directions share nothing else.

pub mod nodes;
