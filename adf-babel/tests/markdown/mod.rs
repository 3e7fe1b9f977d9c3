//! Markup format tests
//!
//! Tests for parsing markup into the document tree and writing it back.

mod export;
mod import;
mod table;
