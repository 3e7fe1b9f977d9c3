//! ADF format tests
//!
//! Tests for markup → ADF conversion and for reading ADF back into the tree.

mod export;
mod import;
