//! Format implementations
//!
//! Each format converts between the shared document tree and one text
//! representation.

pub mod adf;
pub mod icons;
pub mod markdown;
pub mod text;
pub mod treeviz;

pub use adf::AdfFormat;
pub use markdown::MarkdownFormat;
pub use text::TextFormat;
pub use treeviz::TreevizFormat;
