//! Conversion code shared by more than one format.

pub mod table;
