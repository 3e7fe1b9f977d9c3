//! Warnings about input the parser accepted on a best-effort basis.
//!
//! Collecting diagnostics never changes the parsed document.

use std::fmt;

/// A recoverable irregularity, located by 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A code fence was opened on this line and never closed.
    UnterminatedFence { line: usize },
    /// This line holds an odd number of `**` markers.
    UnbalancedBold { line: usize },
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::UnterminatedFence { line } | Diagnostic::UnbalancedBold { line } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnterminatedFence { line } => {
                write!(f, "line {line}: code fence is never closed")
            }
            Diagnostic::UnbalancedBold { line } => {
                write!(f, "line {line}: unbalanced '**' bold marker")
            }
        }
    }
}
