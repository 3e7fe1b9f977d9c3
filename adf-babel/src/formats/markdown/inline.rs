//! Inline run splitting
//!
//! Paragraph and table-cell text is split on the `**` marker. Fragments
//! alternate plain/bold starting with plain; empty fragments are dropped, so a
//! run never holds an empty string or the marker itself.
//!
//! An odd number of markers is not repaired: the trailing fragment keeps the
//! role its position gives it. [`has_unbalanced_bold`] lets callers report it.

use crate::ir::nodes::Inline;

pub const BOLD_MARKER: &str = "**";

/// Split one line of raw text into plain and bold runs.
pub fn split_inline(text: &str) -> Vec<Inline> {
    text.split(BOLD_MARKER)
        .enumerate()
        .filter(|(_, fragment)| !fragment.is_empty())
        .map(|(idx, fragment)| {
            if idx % 2 == 1 {
                Inline::Bold(fragment.to_string())
            } else {
                Inline::Text(fragment.to_string())
            }
        })
        .collect()
}

/// True when the text holds an odd number of bold markers.
pub fn has_unbalanced_bold(text: &str) -> bool {
    text.matches(BOLD_MARKER).count() % 2 == 1
}
