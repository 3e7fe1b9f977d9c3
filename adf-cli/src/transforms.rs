//! CLI-specific transforms
//!
//! This module defines the views `adf inspect` can render for a markup file.
//! Each transform is a stage + format combination (e.g., "ast-treeviz", "line-kinds").
//!
//! ## Transform Pipeline
//!
//! Markup goes through two stages:
//!
//! 1. **Classification** - every line gets a kind (fence, heading, table row, plain)
//!    - `line-kinds`: one line per input line, with its kind
//!
//! 2. **Block parsing** - classified lines → document tree
//!    - `ast-treeviz`: Tree visualization with Unicode icons (default)
//!    - `ast-debug`: The tree's `Debug` form
//!    - `ast-diagnostics`: Unterminated fences and unbalanced bold markers
//!    - `adf-json`: The tree as pretty-printed ADF
//!
//! Example: `adf inspect notes.md line-kinds`

use adf_babel::formats::adf::serializer::{serialize_to_adf, AdfOptions};
use adf_babel::formats::markdown::classify::{classify_line, LineKind};
use adf_babel::formats::markdown::parser::parse_with_diagnostics;
use adf_babel::formats::markdown::ParseOptions;
use adf_babel::formats::treeviz::to_treeviz_str;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "line-kinds",
    "ast-treeviz",
    "ast-debug",
    "ast-diagnostics",
    "adf-json",
];

pub const DEFAULT_TRANSFORM: &str = "ast-treeviz";

/// Execute a named transform on markup source
///
/// # Examples
///
/// ```ignore
/// let output = execute_transform("# Title", "ast-treeviz", &ParseOptions::default())?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &ParseOptions,
) -> Result<String, String> {
    match transform_name {
        "line-kinds" => Ok(line_kinds(source)),
        "ast-treeviz" => Ok(to_treeviz_str(
            &parse_with_diagnostics(source, options).document,
        )),
        "ast-debug" => Ok(format!(
            "{:#?}\n",
            parse_with_diagnostics(source, options).document
        )),
        "ast-diagnostics" => {
            let parsed = parse_with_diagnostics(source, options);
            Ok(parsed
                .diagnostics
                .iter()
                .map(|diagnostic| format!("{diagnostic}\n"))
                .collect())
        }
        "adf-json" => {
            let doc = parse_with_diagnostics(source, options).document;
            serialize_to_adf(&doc, &AdfOptions::default())
                .map(|json| json + "\n")
                .map_err(|e| format!("Transform failed: {e}"))
        }
        _ => Err(format!(
            "Unknown transform '{transform_name}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

/// Number and classify each line, tracking fence state the way the block
/// parser does.
fn line_kinds(source: &str) -> String {
    let mut output = String::new();
    let mut in_code_block = false;

    for (idx, line) in source.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let kind = classify_line(line, in_code_block);
        let label = match &kind {
            LineKind::Fence { info } if !in_code_block && !info.is_empty() => {
                format!("Fence({info})")
            }
            LineKind::Fence { .. } => "Fence".to_string(),
            LineKind::Heading(level) => format!("Heading({})", level.get()),
            LineKind::TableRow => "TableRow".to_string(),
            LineKind::Plain if in_code_block => "Code".to_string(),
            LineKind::Plain => "Plain".to_string(),
        };
        if matches!(kind, LineKind::Fence { .. }) {
            in_code_block = !in_code_block;
        }
        output.push_str(&format!("{:>4} {label}\n", idx + 1));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, transform: &str) -> String {
        execute_transform(source, transform, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn line_kinds_track_fences() {
        let output = run("# T\n```sh\n# not heading\n```\n| a | b |\nplain", "line-kinds");
        assert_eq!(
            output,
            "   1 Heading(1)\n   2 Fence(sh)\n   3 Code\n   4 Fence\n   5 TableRow\n   6 Plain\n"
        );
    }

    #[test]
    fn treeviz_is_the_default_view() {
        assert_eq!(DEFAULT_TRANSFORM, "ast-treeviz");
        let output = run("hello", DEFAULT_TRANSFORM);
        assert!(output.starts_with("⧉ Document (1 blocks)\n"));
        assert!(output.contains("¶ hello"));
    }

    #[test]
    fn diagnostics_view_lists_problems() {
        let output = run("a **b\n```", "ast-diagnostics");
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("line 2: code fence is never closed"));
    }

    #[test]
    fn adf_json_view_is_pretty() {
        let output = run("x", "adf-json");
        assert!(output.starts_with("{\n"));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn debug_view_names_variants() {
        assert!(run("```\n```", "ast-debug").contains("CodeBlock"));
    }

    #[test]
    fn unknown_transform_is_an_error() {
        let err = execute_transform("x", "token-json", &ParseOptions::default()).unwrap_err();
        assert!(err.contains("Unknown transform 'token-json'"));
    }
}
