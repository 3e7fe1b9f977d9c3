//! Icon mapping for the tree visualization

/// Get the Unicode icon for a given node type
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "CodeBlock" => "𝒱",
        "Table" => "▦",
        "TableRow" => "☰",
        "TableHeader" => "⊤",
        "TableCell" => "▢",
        "Text" => "◦",
        "Bold" => "𝐁",
        _ => "○",
    }
}
