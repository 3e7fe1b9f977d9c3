use adf_babel::formats::markdown::parser::parse_markdown;
use adf_babel::ir::nodes::{Block, Inline, Table};

fn only_table(source: &str) -> Table {
    let doc = parse_markdown(source);
    assert_eq!(doc.children.len(), 1, "expected a single block: {doc:?}");
    match doc.children.into_iter().next() {
        Some(Block::Table(table)) => table,
        other => panic!("expected table, got {other:?}"),
    }
}

fn cell_texts(table: &Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| cell.content.iter().map(Inline::text).collect::<String>())
                .collect()
        })
        .collect()
}

#[test]
fn test_separator_row_is_discarded() {
    let table = only_table("| Name | Role |\n|------|------|\n| Ada | Eng |");
    assert_eq!(table.rows.len(), 2);
    assert!(table.is_rectangular());
    assert_eq!(
        cell_texts(&table),
        vec![vec!["Name", "Role"], vec!["Ada", "Eng"]]
    );
}

#[test]
fn test_separator_with_blank_piece_is_discarded() {
    let table = only_table("| A | B |\n| --- |  |\n| 1 | 2 |");
    assert_eq!(cell_texts(&table), vec![vec!["A", "B"], vec!["1", "2"]]);
}

#[test]
fn test_ragged_rows_are_preserved() {
    let table = only_table("| a | b | c |\n| 1 |\n| 1 | 2 | 3 | 4 |");
    assert!(!table.is_rectangular());
    assert_eq!(
        table.rows.iter().map(|r| r.cells.len()).collect::<Vec<_>>(),
        vec![3, 1, 4]
    );
}

#[test]
fn test_interior_empty_cells_are_kept() {
    let table = only_table("| a |  | c |");
    assert_eq!(cell_texts(&table), vec![vec!["a", "", "c"]]);
    assert!(table.rows[0].cells[1].content.is_empty());
    assert!(!table.rows[0].cells[1].bold);
}

#[test]
fn test_bold_cells() {
    let table = only_table("| **Total** | 8 **h** |");
    let cells = &table.rows[0].cells;
    assert!(cells[0].bold);
    assert!(!cells[1].bold);
    assert_eq!(
        cells[1].content,
        vec![Inline::Text("8 ".to_string()), Inline::Bold("h".to_string())]
    );
}

#[test]
fn test_alignment_row_is_a_body_row() {
    let table = only_table("| L | R |\n|:--|--:|");
    assert_eq!(cell_texts(&table), vec![vec!["L", "R"], vec![":--", "--:"]]);
}

#[test]
fn test_separator_only_table_emits_nothing() {
    let doc = parse_markdown("before\n|---|---|\nafter");
    let kinds: Vec<&str> = doc.children.iter().map(Block::node_type).collect();
    assert_eq!(kinds, vec!["Paragraph", "Paragraph"]);
}

#[test]
fn test_table_ends_at_first_non_row_line() {
    let doc = parse_markdown("| a | b |\n| 1 | 2 |\n\n| c | d |");
    let kinds: Vec<&str> = doc.children.iter().map(Block::node_type).collect();
    assert_eq!(kinds, vec!["Table", "Paragraph", "Table"]);
}

#[test]
fn test_single_pipe_line_is_a_paragraph() {
    let doc = parse_markdown("| lonely");
    assert_eq!(doc.children[0].node_type(), "Paragraph");
}
