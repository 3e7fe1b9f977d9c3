use adf_babel::format::Format;
use adf_babel::formats::adf::AdfFormat;
use adf_babel::formats::markdown::parser::parse_markdown;
use adf_babel::ir::nodes::{Block, Inline};
use adf_babel::FormatError;

const WORKLOG: &str = include_str!("../fixtures/worklog.md");

#[test]
fn test_worklog_survives_adf_round_trip() {
    let format = AdfFormat::default();
    let doc = parse_markdown(WORKLOG);
    let json = format.serialize(&doc).unwrap();
    assert_eq!(format.parse(&json).unwrap(), doc);
}

#[test]
fn test_service_shaped_document() {
    // Shaped like a description field returned by the ticketing service:
    // extra attrs, local ids and non-strong marks.
    let json = r#"{
        "version": 1,
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 1, "localId": "h1"}, "content": [
                {"type": "text", "text": "Rollout"}
            ]},
            {"type": "paragraph", "content": [
                {"type": "text", "text": "see "},
                {"type": "text", "text": "runbook", "marks": [{"type": "link", "attrs": {"href": "https://example.com"}}]},
                {"type": "text", "text": " now", "marks": [{"type": "em"}, {"type": "strong"}]}
            ]},
            {"type": "table", "attrs": {"layout": "wide"}, "content": [
                {"type": "tableRow", "content": [
                    {"type": "tableHeader", "attrs": {"colspan": 1}, "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "Step"}]}
                    ]}
                ]}
            ]}
        ]
    }"#;

    let doc = AdfFormat::default().parse(json).unwrap();
    assert_eq!(doc.children.len(), 3);
    match &doc.children[1] {
        Block::Paragraph(para) => assert_eq!(
            para.content,
            vec![
                Inline::Text("see ".to_string()),
                Inline::Text("runbook".to_string()),
                Inline::Bold(" now".to_string()),
            ]
        ),
        other => panic!("expected paragraph, got {other:?}"),
    }
    match &doc.children[2] {
        Block::Table(table) => {
            assert_eq!(table.rows.len(), 1);
            assert!(!table.rows[0].cells[0].bold);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn test_unmodeled_node_is_a_parse_error() {
    let json = r#"{"type":"doc","version":1,"content":[{"type":"bulletList","content":[]}]}"#;
    match AdfFormat::default().parse(json) {
        Err(FormatError::ParseError(msg)) => assert!(msg.contains("bulletList")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
