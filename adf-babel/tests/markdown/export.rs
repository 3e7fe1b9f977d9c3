use adf_babel::format::Format;
use adf_babel::formats::markdown::parser::parse_markdown;
use adf_babel::formats::markdown::MarkdownFormat;

const WORKLOG: &str = include_str!("../fixtures/worklog.md");

#[test]
fn test_worklog_round_trip_is_stable() {
    let format = MarkdownFormat::default();
    let doc = format.parse(WORKLOG).unwrap();
    let written = format.serialize(&doc).unwrap();

    // The writer normalizes separator rows, so compare trees rather than text.
    assert_eq!(format.parse(&written).unwrap(), doc);
}

#[test]
fn test_worklog_written_form() {
    let doc = parse_markdown(WORKLOG);
    let written = MarkdownFormat::default().serialize(&doc).unwrap();

    assert!(written.starts_with("# Sprint 42 work log\n\n## Summary\n"));
    assert!(written.contains("Migrated the **billing** export to the new queue."));
    assert!(written.contains("| Task | Hours |\n| --- | --- |\n| Queue consumer | 5 |"));
    assert!(written.contains("| **Total** | **8** |"));
    assert!(written.contains("```bash\n./backfill.sh --since 2024-01-01\n```"));
}

#[test]
fn test_headings_keep_literal_markers() {
    let doc = parse_markdown("### **Not** bold");
    let written = MarkdownFormat::default().serialize(&doc).unwrap();
    assert_eq!(written, "### **Not** bold");
}

#[test]
fn test_empty_document_writes_empty_string() {
    let doc = adf_babel::Document::default();
    assert_eq!(MarkdownFormat::default().serialize(&doc).unwrap(), "");
}
