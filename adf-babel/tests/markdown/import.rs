use adf_babel::format::Format;
use adf_babel::formats::markdown::parser::{parse_markdown, parse_with_diagnostics};
use adf_babel::formats::markdown::{Diagnostic, MarkdownFormat, ParseOptions};
use adf_babel::ir::nodes::{Block, CodeBlock, Heading, HeadingLevel, Inline, Paragraph};

const WORKLOG: &str = include_str!("../fixtures/worklog.md");

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

fn bold(s: &str) -> Inline {
    Inline::Bold(s.to_string())
}

fn heading(level: u8, s: &str) -> Block {
    Block::Heading(Heading {
        level: HeadingLevel::new(level).unwrap(),
        content: vec![text(s)],
    })
}

#[test]
fn test_worklog_block_sequence() {
    init_logger();
    let doc = MarkdownFormat::default()
        .parse(WORKLOG)
        .expect("markup parsing never fails");

    let kinds: Vec<&str> = doc.children.iter().map(Block::node_type).collect();
    assert_eq!(
        kinds,
        vec![
            "Heading",
            "Paragraph",
            "Heading",
            "Paragraph",
            "Paragraph",
            "Heading",
            "Table",
            "Paragraph",
            "CodeBlock",
            "Paragraph",
            "Paragraph",
        ]
    );

    assert_eq!(doc.children[0], heading(1, "Sprint 42 work log"));
    assert_eq!(doc.children[5], heading(3, "Hours"));
    assert_eq!(
        doc.children[3],
        Block::Paragraph(Paragraph {
            content: vec![
                text("Migrated the "),
                bold("billing"),
                text(" export to the new queue."),
            ],
        })
    );
    assert_eq!(
        doc.children[8],
        Block::CodeBlock(CodeBlock {
            language: "bash".to_string(),
            content: "./backfill.sh --since 2024-01-01".to_string(),
        })
    );
}

#[test]
fn test_worklog_trailing_newline_is_a_blank_paragraph() {
    let doc = parse_markdown(WORKLOG);
    match doc.children.last() {
        Some(Block::Paragraph(para)) => assert!(para.is_blank()),
        other => panic!("expected trailing blank paragraph, got {other:?}"),
    }
}

#[test]
fn test_java_code_block() {
    let doc = parse_markdown("```java\nint x=1;\n```");
    assert_eq!(
        doc.children,
        vec![Block::CodeBlock(CodeBlock {
            language: "java".to_string(),
            content: "int x=1;".to_string(),
        })]
    );
}

#[test]
fn test_unterminated_fence_swallows_the_rest() {
    init_logger();
    let source = "intro\n```python\nprint(1)\n# not a heading\n| not | a table |";
    let parsed = parse_with_diagnostics(source, &ParseOptions::default());

    assert_eq!(
        parsed.document.children,
        vec![
            Block::Paragraph(Paragraph {
                content: vec![text("intro")],
            }),
            Block::CodeBlock(CodeBlock {
                language: "python".to_string(),
                content: "print(1)\n# not a heading\n| not | a table |".to_string(),
            }),
        ]
    );
    assert_eq!(
        parsed.diagnostics,
        vec![Diagnostic::UnterminatedFence { line: 2 }]
    );
}

#[test]
fn test_bold_split_in_paragraph_but_not_heading() {
    let doc = parse_markdown("## **Release** notes\n**bold** and plain");
    assert_eq!(
        doc.children,
        vec![
            heading(2, "**Release** notes"),
            Block::Paragraph(Paragraph {
                content: vec![bold("bold"), text(" and plain")],
            }),
        ]
    );
}

#[test]
fn test_unbalanced_bold_is_reported_but_kept() {
    let parsed = parse_with_diagnostics("ok\nthis **trails", &ParseOptions::default());
    assert_eq!(
        parsed.document.children[1],
        Block::Paragraph(Paragraph {
            content: vec![text("this "), bold("trails")],
        })
    );
    assert_eq!(parsed.diagnostics, vec![Diagnostic::UnbalancedBold { line: 2 }]);
}

#[test]
fn test_default_language_comes_from_options() {
    let format = MarkdownFormat::new(ParseOptions {
        default_language: "sql".to_string(),
    });
    let doc = format.parse("```\nselect 1;\n```").unwrap();
    assert_eq!(
        doc.children,
        vec![Block::CodeBlock(CodeBlock {
            language: "sql".to_string(),
            content: "select 1;".to_string(),
        })]
    );
}

#[test]
fn test_crlf_input_matches_lf_input() {
    let lf = "# Title\n| a | b |\n|---|---|\n| 1 | 2 |\nend";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(parse_markdown(&crlf), parse_markdown(lf));
}

#[test]
fn test_clean_worklog_has_no_diagnostics() {
    let parsed = parse_with_diagnostics(WORKLOG, &ParseOptions::default());
    assert!(parsed.diagnostics.is_empty());
}
