use adf_babel::format::Format;
use adf_babel::formats::adf::serializer::{serialize_to_adf, AdfOptions};
use adf_babel::formats::adf::AdfFormat;
use adf_babel::formats::markdown::parser::parse_markdown;
use serde_json::{json, Value};
use std::collections::HashMap;

const WORKLOG: &str = include_str!("../fixtures/worklog.md");

fn worklog_value() -> Value {
    let json = AdfFormat::default()
        .serialize(&parse_markdown(WORKLOG))
        .unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_worklog_top_level_shape() {
    let value = worklog_value();
    assert_eq!(value["type"], "doc");
    assert_eq!(value["version"], 1);

    let types: Vec<&str> = value["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|node| node["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec![
            "heading",
            "paragraph",
            "heading",
            "paragraph",
            "paragraph",
            "heading",
            "table",
            "paragraph",
            "codeBlock",
            "paragraph",
            "paragraph",
        ]
    );
}

#[test]
fn test_worklog_heading_and_code_block() {
    let value = worklog_value();
    assert_eq!(
        value["content"][2],
        json!({
            "type": "heading",
            "attrs": {"level": 2},
            "content": [{"type": "text", "text": "Summary"}]
        })
    );
    assert_eq!(
        value["content"][8],
        json!({
            "type": "codeBlock",
            "attrs": {"language": "bash"},
            "content": [{"type": "text", "text": "./backfill.sh --since 2024-01-01"}]
        })
    );
}

#[test]
fn test_worklog_total_row_is_strong() {
    let value = worklog_value();
    let total_row = &value["content"][6]["content"][3];
    assert_eq!(
        total_row,
        &json!({
            "type": "tableRow",
            "content": [
                {"type": "tableCell", "content": [
                    {"type": "paragraph", "content": [
                        {"type": "text", "text": "Total", "marks": [{"type": "strong"}]}
                    ]}
                ]},
                {"type": "tableCell", "content": [
                    {"type": "paragraph", "content": [
                        {"type": "text", "text": "8", "marks": [{"type": "strong"}]}
                    ]}
                ]}
            ]
        })
    );
}

#[test]
fn test_pretty_output_is_indented() {
    let json = serialize_to_adf(&parse_markdown("hi"), &AdfOptions::default()).unwrap();
    assert!(json.starts_with("{\n  \"type\": \"doc\""));
}

#[test]
fn test_serialize_with_options_through_format() {
    let mut options = HashMap::new();
    options.insert("pretty".to_string(), "no".to_string());
    options.insert("number-column".to_string(), "yes".to_string());

    let json = AdfFormat::default()
        .serialize_with_options(&parse_markdown("| n |"), &options)
        .unwrap();
    assert!(!json.contains('\n'));
    assert!(json.contains(r#""attrs":{"isNumberColumnEnabled":true,"layout":"default"}"#));
}
