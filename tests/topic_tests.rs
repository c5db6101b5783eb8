// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! End-to-end tests for topic loading and printing.
//!
//! Run with: cargo test --test topic_tests

mod common;

use common::{remove_fixture, write_fixture};
use robolog::{Conventions, FieldValue, LogError, Topic};

#[test]
fn test_load_basic_topic() {
    let path = write_fixture("basic.csv", "%time,field_a,field_b\n1000,1,x\n2000,2\n");

    let conventions = Conventions {
        field_prefix: "field_".to_string(),
        ..Conventions::default()
    };
    let mut topic = Topic::new("test_topic").with_conventions(conventions);
    topic.load(&path).unwrap();

    assert!(topic.is_initialized());
    assert_eq!(topic.name(), "test_topic");
    assert_eq!(topic.field_labels(), ["a", "b"]);
    assert!(!topic.has_header());
    assert!(!topic.is_fault_topic());
    assert!(topic.format_error().is_none());

    let messages = topic.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].time, Some(1000));
    assert_eq!(messages[1].time, Some(2000));
    assert_eq!(
        messages[0].fields,
        vec![FieldValue::Integer(1), FieldValue::Text("x".to_string())]
    );
    // The short second row pads its missing trailing field
    assert_eq!(
        messages[1].fields,
        vec![FieldValue::Integer(2), FieldValue::Empty]
    );

    remove_fixture(&path);
}

#[test]
fn test_every_message_matches_field_count() {
    let path = write_fixture(
        "field_count.csv",
        "%time,field.a,field.b,field.c\n1,1\n2,1,2\n3,1,2,3\n",
    );

    let topic = Topic::from_file(&path, "counts").unwrap();
    for message in topic.messages() {
        assert_eq!(message.fields.len(), topic.field_labels().len());
    }

    remove_fixture(&path);
}

#[test]
fn test_row_format_error_truncates_ingestion() {
    let path = write_fixture(
        "overflow.csv",
        "%time,field.a,field.b\n1,1,1\n2,2,2\n3,3,3,3\n4,4,4\n",
    );

    let mut topic = Topic::new("overflow");
    topic.load(&path).unwrap();

    // Rows before the bad one survive; the bad row and everything after
    // it are dropped.
    assert!(topic.is_initialized());
    assert_eq!(topic.messages().len(), 2);

    match topic.format_error() {
        Some(LogError::RowFormat {
            line,
            tokens,
            columns,
            ..
        }) => {
            assert_eq!(*line, 3);
            assert_eq!(*tokens, 4);
            assert_eq!(*columns, 3);
        }
        other => panic!("expected RowFormat error, got {other:?}"),
    }

    remove_fixture(&path);
}

#[test]
fn test_missing_file_fails_load() {
    let mut topic = Topic::new("missing");
    let err = topic
        .load(std::env::temp_dir().join("robolog_no_such_file.csv"))
        .unwrap_err();
    assert!(matches!(err, LogError::FileOpen { .. }));
    assert!(!topic.is_initialized());
}

#[test]
fn test_empty_file_fails_header_read() {
    let path = write_fixture("empty.csv", "");

    let mut topic = Topic::new("empty");
    let err = topic.load(&path).unwrap_err();
    assert!(matches!(err, LogError::HeaderRead { .. }));
    assert!(!topic.is_initialized());

    remove_fixture(&path);
}

#[test]
fn test_blank_header_fails_header_read() {
    let path = write_fixture("blank_header.csv", "   \n1,2\n");

    let mut topic = Topic::new("blank");
    let err = topic.load(&path).unwrap_err();
    assert!(matches!(err, LogError::HeaderRead { .. }));

    remove_fixture(&path);
}

#[test]
fn test_fault_topic_classification() {
    let path = write_fixture("fault.csv", "%time,field.a\n0,1\n");

    let topic = Topic::from_file(&path, "failure_status_motor1").unwrap();
    assert!(topic.is_fault_topic());

    let topic = Topic::from_file(&path, "motor1").unwrap();
    assert!(!topic.is_fault_topic());

    // Name shorter than the prefix is never a fault topic
    let topic = Topic::from_file(&path, "f").unwrap();
    assert!(!topic.is_fault_topic());

    remove_fixture(&path);
}

#[test]
fn test_fault_topic_custom_prefix() {
    let path = write_fixture("fault_custom.csv", "%time,field.a\n0,1\n");
    let conventions = Conventions {
        fault_prefix: "fault_".to_string(),
        ..Conventions::default()
    };

    for (name, expected) in [("fault_motor1", true), ("motor1", false), ("faul_1", false)] {
        let mut topic = Topic::new(name).with_conventions(conventions.clone());
        topic.load(&path).unwrap();
        assert_eq!(topic.is_fault_topic(), expected, "topic name {name:?}");
    }

    remove_fixture(&path);
}

#[test]
fn test_clear_is_idempotent() {
    let path = write_fixture("clear.csv", "%time,field.a\n0,1\n");

    let mut topic = Topic::from_file(&path, "failure_status_x").unwrap();
    assert!(topic.is_initialized());

    topic.clear();
    topic.clear();

    assert_eq!(topic.name(), "");
    assert!(topic.messages().is_empty());
    assert!(topic.field_labels().is_empty());
    assert!(!topic.is_initialized());
    assert!(!topic.is_fault_topic());
    assert!(!topic.has_header());
    assert_eq!(topic.widths().field(0), 0);

    remove_fixture(&path);
}

#[test]
fn test_width_monotonicity() {
    let path = write_fixture(
        "widths.csv",
        "%time,field.long_label,field.b\n0,1,some_text\n1000,123456,x\n",
    );

    let topic = Topic::from_file(&path, "widths").unwrap();
    let widths = topic.widths();

    for message in topic.messages() {
        for (index, field) in message.fields.iter().enumerate() {
            assert!(widths.field(index) >= field.width());
        }
    }
    for (index, label) in topic.field_labels().iter().enumerate() {
        assert!(widths.field(index) >= label.len());
    }

    remove_fixture(&path);
}

#[test]
fn test_print_negative_start_emits_nothing() {
    let path = write_fixture("neg_start.csv", "%time,field.a\n0,1\n");

    let topic = Topic::from_file(&path, "neg").unwrap();
    let mut out = Vec::new();
    let printed = topic.write_range(&mut out, -1, 5, " | ").unwrap();

    assert_eq!(printed, 0);
    assert!(out.is_empty(), "no header or divider may be emitted");

    remove_fixture(&path);
}

#[test]
fn test_print_header_on_empty_topic() {
    let path = write_fixture("header_only.csv", "%time,field.a\n");

    let topic = Topic::from_file(&path, "empty").unwrap();
    assert!(topic.messages().is_empty());

    let mut out = Vec::new();
    let length = topic.write_header(&mut out, " | ").unwrap();
    assert_eq!(length, 0);
    assert!(out.is_empty());

    remove_fixture(&path);
}

#[test]
fn test_print_exact_output() {
    let path = write_fixture("print_plain.csv", "%time,field.a\n0,42\n");

    let topic = Topic::from_file(&path, "plain").unwrap();
    let mut out = Vec::new();
    let printed = topic.write_range(&mut out, 0, -1, " | ").unwrap();
    assert_eq!(printed, 1);

    let expected_header = format!(" | Index | {:>26} | {:>2} | \n", "Date/Time Stamp", "a");
    let expected_row = format!(
        " | {:>5} | {} | {:>2} | \n",
        0, "1970/01/01 00:00:00.000000", 42
    );
    // Layout length counts the sub-record widths even though the columns
    // are not printed: 5 + 26 + 5 + 10 + 5 + 2 + (6 + 1) * 3
    let expected_divider = format!("{}\n", "-".repeat(74));

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, expected_header + &expected_divider + &expected_row);

    remove_fixture(&path);
}

#[test]
fn test_print_header_subrecord_output() {
    let path = write_fixture(
        "print_header.csv",
        "%time,field.header.seq,field.header.stamp,field.header.frame_id,field.x\n0,7,1000,base,1.5\n",
    );

    let topic = Topic::from_file(&path, "subrecord").unwrap();
    assert!(topic.has_header());

    let mut out = Vec::new();
    let printed = topic.write_range(&mut out, 0, -1, " | ").unwrap();
    assert_eq!(printed, 1);

    let expected_header = format!(
        " | Index | {:>26} | {:>5} | {:>10} | {:>5} | {:>3} | \n",
        "Date/Time Stamp", "SeqID", "Time Stamp", "Frame", "x"
    );
    let expected_row = format!(
        " | {:>5} | {} | {:>5} | {:>10} | {:>5} | {:>3} | \n",
        0, "1970/01/01 00:00:00.000000", 7, 1000, "base", 1.5
    );
    let expected_divider = format!("{}\n", "-".repeat(75));

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, expected_header + &expected_divider + &expected_row);

    remove_fixture(&path);
}

#[test]
fn test_print_count_is_clamped() {
    let path = write_fixture("clamp.csv", "%time,field.a\n0,1\n1,2\n2,3\n");

    let topic = Topic::from_file(&path, "clamp").unwrap();

    let mut out = Vec::new();
    assert_eq!(topic.write_range(&mut out, 1, 100, " | ").unwrap(), 2);

    let mut out = Vec::new();
    assert_eq!(topic.write_range(&mut out, 10, 5, " | ").unwrap(), 0);

    let mut out = Vec::new();
    assert_eq!(topic.write_range(&mut out, 0, -1, " | ").unwrap(), 3);

    remove_fixture(&path);
}

#[test]
fn test_json_export() {
    let path = write_fixture("export.csv", "%time,field.a,field.b\n1000,1,x\n2000,2,\n");

    let topic = Topic::from_file(&path, "export").unwrap();
    let json = topic.to_json(false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"], "export");
    assert_eq!(value["has_header"], false);
    assert_eq!(value["fault_topic"], false);
    assert_eq!(value["field_labels"], serde_json::json!(["a", "b"]));

    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["fields"][0], serde_json::json!({"Integer": 1}));
    assert_eq!(messages[1]["fields"][1], serde_json::json!("Empty"));

    remove_fixture(&path);
}
