// src/tests/renderers_tests.rs

//! tests for `renderers.rs` functions
//!
//! Renderers are pure; assertions are made on [`StyledLine`] span
//! classes and on the unstyled text (what a non-styling sink prints).

use ::test_case::test_case;

use crate::common::Lines;
use crate::data::document::{FileContent, FormatTag, LogDocument, TableState};
use crate::printer::renderers::{
    operation_style,
    render_binary,
    render_document,
    value_style,
    LeveledRenderer,
    PlainRenderer,
    TableAwareRenderer,
};
use crate::printer::styles::{StyleClass, StyledLine};

fn lines_from(lines: &[&str]) -> Lines {
    lines.iter().map(|s| s.to_string()).collect()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TableAwareRenderer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("set", StyleClass::OperationInsert; "set")]
#[test_case("SET", StyleClass::OperationInsert; "set upper")]
#[test_case("ListPush", StyleClass::OperationInsert; "listpush mixed")]
#[test_case("delete", StyleClass::OperationRemove; "delete")]
#[test_case("LISTPOP", StyleClass::OperationRemove; "listpop upper")]
#[test_case("get", StyleClass::Neutral; "get")]
#[test_case("", StyleClass::Neutral; "empty")]
fn test_operation_style(
    operation: &str,
    expected: StyleClass,
) {
    assert_eq!(operation_style(operation), expected);
}

#[test_case("-", StyleClass::ValuePlaceholder; "dash")]
#[test_case("", StyleClass::ValuePlaceholder; "empty")]
#[test_case("true", StyleClass::ValueBoolean; "true lower")]
#[test_case("FALSE", StyleClass::ValueBoolean; "false upper")]
#[test_case("42", StyleClass::ValueNumeric; "integer")]
#[test_case("3.14", StyleClass::ValueNumeric; "float")]
#[test_case("3.14.15", StyleClass::ValueDefault; "two dots")]
#[test_case(".", StyleClass::ValueDefault; "lone dot")]
#[test_case("4x2", StyleClass::ValueDefault; "not a number")]
#[test_case("hello", StyleClass::ValueDefault; "string")]
fn test_value_style(
    value: &str,
    expected: StyleClass,
) {
    assert_eq!(value_style(value), expected);
}

/// row fields are padded to widths 9/13/21 exactly; alignment is part of
/// the contract for visual diffing across rows
#[test]
fn test_table_row_fixed_widths() {
    let mut renderer = TableAwareRenderer::new();
    renderer.render_line(&String::from("+---------+"));
    let styled: StyledLine = renderer.render_line(&String::from("| SET | userA | 42 |"));
    assert_eq!(
        styled.text(),
        "| SET       | userA         | 42                    |",
    );
    let classes: Vec<StyleClass> = styled.spans.iter().map(|(class, _)| *class).collect();
    assert!(classes.contains(&StyleClass::OperationInsert));
    assert!(classes.contains(&StyleClass::ValueNumeric));
    assert!(classes.contains(&StyleClass::Border));
}

#[test]
fn test_table_row_remove_placeholder() {
    let mut renderer = TableAwareRenderer::new();
    renderer.render_line(&String::from("+---------+"));
    let styled: StyledLine = renderer.render_line(&String::from("| DELETE | userA | - |"));
    let classes: Vec<StyleClass> = styled.spans.iter().map(|(class, _)| *class).collect();
    assert!(classes.contains(&StyleClass::OperationRemove));
    assert!(classes.contains(&StyleClass::ValuePlaceholder));
}

/// a malformed row (missing a column) degrades to the raw line in a
/// neutral style; no panic, rendering continues
#[test]
fn test_table_row_malformed_falls_back() {
    let mut renderer = TableAwareRenderer::new();
    renderer.render_line(&String::from("+---------+"));
    let styled: StyledLine = renderer.render_line(&String::from("| SET | userA |"));
    assert_eq!(styled.spans, vec![(StyleClass::Neutral, String::from("| SET | userA |"))]);
    assert_eq!(renderer.state(), TableState::InTable);
}

/// a row line inside a table is a row even when a transaction marker
/// appears within a field value
#[test]
fn test_table_row_checked_before_transaction_markers() {
    let mut renderer = TableAwareRenderer::new();
    renderer.render_line(&String::from("+---------+"));
    let styled: StyledLine =
        renderer.render_line(&String::from("| SET | note | Transaction started |"));
    assert_eq!(renderer.state(), TableState::InTable);
    let classes: Vec<StyleClass> = styled.spans.iter().map(|(class, _)| *class).collect();
    assert!(classes.contains(&StyleClass::OperationInsert));
    assert!(!classes.contains(&StyleClass::TxnStarted));
}

#[test_case("+----------+", StyleClass::Border, TableState::InTable; "border enters")]
#[test_case("| Operation | Key           | Value", StyleClass::Header, TableState::InTable; "header enters")]
#[test_case("✓ Valid WAL file: wal.log", StyleClass::WalMarker, TableState::Normal; "wal marker exits")]
#[test_case("--- Binary Content (3 bytes) ---", StyleClass::BinaryMarker, TableState::Normal; "binary marker exits")]
#[test_case("Transaction started", StyleClass::TxnStarted, TableState::Normal; "txn start exits")]
#[test_case("Transaction Committed", StyleClass::TxnCommitted, TableState::Normal; "txn commit exits")]
#[test_case("Transaction rolled back", StyleClass::TxnRolledBack, TableState::Normal; "txn rollback exits")]
#[test_case("unremarkable line", StyleClass::Default, TableState::InTable; "ordinary line keeps state")]
fn test_table_state_transitions_from_intable(
    line: &str,
    expected_class: StyleClass,
    expected_state: TableState,
) {
    let mut renderer = TableAwareRenderer::new();
    // enter the table first
    renderer.render_line(&String::from("+---------+"));
    assert_eq!(renderer.state(), TableState::InTable);
    let styled: StyledLine = renderer.render_line(&line.to_string());
    assert_eq!(styled.spans[0].0, expected_class);
    assert_eq!(renderer.state(), expected_state);
}

/// a `|`-prefixed line encountered while `Normal` does not re-enter table
/// mode; only border and header lines do
#[test]
fn test_table_no_implicit_reentry() {
    let mut renderer = TableAwareRenderer::new();
    assert_eq!(renderer.state(), TableState::Normal);
    let styled: StyledLine = renderer.render_line(&String::from("| SET | userA | 42 |"));
    assert_eq!(renderer.state(), TableState::Normal);
    assert_eq!(
        styled.spans,
        vec![(StyleClass::Default, String::from("| SET | userA | 42 |"))],
    );
}

#[test]
fn test_table_render_skips_empty_lines() {
    let lines = lines_from(&["+---+", "", "Transaction Committed"]);
    let styled = TableAwareRenderer::new().render(&lines);
    assert_eq!(styled.len(), 2);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LeveledRenderer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("2024-01-01 ERROR disk full", Some((StyleClass::LevelError, "[ERROR]")); "error tagged")]
#[test_case("WARNING low memory", Some((StyleClass::LevelWarning, "[WARNING]")); "warning tagged")]
#[test_case("info: service up", Some((StyleClass::LevelInfo, "[INFO]")); "info lowercase tagged")]
#[test_case("DEBUG verbose", Some((StyleClass::LevelDebug, "[DEBUG]")); "debug tagged")]
#[test_case("ERRORS_COUNT=3", None; "no word boundary no tag")]
#[test_case("just text", None; "no keyword no tag")]
fn test_leveled_render_line(
    line: &str,
    expected_tag: Option<(StyleClass, &str)>,
) {
    let styled: StyledLine = LeveledRenderer::render_line(&line.to_string());
    match expected_tag {
        Some((class, tag)) => {
            assert_eq!(styled.spans[0], (class, tag.to_string()));
            assert_eq!(styled.text(), format!("{} {}", tag, line));
        }
        None => {
            assert_eq!(styled.spans, vec![(StyleClass::Default, line.to_string())]);
        }
    }
}

/// each line is classified independently; no state carries across lines
#[test]
fn test_leveled_render_lines_independent() {
    let lines = lines_from(&["ERROR one", "plain middle", "DEBUG two"]);
    let styled = LeveledRenderer::render(&lines);
    assert_eq!(styled.len(), 3);
    assert_eq!(styled[0].spans[0].0, StyleClass::LevelError);
    assert_eq!(styled[1].spans[0].0, StyleClass::Default);
    assert_eq!(styled[2].spans[0].0, StyleClass::LevelDebug);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PlainRenderer, render_binary, render_document
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_plain_render_passthrough() {
    let lines = lines_from(&["one", "", "two"]);
    let styled = PlainRenderer::render(&lines);
    assert_eq!(styled.len(), 2);
    assert_eq!(styled[0].spans, vec![(StyleClass::Default, String::from("one"))]);
    assert_eq!(styled[1].spans, vec![(StyleClass::Default, String::from("two"))]);
}

/// binary content yields exactly one line reporting the byte count,
/// never a per-line dump
#[test]
fn test_render_binary_single_line() {
    let styled = render_binary(1024);
    assert_eq!(styled.len(), 1);
    assert_eq!(styled[0].text(), "--- Binary Content (1024 bytes) ---");
}

#[test]
fn test_render_document_binary() {
    let document = LogDocument::new(String::from("dump.bin"), FileContent::Binary(7));
    let (tag, styled) = render_document(&document);
    assert_eq!(tag, FormatTag::Binary);
    assert_eq!(styled.len(), 1);
    assert_eq!(styled[0].text(), "--- Binary Content (7 bytes) ---");
}

#[test]
fn test_render_document_structured() {
    let document = LogDocument::new(
        String::from("wal.log"),
        FileContent::Text(lines_from(&[
            "✓ Valid WAL file: wal.log",
            "+---------+---------------+",
            "| Operation | Key           | Value",
            "| SET | userA | 42 |",
            "Transaction Committed",
        ])),
    );
    let (tag, styled) = render_document(&document);
    assert_eq!(tag, FormatTag::StructuredLog);
    assert_eq!(styled.len(), 5);
    assert_eq!(styled[0].spans[0].0, StyleClass::WalMarker);
    assert_eq!(styled[4].spans[0].0, StyleClass::TxnCommitted);
}

/// rendering the same document twice produces identical styled output
#[test]
fn test_render_document_idempotent() {
    let document = LogDocument::new(
        String::from("mixed.log"),
        FileContent::Text(lines_from(&[
            "+---+",
            "| SET | a | 1 |",
            "Transaction rolled back",
            "| SET | a | 1 |",
        ])),
    );
    let (tag_a, styled_a) = render_document(&document);
    let (tag_b, styled_b) = render_document(&document);
    assert_eq!(tag_a, tag_b);
    assert_eq!(styled_a, styled_b);
}
