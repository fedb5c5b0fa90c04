// src/tests/classify_tests.rs

//! tests for `classify.rs` functions

use ::test_case::test_case;

use crate::data::classify::{classify, match_level, LogLevel};
use crate::data::document::{FileContent, FormatTag, LogDocument};

fn document_from(lines: &[&str]) -> LogDocument {
    LogDocument::new(
        String::from("test.log"),
        FileContent::Text(lines.iter().map(|s| s.to_string()).collect()),
    )
}

#[test_case(&["✓ Valid WAL file: wal.log"], FormatTag::StructuredLog; "wal marker")]
#[test_case(&["+---------+---------------+"], FormatTag::StructuredLog; "border")]
#[test_case(&["some text", "+---------+"], FormatTag::StructuredLog; "border later line")]
#[test_case(&["2024-01-01 ERROR disk full"], FormatTag::LeveledLog; "error keyword")]
#[test_case(&["a warning was issued"], FormatTag::LeveledLog; "lowercase warning")]
#[test_case(&["hello world"], FormatTag::PlainText; "plain")]
#[test_case(&["ERRORS_COUNT=3"], FormatTag::PlainText; "no word boundary")]
#[test_case(&[], FormatTag::PlainText; "empty")]
#[test_case(&["--- Binary Content (12 bytes) ---"], FormatTag::Binary; "binary marker line")]
fn test_classify(
    lines: &[&str],
    expected: FormatTag,
) {
    let document = document_from(lines);
    assert_eq!(classify(&document), expected);
}

/// structure-revealing markers are checked before keyword scanning;
/// a WAL dump containing "ERROR" in a value is still a table
#[test]
fn test_classify_marker_precedes_keywords() {
    let document = document_from(&[
        "✓ Valid WAL file: wal.log",
        "| SET | status | ERROR occurred |",
    ]);
    assert_eq!(classify(&document), FormatTag::StructuredLog);
}

#[test]
fn test_classify_binary_content() {
    let document = LogDocument::new(String::from("dump.bin"), FileContent::Binary(42));
    assert_eq!(classify(&document), FormatTag::Binary);
}

/// same input, same tag, every call
#[test]
fn test_classify_deterministic() {
    let document = document_from(&["INFO starting up", "DEBUG details"]);
    let first = classify(&document);
    for _ in 0..3 {
        assert_eq!(classify(&document), first);
    }
}

#[test_case("2024-01-01 ERROR disk full", Some(LogLevel::Error); "error")]
#[test_case("error: lowercase", Some(LogLevel::Error); "error lowercase")]
#[test_case("WARNING low memory", Some(LogLevel::Warning); "warning")]
#[test_case("INFO started", Some(LogLevel::Info); "info")]
#[test_case("DEBUG verbose", Some(LogLevel::Debug); "debug")]
#[test_case("ERRORS_COUNT=3", None; "errors no boundary")]
#[test_case("the ERROR occurred", Some(LogLevel::Error); "error mid line")]
#[test_case("DEBUGGING session", None; "debugging no boundary")]
#[test_case("nothing to see", None; "no keyword")]
fn test_match_level(
    line: &str,
    expected: Option<LogLevel>,
) {
    assert_eq!(match_level(&line.to_string()), expected);
}

/// when one line has several keywords the highest level wins,
/// regardless of position within the line
#[test_case("DEBUG then ERROR", LogLevel::Error; "error beats debug")]
#[test_case("INFO and WARNING", LogLevel::Warning; "warning beats info")]
#[test_case("DEBUG and INFO", LogLevel::Info; "info beats debug")]
fn test_match_level_precedence(
    line: &str,
    expected: LogLevel,
) {
    assert_eq!(match_level(&line.to_string()), Some(expected));
}
