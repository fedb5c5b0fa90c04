// src/data/classify.rs

//! The format heuristic: decide which [`FormatTag`] an artifact file has.
//!
//! Classification is a pure total function of a [`LogDocument`]'s content.
//! The decision order is a contract, not incidental: structure-revealing
//! marker tokens are checked before generic keyword scanning, so a WAL
//! dump that happens to contain the word "ERROR" in a value is still
//! rendered as a table, not as a leveled log.
//!
//! [`FormatTag`]: crate::data::document::FormatTag
//! [`LogDocument`]: crate::data::document::LogDocument

use crate::common::{
    Line,
    BINARY_MARKER_PREFIX,
    TABLE_BORDER_PREFIX,
    WAL_VALID_PREFIX,
};
use crate::data::document::{FileContent, FormatTag, LogDocument};

use ::lazy_static::lazy_static;
use ::regex::Regex;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// log levels
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Log level keyword of a leveled application log line.
///
/// Variants are declared in match-precedence order; when one line contains
/// several keywords the highest level wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// All levels in fixed match-precedence order.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// The bracketed tag prepended to a matched line, e.g. `"[ERROR]"`.
    pub const fn tag(&self) -> &'static str {
        match self {
            LogLevel::Error => "[ERROR]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Info => "[INFO]",
            LogLevel::Debug => "[DEBUG]",
        }
    }
}

lazy_static! {
    // whole-word case-insensitive; "ERRORS" must not match
    static ref REGEX_LEVEL_ERROR: Regex = Regex::new(r"(?i)\bERROR\b").unwrap();
    static ref REGEX_LEVEL_WARNING: Regex = Regex::new(r"(?i)\bWARNING\b").unwrap();
    static ref REGEX_LEVEL_INFO: Regex = Regex::new(r"(?i)\bINFO\b").unwrap();
    static ref REGEX_LEVEL_DEBUG: Regex = Regex::new(r"(?i)\bDEBUG\b").unwrap();
}

/// Match `line` against the whole-word level keywords, in fixed precedence
/// `ERROR > WARNING > INFO > DEBUG`. Case-insensitive, word-boundary match,
/// not substring; `"ERRORS_COUNT=3"` does not match, `"the ERROR occurred"`
/// does.
pub fn match_level(line: &Line) -> Option<LogLevel> {
    for level in LogLevel::ALL.iter() {
        let regex: &Regex = match level {
            LogLevel::Error => &REGEX_LEVEL_ERROR,
            LogLevel::Warning => &REGEX_LEVEL_WARNING,
            LogLevel::Info => &REGEX_LEVEL_INFO,
            LogLevel::Debug => &REGEX_LEVEL_DEBUG,
        };
        if regex.is_match(line) {
            return Some(*level);
        }
    }

    None
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// classify
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decide the [`FormatTag`] of a [`LogDocument`]. Pure, total,
/// deterministic, no side effects.
///
/// Decision order, first match wins:
///
/// 1. `Binary` — the reader signaled binary content, or a line begins with
///    the reserved binary marker.
/// 2. `StructuredLog` — any line begins with the WAL-valid marker or a
///    table border token.
/// 3. `LeveledLog` — any line has a whole-word level keyword match.
/// 4. `PlainText` otherwise.
///
/// [`FormatTag`]: crate::data::document::FormatTag
/// [`LogDocument`]: crate::data::document::LogDocument
pub fn classify(document: &LogDocument) -> FormatTag {
    let lines = match &document.content {
        FileContent::Binary(_) => return FormatTag::Binary,
        FileContent::Text(lines) => lines,
    };

    if lines
        .iter()
        .any(|line| line.starts_with(BINARY_MARKER_PREFIX))
    {
        return FormatTag::Binary;
    }

    if lines
        .iter()
        .any(|line| line.starts_with(WAL_VALID_PREFIX) || line.starts_with(TABLE_BORDER_PREFIX))
    {
        return FormatTag::StructuredLog;
    }

    if lines.iter().any(|line| match_level(line).is_some()) {
        return FormatTag::LeveledLog;
    }

    FormatTag::PlainText
}
