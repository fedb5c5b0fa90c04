// src/data/document.rs

//! Data containers for one artifact file: [`LogDocument`], [`FileContent`],
//! the derived [`FormatTag`], the transient [`TableRow`] view, and the
//! table-renderer state machine [`TableState`].

use std::fmt;

use crate::common::{FPath, FileSz, Line, Lines};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FileContent, LogDocument
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decoded content of one artifact file.
///
/// The reader substitutes `Binary` for files whose bytes are not valid
/// UTF-8; renderers never see undecoded bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileContent {
    /// Whitespace-stripped text lines, empty lines dropped.
    Text(Lines),
    /// File bytes were not valid UTF-8; only the byte length is retained.
    Binary(FileSz),
}

/// One artifact file as read from disk. Immutable once read; owned by the
/// calling pipeline for the duration of one render pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogDocument {
    /// file name (basename), used for the per-file banner
    pub name: FPath,
    pub content: FileContent,
}

impl LogDocument {
    pub fn new(
        name: FPath,
        content: FileContent,
    ) -> LogDocument {
        LogDocument { name, content }
    }

    /// The text lines of this document, or `None` for binary content.
    pub fn lines(&self) -> Option<&Lines> {
        match &self.content {
            FileContent::Text(lines) => Some(lines),
            FileContent::Binary(_) => None,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FormatTag
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Rendering mode decided for a [`LogDocument`] by
/// [`classify`](crate::data::classify::classify).
///
/// Derived, never stored. Every document maps to exactly one `FormatTag`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatTag {
    /// a ZiggyDB WAL dump; rendered by the table-aware renderer
    StructuredLog,
    /// a leveled application log (`ERROR`/`WARNING`/`INFO`/`DEBUG`)
    LeveledLog,
    /// text with no recognized structure; passthrough render
    PlainText,
    /// content was not valid UTF-8
    Binary,
}

impl fmt::Display for FormatTag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FormatTag::StructuredLog => write!(f, "WAL Dump"),
            FormatTag::LeveledLog => write!(f, "Generic Log"),
            FormatTag::PlainText => write!(f, "Plain Text"),
            FormatTag::Binary => write!(f, "Binary"),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TableRow
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Derived view of one data line inside a WAL dump table block.
/// Fields are trimmed of surrounding whitespace.
#[derive(Debug, Eq, PartialEq)]
pub struct TableRow {
    pub operation: String,
    pub key: String,
    pub value: String,
}

impl TableRow {
    /// Split a `|`-delimited table line into a `TableRow`.
    ///
    /// Returns `None` for a malformed row (a missing column); the caller
    /// falls back to rendering the raw line.
    pub fn from_line(line: &Line) -> Option<TableRow> {
        let mut fields: Vec<&str> = line.split(crate::common::TABLE_DELIMITER).collect();
        // a trailing delimiter yields one empty trailing field; it is not
        // a value column ("| SET | userA |" has only two columns)
        if fields.last() == Some(&"") {
            fields.pop();
        }
        if fields.len() < 4 {
            return None;
        }

        Some(TableRow {
            operation: fields[1].trim().to_string(),
            key: fields[2].trim().to_string(),
            value: fields[3].trim().to_string(),
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TableState
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The table-aware renderer's entire state machine.
///
/// Transitions (see [`TableAwareRenderer`]):
/// * border and header lines enter `InTable`
/// * binary marker, WAL-valid marker, and transaction marker lines
///   exit to `Normal`
/// * any other line leaves the state unchanged; in particular a
///   `|`-prefixed line while `Normal` does not re-enter `InTable`
///
/// [`TableAwareRenderer`]: crate::printer::renderers::TableAwareRenderer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableState {
    Normal,
    InTable,
}
