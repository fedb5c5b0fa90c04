// src/printer/renderers.rs

//! Pure renderers: transform the lines of a classified [`LogDocument`]
//! into [`StyledLine`]s.
//!
//! Renderers never touch the terminal. They are deterministic transforms
//! over already-materialized line sequences; rendering the same document
//! twice produces identical output. The only renderer with state is
//! [`TableAwareRenderer`], whose entire state machine is the two-state
//! [`TableState`], reset per file.
//!
//! [`LogDocument`]: crate::data::document::LogDocument
//! [`StyledLine`]: crate::printer::styles::StyledLine
//! [`TableState`]: crate::data::document::TableState

use crate::common::{
    Line,
    Lines,
    BINARY_MARKER_PREFIX,
    TABLE_BORDER_PREFIX,
    TABLE_DELIMITER,
    TABLE_HEADER_PREFIX,
    TABLE_WIDTH_KEY,
    TABLE_WIDTH_OPERATION,
    TABLE_WIDTH_VALUE,
    TXN_COMMITTED,
    TXN_ROLLEDBACK,
    TXN_STARTED,
    WAL_VALID_PREFIX,
};
use crate::data::classify::{classify, match_level};
use crate::data::document::{
    FileContent,
    FormatTag,
    LogDocument,
    TableRow,
    TableState,
};
use crate::printer::styles::{StyleClass, StyledLine, StyledLines};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// render_document
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Classify `document` and render it with the renderer for its format.
///
/// Classification is recomputed here, per render pass; the returned
/// [`FormatTag`] is derived, never stored.
pub fn render_document(document: &LogDocument) -> (FormatTag, StyledLines) {
    let tag: FormatTag = classify(document);
    let styled: StyledLines = match (tag, &document.content) {
        (_, FileContent::Binary(byte_sz)) => render_binary(*byte_sz),
        (FormatTag::StructuredLog, FileContent::Text(lines)) => {
            TableAwareRenderer::new().render(lines)
        }
        (FormatTag::LeveledLog, FileContent::Text(lines)) => LeveledRenderer::render(lines),
        (_, FileContent::Text(lines)) => PlainRenderer::render(lines),
    };

    (tag, styled)
}

/// Render binary content: exactly one synthetic line stating the byte
/// count. Never a per-line dump.
pub fn render_binary(byte_sz: u64) -> StyledLines {
    vec![StyledLine::solid(
        StyleClass::BinaryMarker,
        format!("{} ({} bytes) ---", BINARY_MARKER_PREFIX, byte_sz),
    )]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TableAwareRenderer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Renderer for [`FormatTag::StructuredLog`]: a state machine over table
/// borders, headers, data rows, and transaction markers of a WAL dump.
///
/// Per-line dispatch, in priority order:
///
/// 1. binary marker line — annotated single line, exit table
/// 2. WAL-valid marker line — accent style, exit table
/// 3. table border line — border style, enter table
/// 4. table header line — header style, enter table
/// 5. in-table `|` line — parse into a [`TableRow`] and recompose with
///    fixed column widths; malformed rows degrade to the raw line
/// 6. `Transaction started` — exit table
/// 7. `Transaction Committed` — exit table
/// 8. `Transaction rolled back` — exit table
/// 9. anything else — default style, state unchanged. A `|`-prefixed line
///    reached while not in a table falls through to here; there is no
///    implicit table re-entry without a border or header line.
pub struct TableAwareRenderer {
    state: TableState,
}

impl TableAwareRenderer {
    pub fn new() -> TableAwareRenderer {
        TableAwareRenderer {
            state: TableState::Normal,
        }
    }

    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Render all `lines`, threading the table state across them.
    pub fn render(
        mut self,
        lines: &Lines,
    ) -> StyledLines {
        let mut styled = StyledLines::with_capacity(lines.len());
        for line in lines.iter() {
            if line.is_empty() {
                continue;
            }
            styled.push(self.render_line(line));
        }

        styled
    }

    /// Render one line and advance the state machine.
    pub fn render_line(
        &mut self,
        line: &Line,
    ) -> StyledLine {
        if line.starts_with(BINARY_MARKER_PREFIX) {
            self.state = TableState::Normal;
            return StyledLine::solid(StyleClass::BinaryMarker, line.as_str());
        }
        if line.starts_with(WAL_VALID_PREFIX) {
            self.state = TableState::Normal;
            return StyledLine::solid(StyleClass::WalMarker, line.as_str());
        }
        if line.starts_with(TABLE_BORDER_PREFIX) {
            self.state = TableState::InTable;
            return StyledLine::solid(StyleClass::Border, line.as_str());
        }
        if line.starts_with(TABLE_HEADER_PREFIX) {
            self.state = TableState::InTable;
            return StyledLine::solid(StyleClass::Header, line.as_str());
        }
        if self.state == TableState::InTable && line.starts_with(TABLE_DELIMITER) {
            // malformed rows degrade to the raw line; never abort the render
            return match TableRow::from_line(line) {
                Some(row) => render_table_row(&row),
                None => StyledLine::solid(StyleClass::Neutral, line.as_str()),
            };
        }
        if line.contains(TXN_STARTED) {
            self.state = TableState::Normal;
            return StyledLine::solid(StyleClass::TxnStarted, line.as_str());
        }
        if line.contains(TXN_COMMITTED) {
            self.state = TableState::Normal;
            return StyledLine::solid(StyleClass::TxnCommitted, line.as_str());
        }
        if line.contains(TXN_ROLLEDBACK) {
            self.state = TableState::Normal;
            return StyledLine::solid(StyleClass::TxnRolledBack, line.as_str());
        }

        StyledLine::solid(StyleClass::Default, line.as_str())
    }
}

impl Default for TableAwareRenderer {
    fn default() -> TableAwareRenderer {
        TableAwareRenderer::new()
    }
}

/// Style class of a table row operation field.
///
/// Case-insensitive: `set`/`listpush` are insert-class, `delete`/`listpop`
/// are remove-class, anything else is neutral.
pub fn operation_style(operation: &str) -> StyleClass {
    let lower: String = operation.to_lowercase();
    match lower.as_str() {
        "set" | "listpush" => StyleClass::OperationInsert,
        "delete" | "listpop" => StyleClass::OperationRemove,
        _ => StyleClass::Neutral,
    }
}

/// Style class of a table row value field, checks in order:
/// placeholder (`-` or empty), boolean, numeric (integer or float;
/// at most one `.`), else default.
pub fn value_style(value: &str) -> StyleClass {
    if value == "-" || value.is_empty() {
        return StyleClass::ValuePlaceholder;
    }
    let lower: String = value.to_lowercase();
    if lower == "true" || lower == "false" {
        return StyleClass::ValueBoolean;
    }
    let digits: String = value.replacen('.', "", 1);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return StyleClass::ValueNumeric;
    }

    StyleClass::ValueDefault
}

/// Recompose a [`TableRow`] with fixed-width fields separated by styled
/// delimiter glyphs. The pad widths are part of the contract; rows must
/// align for visual diffing.
fn render_table_row(row: &TableRow) -> StyledLine {
    let mut styled = StyledLine::new();
    styled.push(StyleClass::Border, "|");
    styled.push(StyleClass::Default, " ");
    styled.push(
        operation_style(&row.operation),
        format!("{:<width$}", row.operation, width = TABLE_WIDTH_OPERATION),
    );
    styled.push(StyleClass::Default, " ");
    styled.push(StyleClass::Border, "|");
    styled.push(StyleClass::Default, " ");
    styled.push(
        StyleClass::Neutral,
        format!("{:<width$}", row.key, width = TABLE_WIDTH_KEY),
    );
    styled.push(StyleClass::Default, " ");
    styled.push(StyleClass::Border, "|");
    styled.push(StyleClass::Default, " ");
    styled.push(
        value_style(&row.value),
        format!("{:<width$}", row.value, width = TABLE_WIDTH_VALUE),
    );
    styled.push(StyleClass::Default, " ");
    styled.push(StyleClass::Border, "|");

    styled
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LeveledRenderer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Renderer for [`FormatTag::LeveledLog`]: independent per-line keyword
/// classification. Stateless across lines, unlike [`TableAwareRenderer`].
pub struct LeveledRenderer;

impl LeveledRenderer {
    pub fn render(lines: &Lines) -> StyledLines {
        let mut styled = StyledLines::with_capacity(lines.len());
        for line in lines.iter() {
            if line.is_empty() {
                continue;
            }
            styled.push(Self::render_line(line));
        }

        styled
    }

    /// Prefix the line with a bracketed level tag when a whole-word level
    /// keyword matches (first match in precedence
    /// `ERROR > WARNING > INFO > DEBUG` wins). No match, no tag.
    pub fn render_line(line: &Line) -> StyledLine {
        use crate::data::classify::LogLevel;

        let level: LogLevel = match match_level(line) {
            Some(level) => level,
            None => return StyledLine::solid(StyleClass::Default, line.as_str()),
        };
        let tag_class: StyleClass = match level {
            LogLevel::Error => StyleClass::LevelError,
            LogLevel::Warning => StyleClass::LevelWarning,
            LogLevel::Info => StyleClass::LevelInfo,
            LogLevel::Debug => StyleClass::LevelDebug,
        };
        let mut styled = StyledLine::new();
        styled.push(tag_class, level.tag());
        styled.push(StyleClass::Default, format!(" {}", line));

        styled
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PlainRenderer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Renderer for [`FormatTag::PlainText`]: passthrough in the default
/// style, file order preserved.
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn render(lines: &Lines) -> StyledLines {
        lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| StyledLine::solid(StyleClass::Default, line.as_str()))
            .collect()
    }
}
