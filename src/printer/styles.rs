// src/printer/styles.rs

//! Semantic style classes, styled line containers, and the [`ColorTheme`]
//! mapping style classes to terminal colors.
//!
//! A `ColorTheme` is an explicit value passed to the printer; there is no
//! process-global styling state.

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for lines and fields with no special meaning.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_DEFAULT: Color = Color::White;

/// [`Color`] for printing user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// [`Color`] for table borders, row delimiters, and transaction-start lines.
pub const COLOR_BORDER: Color = Color::Blue;

/// [`Color`] for the WAL-valid accent line and numeric values.
pub const COLOR_ACCENT: Color = Color::Cyan;

/// [`Color`] for insert-class operations, committed transactions,
/// and the per-file banner.
pub const COLOR_SUCCESS: Color = Color::Green;

/// [`Color`] for the table header and boolean values.
pub const COLOR_HEADER: Color = Color::Magenta;

/// [`Color`] for default (string) values and warnings.
pub const COLOR_VALUE: Color = Color::Yellow;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// StyleClass, StyledLine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Semantic style of one span of rendered text.
///
/// Renderers emit style classes, not colors; the [`ColorTheme`] decides
/// what each class looks like on the terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StyleClass {
    /// lines and fields with no special meaning
    Default,
    /// the synthetic binary-content marker line
    BinaryMarker,
    /// the `✓ Valid WAL file` accent line
    WalMarker,
    /// table border lines and row delimiter glyphs
    Border,
    /// the fixed table header line
    Header,
    /// insert-class operations (`set`, `listpush`)
    OperationInsert,
    /// remove-class operations (`delete`, `listpop`)
    OperationRemove,
    /// operations of neither class, keys, malformed-row fallback text
    Neutral,
    /// value `-` or empty (delete placeholder)
    ValuePlaceholder,
    /// value `true` or `false`
    ValueBoolean,
    /// integer or float value
    ValueNumeric,
    /// any other value
    ValueDefault,
    /// a `Transaction started` line
    TxnStarted,
    /// a `Transaction Committed` line
    TxnCommitted,
    /// a `Transaction rolled back` line
    TxnRolledBack,
    /// bracketed `[ERROR]` tag
    LevelError,
    /// bracketed `[WARNING]` tag
    LevelWarning,
    /// bracketed `[INFO]` tag
    LevelInfo,
    /// bracketed `[DEBUG]` tag
    LevelDebug,
    /// per-file banner lines
    Banner,
}

/// One styled span: a style class and the text it covers.
pub type StyledSpan = (StyleClass, String);

/// One rendered output line: an ordered sequence of styled spans.
///
/// Concatenating the span texts yields the unstyled form of the line,
/// which is exactly what a non-styling sink prints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn new() -> StyledLine {
        StyledLine { spans: Vec::new() }
    }

    /// A line entirely in one style class.
    pub fn solid<S: Into<String>>(
        class: StyleClass,
        text: S,
    ) -> StyledLine {
        StyledLine {
            spans: vec![(class, text.into())],
        }
    }

    pub fn push<S: Into<String>>(
        &mut self,
        class: StyleClass,
        text: S,
    ) {
        self.spans.push((class, text.into()));
    }

    /// The unstyled text of this line (span texts concatenated).
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.spans.iter().map(|(_, s)| s.len()).sum());
        for (_, span_text) in self.spans.iter() {
            text.push_str(span_text);
        }
        text
    }
}

impl Default for StyledLine {
    fn default() -> StyledLine {
        StyledLine::new()
    }
}

pub type StyledLines = Vec<StyledLine>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ColorTheme
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Mapping of [`StyleClass`] to termcolor [`ColorSpec`].
///
/// Chosen for a dark background console.
#[derive(Clone, Debug)]
pub struct ColorTheme {
    color_default: ColorSpec,
    color_border: ColorSpec,
    color_accent: ColorSpec,
    color_success: ColorSpec,
    color_header: ColorSpec,
    color_value: ColorSpec,
    color_error: ColorSpec,
}

impl ColorTheme {
    pub fn new() -> ColorTheme {
        fn fg(color: Color) -> ColorSpec {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(color));
            spec
        }

        ColorTheme {
            color_default: fg(COLOR_DEFAULT),
            color_border: fg(COLOR_BORDER),
            color_accent: fg(COLOR_ACCENT),
            color_success: fg(COLOR_SUCCESS),
            color_header: fg(COLOR_HEADER),
            color_value: fg(COLOR_VALUE),
            color_error: fg(COLOR_ERROR),
        }
    }

    /// The [`ColorSpec`] for a [`StyleClass`].
    pub fn color_spec(
        &self,
        class: StyleClass,
    ) -> &ColorSpec {
        match class {
            StyleClass::Default
            | StyleClass::Neutral
            | StyleClass::ValuePlaceholder => &self.color_default,
            StyleClass::BinaryMarker
            | StyleClass::Border
            | StyleClass::TxnStarted => &self.color_border,
            StyleClass::WalMarker
            | StyleClass::ValueNumeric
            | StyleClass::LevelInfo => &self.color_accent,
            StyleClass::Header
            | StyleClass::ValueBoolean
            | StyleClass::LevelDebug => &self.color_header,
            StyleClass::OperationInsert
            | StyleClass::TxnCommitted
            | StyleClass::Banner => &self.color_success,
            StyleClass::OperationRemove
            | StyleClass::TxnRolledBack
            | StyleClass::LevelError => &self.color_error,
            StyleClass::ValueDefault | StyleClass::LevelWarning => &self.color_value,
        }
    }
}

impl Default for ColorTheme {
    fn default() -> ColorTheme {
        ColorTheme::new()
    }
}
