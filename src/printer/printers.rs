// src/printer/printers.rs

//! Specialized printer struct [`StyledLinePrinter`] for writing
//! [`StyledLine`]s to the terminal.
//!
//! The printer owns the termcolor stream and the [`ColorTheme`]; the
//! renderers never touch the terminal. With [`ColorChoice::Never`] the
//! printed bytes are exactly the concatenated span text of each line —
//! styling is a presentation concern, not part of the data contract.
//!
//! [`StyledLine`]: crate::printer::styles::StyledLine
//! [`ColorTheme`]: crate::printer::styles::ColorTheme

use crate::common::FPath;
use crate::data::document::FormatTag;
use crate::debug::printers::de_err;
use crate::printer::styles::{ColorTheme, StyleClass, StyledLine, StyledLines};

use std::io::{Result, Write};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Aliased [`Result`] returned by various [`StyledLinePrinter`] functions.
///
/// [`Result`]: std::io::Result
pub type PrinterStyledLineResult = Result<usize>;

/// Macro to write to given stdout. If there is an error then
/// `return PrinterStyledLineResult::Err`.
macro_rules! write_or_return {
    ($stdout:expr, $slice_:expr, $printed:expr) => {
        match $stdout.write_all($slice_) {
            Ok(_) => {
                $printed += $slice_.len();
            }
            Err(err) => {
                // XXX: this will print when this program stdout is truncated, like when piping
                //      to `head`, e.g. `zlv logs/ | head`
                //          Broken pipe (os error 32)
                de_err!(
                    "{}.write({} len {}) error {}",
                    stringify!($stdout),
                    stringify!($slice_),
                    $slice_.len(),
                    err
                );
                match $stdout.flush() {
                    Ok(_) => {}
                    Err(_) => {}
                }
                return PrinterStyledLineResult::Err(err);
            }
        }
    };
}

/// Macro that sets output color, only changed if needed.
///
/// Unnecessary changes to `set_color` may cause errant formatting bytes to
/// print to the terminal.
macro_rules! setcolor_or_return {
    ($stdout:expr, $color_spec:expr, $color_spec_last:expr) => {
        if $color_spec != &$color_spec_last {
            if let Err(err) = $stdout.set_color($color_spec) {
                de_err!("{}.set_color({:?}) returned error {}", stringify!($stdout), $color_spec, err);
                return PrinterStyledLineResult::Err(err);
            };
            $color_spec_last = $color_spec.clone();
        }
    };
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// StyledLinePrinter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A printer specialized for [`StyledLine`]s.
///
/// One instance per process; each file's lines are printed as one
/// contiguous block followed by a `flush`. Generic over the
/// [`WriteColor`] sink so tests can print into a [`Buffer`] instead
/// of stdout.
///
/// [`StyledLine`]: crate::printer::styles::StyledLine
/// [`Buffer`]: termcolor::Buffer
pub struct StyledLinePrinter<W: WriteColor = termcolor::StandardStream> {
    /// termcolor sink, stdout outside of tests
    stdout_color: W,
    /// should printing be in color?
    do_color: bool,
    /// style class to color mapping
    theme: ColorTheme,
    /// last value passed to `self.stdout_color.set_color()`
    ///
    /// used by macro `setcolor_or_return`
    color_spec_last: ColorSpec,
}

impl StyledLinePrinter {
    /// Create a new `StyledLinePrinter` on stdout.
    pub fn new(
        color_choice: ColorChoice,
        theme: ColorTheme,
    ) -> StyledLinePrinter {
        // get a stdout handle once
        let stdout_color = termcolor::StandardStream::stdout(color_choice);
        let do_color: bool = match color_choice {
            ColorChoice::Never => false,
            ColorChoice::Always | ColorChoice::AlwaysAnsi | ColorChoice::Auto => true,
        };

        StyledLinePrinter::with_stream(stdout_color, do_color, theme)
    }
}

impl<W: WriteColor> StyledLinePrinter<W> {
    /// Create a `StyledLinePrinter` over an arbitrary [`WriteColor`]
    /// sink, e.g. a [`Buffer`](termcolor::Buffer).
    pub fn with_stream(
        stream: W,
        do_color: bool,
        theme: ColorTheme,
    ) -> StyledLinePrinter<W> {
        StyledLinePrinter {
            stdout_color: stream,
            do_color,
            theme,
            color_spec_last: ColorSpec::new(),
        }
    }

    /// Consume the printer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.stdout_color
    }

    /// Print one [`StyledLine`] and a trailing newline.
    /// Returns the number of bytes printed.
    pub fn print_styled_line(
        &mut self,
        styled_line: &StyledLine,
    ) -> PrinterStyledLineResult {
        let mut printed: usize = 0;
        for (class, text) in styled_line.spans.iter() {
            if self.do_color {
                let color_spec: &ColorSpec = self.theme.color_spec(*class);
                setcolor_or_return!(self.stdout_color, color_spec, self.color_spec_last);
            }
            write_or_return!(self.stdout_color, text.as_bytes(), printed);
        }
        if self.do_color {
            // leave the terminal in a sane state at line end
            if let Err(err) = self.stdout_color.reset() {
                de_err!("stdout_color.reset() returned error {}", err);
                return PrinterStyledLineResult::Err(err);
            }
            self.color_spec_last = ColorSpec::new();
        }
        write_or_return!(self.stdout_color, b"\n", printed);

        PrinterStyledLineResult::Ok(printed)
    }

    /// Print rendered lines as one contiguous block, then flush, so
    /// concurrent callers interleave only whole file blocks.
    pub fn print_styled_lines(
        &mut self,
        styled_lines: &StyledLines,
    ) -> PrinterStyledLineResult {
        let mut printed: usize = 0;
        for styled_line in styled_lines.iter() {
            printed += self.print_styled_line(styled_line)?;
        }
        self.stdout_color.flush()?;

        PrinterStyledLineResult::Ok(printed)
    }

    /// Print the opening banner for a file, e.g.
    /// `===== kern.log (Generic Log) =====`, surrounded by blank lines.
    pub fn print_banner_open(
        &mut self,
        name: &FPath,
        tag: FormatTag,
    ) -> PrinterStyledLineResult {
        let mut printed: usize = 0;
        write_or_return!(self.stdout_color, b"\n", printed);
        let banner = StyledLine::solid(StyleClass::Banner, banner_text(name, tag));
        printed += self.print_styled_line(&banner)?;
        write_or_return!(self.stdout_color, b"\n", printed);

        PrinterStyledLineResult::Ok(printed)
    }

    /// Print the closing rule for a file: a `=` line as wide as the
    /// opening banner.
    pub fn print_banner_close(
        &mut self,
        name: &FPath,
        tag: FormatTag,
    ) -> PrinterStyledLineResult {
        let width: usize = banner_text(name, tag).chars().count();
        let rule = StyledLine::solid(
            StyleClass::Banner,
            "=".repeat(width),
        );
        let mut printed: usize = self.print_styled_line(&rule)?;
        write_or_return!(self.stdout_color, b"\n", printed);
        self.stdout_color.flush()?;

        PrinterStyledLineResult::Ok(printed)
    }
}

/// The banner text for a file: name plus a format annotation for
/// non-WAL files, in the manner of the ZiggyDB tooling.
fn banner_text(
    name: &FPath,
    tag: FormatTag,
) -> String {
    match tag {
        FormatTag::StructuredLog => format!("===== {} =====", name),
        _ => format!("===== {} ({}) =====", name, tag),
    }
}
