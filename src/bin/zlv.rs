// src/bin/zlv.rs

//! Driver program _zlv_ drives the [_zlvlib_].
//!
//! Processes user-passed command-line arguments.
//! Then processes paths passed; directories are enumerated for files
//! directly inside them (non-recursive), other paths tested for
//! suitability (does it exist? is it a file?).
//!
//! For each file found: read, classify, render, print — one file at a
//! time, each file's output printed as one contiguous block. A failed
//! file is reported to stderr and skipped; no file's failure aborts the
//! batch.
//!
//! `zlv.rs` is the only thread and the only code that prints to STDOUT.
//!
//! [_zlvlib_]: zlvlib

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::zlvlib::common::{FPath, FPaths};
use ::zlvlib::data::document::{FormatTag, LogDocument};
use ::zlvlib::debug::printers::{e_err, e_wrn};
use ::zlvlib::printer::printers::{
    // termcolor imports
    ColorChoice,
    StyledLinePrinter,
};
use ::zlvlib::printer::renderers::render_document;
use ::zlvlib::printer::styles::{ColorTheme, StyledLines};
use ::zlvlib::readers::dirscanner::{process_path, ProcessPathResult};
use ::zlvlib::readers::filereader::read_document;

// --------------------
// command-line parsing

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = concatcp!(
    "\
Given a file path, the file is classified by content and rendered:
a ZiggyDB WAL dump is rendered as a color-annotated table, a log file
with ERROR/WARNING/INFO/DEBUG keywords is rendered with level tags,
other text is passed through, and non-UTF-8 content is acknowledged
with its byte count.
Given a directory path, each file directly inside it is rendered;
subdirectories are not recursed.

Version: ", env!("CARGO_PKG_VERSION"), "
License: ", env!("CARGO_PKG_LICENSE"),
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "zlv",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(ZiggyDB Log Viewer)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path(s) of artifact files or directories.
    /// Directories are listed for files; subdirectories are not recursed.
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    paths: Vec<String>,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,
}

// --------------------
// processing

/// Render one file to the printer. Returns `false` if the file could not
/// be read (the batch continues regardless).
fn process_file(
    printer: &mut StyledLinePrinter,
    path: &FPath,
) -> bool {
    defn!("({:?})", path);
    let document: LogDocument = match read_document(path) {
        Ok(val) => val,
        Err(err) => {
            e_err!("{}", err);
            defx!("read_document failed");
            return false;
        }
    };
    let (tag, styled_lines): (FormatTag, StyledLines) = render_document(&document);
    defo!("{:?} classified {:?}", document.name, tag);
    // a print failure (e.g. broken pipe) is not the file's fault; report
    // and carry on
    if let Err(err) = printer
        .print_banner_open(&document.name, tag)
        .and_then(|_| printer.print_styled_lines(&styled_lines))
        .and_then(|_| printer.print_banner_close(&document.name, tag))
    {
        e_wrn!("error printing {:?}: {}", document.name, err);
    }
    defx!();

    true
}

pub fn main() -> ExitCode {
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    defo!("color_choice {:?}", color_choice);

    let mut printer = StyledLinePrinter::new(color_choice, ColorTheme::new());

    let mut error_count: usize = 0;
    let mut file_count: usize = 0;
    for path in args.paths.iter() {
        let fpaths: FPaths = {
            let mut fpaths = FPaths::new();
            for result in process_path(path).into_iter() {
                match result {
                    ProcessPathResult::FileValid(fpath) => fpaths.push(fpath),
                    ProcessPathResult::FileErrNotAFile(fpath) => {
                        e_wrn!("not a file {:?}", fpath);
                        error_count += 1;
                    }
                    ProcessPathResult::FileErrNotExist(fpath) => {
                        e_err!("path does not exist {:?}", fpath);
                        error_count += 1;
                    }
                }
            }
            fpaths
        };
        if fpaths.is_empty() {
            e_wrn!("no files found at path {:?}", path);
        }
        for fpath in fpaths.iter() {
            file_count += 1;
            if !process_file(&mut printer, fpath) {
                error_count += 1;
            }
        }
    }
    defo!("processed {} files, {} errors", file_count, error_count);

    match error_count {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
