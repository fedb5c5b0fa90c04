// src/printer/mod.rs

//! The `printer` module renders classified [`LogDocument`]s to styled
//! terminal output.
//!
//! Rendering is split in two: the [`renderers`] are pure transforms from
//! lines to [`StyledLine`]s (testable byte-for-byte), and the
//! [`StyledLinePrinter`] writes `StyledLine`s to a termcolor stream,
//! degrading to unstyled text when the sink does not support styling.
//!
//! [`LogDocument`]: crate::data::document::LogDocument
//! [`StyledLine`]: crate::printer::styles::StyledLine
//! [`StyledLinePrinter`]: crate::printer::printers::StyledLinePrinter
//! [`renderers`]: crate::printer::renderers

pub mod printers;
pub mod renderers;
pub mod styles;
