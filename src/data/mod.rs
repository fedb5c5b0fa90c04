// src/data/mod.rs

//! The `data` module is the data containers and pure decision logic for
//! artifact files: the [`LogDocument`] container, the [`FormatTag`]
//! classifier, and the transient [`TableRow`] view.
//!
//! ## Definitions of data
//!
//! ### LogDocument
//!
//! A `LogDocument` is one artifact file as read by the
//! [`filereader`]: either its whitespace-stripped text lines, or a
//! byte count when the file content is not valid UTF-8.
//!
//! ### FormatTag
//!
//! A `FormatTag` is the rendering mode decided for a `LogDocument` by
//! [`classify`]. It is derived, never stored; classification is a pure
//! function of the document content and is recomputed per render pass.
//!
//! ### TableRow
//!
//! A `TableRow` is a derived view of one data line inside a WAL dump
//! table block. It exists only transiently during rendering.
//!
//! [`LogDocument`]: crate::data::document::LogDocument
//! [`FormatTag`]: crate::data::document::FormatTag
//! [`TableRow`]: crate::data::document::TableRow
//! [`classify`]: crate::data::classify::classify
//! [`filereader`]: crate::readers::filereader

pub mod classify;
pub mod document;
