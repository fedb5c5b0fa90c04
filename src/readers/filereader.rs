// src/readers/filereader.rs

//! Read one artifact file into a [`LogDocument`].
//!
//! Owns the encoding-fallback behavior: bytes that are not valid UTF-8
//! are recovered locally by substituting [`FileContent::Binary`] with the
//! byte length — a decode failure is never propagated as an error. The
//! classifier and renderers stay pure functions over decoded data.
//!
//! [`LogDocument`]: crate::data::document::LogDocument
//! [`FileContent::Binary`]: crate::data::document::FileContent

use crate::common::{FPath, FileSz, Lines};
use crate::data::document::{FileContent, LogDocument};
use crate::readers::helpers::basename;

use std::fmt;
use std::io::ErrorKind;

use ::encoding_rs::UTF_8;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ReadError
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// File-level read failure. Reported and the file skipped; never fatal
/// to the batch.
#[derive(Debug)]
pub enum ReadError {
    /// the file was not found
    NotFound(FPath),
    /// filesystem permissions do not allow reading the file
    PermissionDenied(FPath),
    /// any other I/O failure
    Other(FPath, std::io::Error),
}

impl ReadError {
    fn from_io(
        path: &FPath,
        err: std::io::Error,
    ) -> ReadError {
        match err.kind() {
            ErrorKind::NotFound => ReadError::NotFound(path.clone()),
            ErrorKind::PermissionDenied => ReadError::PermissionDenied(path.clone()),
            _ => ReadError::Other(path.clone(), err),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ReadError::NotFound(path) => write!(f, "file {:?} was not found", path),
            ReadError::PermissionDenied(path) => {
                write!(f, "permission denied reading file {:?}", path)
            }
            ReadError::Other(path, err) => write!(f, "error reading file {:?}: {}", path, err),
        }
    }
}

impl std::error::Error for ReadError {}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// read_document
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Read the file at `path` into a [`LogDocument`].
///
/// Text lines are whitespace-stripped; empty lines are dropped. Bytes
/// that are not valid UTF-8 yield [`FileContent::Binary`] with the file's
/// byte length.
///
/// [`LogDocument`]: crate::data::document::LogDocument
/// [`FileContent::Binary`]: crate::data::document::FileContent
pub fn read_document(path: &FPath) -> Result<LogDocument, ReadError> {
    defn!("({:?})", path);
    let bytes: Vec<u8> = match std::fs::read(path) {
        Ok(val) => val,
        Err(err) => {
            defx!("std::fs::read error {}", err);
            return Err(ReadError::from_io(path, err));
        }
    };
    let name: FPath = basename(path);
    let content: FileContent = decode_bytes(&bytes);
    defx!("return LogDocument {:?}", name);

    Ok(LogDocument::new(name, content))
}

/// Strict UTF-8 decode with binary fallback.
///
/// `decode_without_bom_handling_and_without_replacement` returns `None`
/// on any malformed sequence; that is the `Binary` substitution point.
fn decode_bytes(bytes: &[u8]) -> FileContent {
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => {
            let lines: Lines = text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();
            defo!("decoded {} lines", lines.len());
            FileContent::Text(lines)
        }
        None => {
            defo!("not valid UTF-8; substitute Binary({})", bytes.len());
            FileContent::Binary(bytes.len() as FileSz)
        }
    }
}
