// src/readers/dirscanner.rs

//! Enumerate artifact files at a user-passed path.
//!
//! Given a directory, lists the regular files directly inside it
//! (non-recursive), sorted by file name so output order is deterministic.
//! Given a plain file path, returns that path; a user-passed file is
//! always attempted.

use crate::common::FPath;
use crate::readers::helpers::path_to_fpath;

use std::path::Path;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Initial path processing return type.
#[derive(Debug, Eq, PartialEq)]
pub enum ProcessPathResult {
    /// File can be processed by `zlv`
    FileValid(FPath),
    /// Path exists and is not a regular file (socket, device, …)
    FileErrNotAFile(FPath),
    /// Path does not exist
    FileErrNotExist(FPath),
}

pub type ProcessPathResults = Vec<ProcessPathResult>;

/// Return a `ProcessPathResult` for each file at `path`.
///
/// Directories are *not* recursed; only files directly inside are
/// returned, sorted by file name. Subdirectories are skipped silently.
pub fn process_path(path: &FPath) -> ProcessPathResults {
    defn!("({:?})", path);

    let std_path: &Path = Path::new(path);
    if std_path.is_file() {
        defx!("({:?}) is a file", path);
        return vec![ProcessPathResult::FileValid(path.clone())];
    }
    if !std_path.exists() {
        defx!("({:?}) does not exist", path);
        return vec![ProcessPathResult::FileErrNotExist(path.clone())];
    }
    if !std_path.is_dir() {
        // exists but is neither a regular file nor a directory
        // (socket, device, fifo, …)
        defx!("({:?}) is not a file", path);
        return vec![ProcessPathResult::FileErrNotAFile(path.clone())];
    }

    let mut paths = ProcessPathResults::new();
    for entry in walkdir::WalkDir::new(path.as_str())
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let path_entry = match entry {
            Ok(val) => {
                defo!("Ok({:?})", val);
                val
            }
            Err(_err) => {
                defo!("Err({:?})", _err);
                continue;
            }
        };
        let std_path_entry: &Path = path_entry.path();
        let fpath_entry: FPath = path_to_fpath(std_path_entry);
        if !path_entry.file_type().is_file() {
            if path_entry.file_type().is_dir() {
                continue;
            }
            defo!("path not a file {:?}", path_entry);
            paths.push(ProcessPathResult::FileErrNotAFile(fpath_entry));
            continue;
        }
        defo!("paths.push(FileValid({:?}))", fpath_entry);
        paths.push(ProcessPathResult::FileValid(fpath_entry));
    }
    defx!("return {} results", paths.len());

    paths
}
