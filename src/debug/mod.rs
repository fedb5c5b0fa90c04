// src/debug/mod.rs

//! The `debug` module is macros for printing user-facing messages and
//! debug-build messages.

pub mod printers;
