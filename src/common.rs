// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// TODO: use `std::path::Path` for `FPath`
/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;
pub type FileMetadata = std::fs::Metadata;

/// Size of a file in bytes
pub type FileSz = u64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// lines of a decoded artifact file
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One whitespace-stripped line of a decoded artifact file.
pub type Line = String;
/// Lines of a decoded artifact file, in file order, empty lines dropped.
pub type Lines = Vec<Line>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// reserved marker tokens written by ZiggyDB tooling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Prefix of the synthetic line substituted by the reader for
/// non-UTF-8 file content. Also recognized verbatim in text files.
pub const BINARY_MARKER_PREFIX: &str = "--- Binary Content";

/// Prefix a WAL dump begins with after the dump tool verified the file.
pub const WAL_VALID_PREFIX: &str = "✓ Valid WAL file";

/// Prefix of a table border line within a WAL dump.
pub const TABLE_BORDER_PREFIX: &str = "+---";

/// Prefix of the fixed table header line within a WAL dump.
/// The dump tool pads the column titles to fixed widths.
pub const TABLE_HEADER_PREFIX: &str = "| Operation | Key           | Value";

/// Column delimiter of WAL dump table rows.
pub const TABLE_DELIMITER: char = '|';

/// Transaction marker substrings within a WAL dump.
pub const TXN_STARTED: &str = "Transaction started";
pub const TXN_COMMITTED: &str = "Transaction Committed";
pub const TXN_ROLLEDBACK: &str = "Transaction rolled back";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// table column widths
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// Fixed pad widths of recomposed table rows. Must match the widths the
// ZiggyDB dump tool uses so rows visually diff across files.
pub const TABLE_WIDTH_OPERATION: usize = 9;
pub const TABLE_WIDTH_KEY: usize = 13;
pub const TABLE_WIDTH_VALUE: usize = 21;
