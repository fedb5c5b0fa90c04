// src/readers/mod.rs

//! "Readers" for _zlvlib_: the file-reading collaborators of the
//! classification-and-rendering engine.
//!
//! * A [`filereader`] reads one artifact file into a [`LogDocument`],
//!   substituting binary content for undecodable bytes. Renderers and the
//!   classifier only ever see already-decoded data.
//! * A [`dirscanner`] enumerates the regular files directly inside a
//!   directory (non-recursive).
//!
//! _These are not rust "Readers"; they do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`LogDocument`]: crate::data::document::LogDocument
//! [`filereader`]: crate::readers::filereader
//! [`dirscanner`]: crate::readers::dirscanner
//! [`Read`]: std::io::Read

pub mod dirscanner;
pub mod filereader;
pub mod helpers;
