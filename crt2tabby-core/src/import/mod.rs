//! Import engine for reading SecureCRT session trees.
//!
//! This module provides the directory walker and session file parser
//! that turn a SecureCRT `Sessions/` directory into session records.

mod securecrt;
mod traits;

pub use securecrt::SecureCrtImporter;
pub use traits::{ImportResult, ImportSource, SkippedEntry};
