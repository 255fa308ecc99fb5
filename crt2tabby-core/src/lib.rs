//! crt2tabby Core Library
//!
//! This crate provides the core functionality for the crt2tabby session
//! converter: parsing SecureCRT session directories and emitting the
//! corresponding Tabby profile configuration.

pub mod error;
pub mod export;
pub mod import;
pub mod models;

pub use error::{ConvertError, ExportError, ImportError, Result};
pub use export::{ExportStats, TabbyExporter};
pub use import::{ImportResult, ImportSource, SecureCrtImporter, SkippedEntry};
pub use models::{ProfileKind, RawSession, SessionRecord, TabbyProfile};
