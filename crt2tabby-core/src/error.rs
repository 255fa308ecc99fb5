//! Error types for crt2tabby
//!
//! This module defines all error types used by the converter, providing
//! descriptive error messages for import and export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Errors raised while reading the session tree
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Errors raised while writing the profile file
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to reading SecureCRT session trees
#[derive(Debug, Error)]
pub enum ImportError {
    /// A `D:"Port"` value that is not a hexadecimal integer.
    ///
    /// Unlike a missing required field this aborts the whole run.
    #[error("Invalid port value '{value}' in session '{session}': not a hexadecimal integer")]
    InvalidPort {
        /// Name of the session file the value came from
        session: String,
        /// The raw port value as found in the file
        value: String,
    },

    /// Session directory not found or not a directory
    #[error("Session directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// I/O error during import
    #[error("IO error during import: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to writing the Tabby profile file
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write output file
    #[error("Failed to write output: {0}")]
    Write(String),

    /// I/O error during export
    #[error("IO error during export: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
