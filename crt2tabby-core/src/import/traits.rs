//! Import source trait and result types.

use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::models::SessionRecord;

/// Result of an import run over a session tree.
#[derive(Debug, Default)]
pub struct ImportResult {
    /// Sessions that passed required-field validation, in traversal order.
    ///
    /// This includes sessions with unrecognized protocols; the
    /// recognition cut happens when profiles are built.
    pub records: Vec<SessionRecord>,
    /// Files that were skipped (missing required fields)
    pub skipped: Vec<SkippedEntry>,
}

impl ImportResult {
    /// Creates a new empty import result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of files that produced an outcome
    #[must_use]
    pub fn total_processed(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    /// Returns true if any files were skipped
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Returns a summary string of the import result
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Parsed: {}, Skipped: {}",
            self.records.len(),
            self.skipped.len()
        )
    }

    /// Adds a session record to the result
    pub fn add_record(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    /// Adds a skipped entry to the result
    pub fn add_skipped(&mut self, entry: SkippedEntry) {
        self.skipped.push(entry);
    }

    /// Merges another import result into this one
    pub fn merge(&mut self, other: Self) {
        self.records.extend(other.records);
        self.skipped.extend(other.skipped);
    }
}

/// A file that was skipped during import
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    /// File name of the skipped entry
    pub identifier: String,
    /// Reason why the entry was skipped
    pub reason: String,
    /// Source location (full file path)
    pub location: Option<String>,
}

impl SkippedEntry {
    /// Creates a new skipped entry
    #[must_use]
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
            location: None,
        }
    }

    /// Creates a new skipped entry with location information
    #[must_use]
    pub fn with_location(
        identifier: impl Into<String>,
        reason: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
            location: Some(location.into()),
        }
    }
}

/// Trait for import source implementations.
///
/// Each session source implements this trait to provide a uniform
/// interface for locating and importing session definitions.
pub trait ImportSource: Send + Sync {
    /// Returns the unique identifier for this import source
    fn source_id(&self) -> &'static str;

    /// Returns a human-readable name for this import source
    fn display_name(&self) -> &'static str;

    /// Checks if this import source is available (session directory exists)
    fn is_available(&self) -> bool;

    /// Returns the default paths where this source looks for sessions
    fn default_paths(&self) -> Vec<PathBuf>;

    /// Imports sessions from every available default path
    ///
    /// # Errors
    ///
    /// Returns an error if no default path exists or a tree fails to
    /// import. Per-file validation failures are recorded in the
    /// `ImportResult` instead.
    fn import(&self) -> Result<ImportResult, ImportError>;

    /// Imports sessions from a specific directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or a session
    /// file carries a malformed port value.
    fn import_from_path(&self, path: &Path) -> Result<ImportResult, ImportError>;
}
