//! Export module producing Tabby configuration output.

pub mod tabby;

pub use tabby::{ExportStats, TabbyExporter};
