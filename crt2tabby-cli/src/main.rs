//! crt2tabby - SecureCRT to Tabby session converter
//!
//! Reads a SecureCRT session directory and writes the matching Tabby
//! `profiles:` configuration fragment. One trace line per parsed
//! session goes to standard output; unconvertible files are reported on
//! standard error.

use std::path::PathBuf;

use clap::Parser;
use crt2tabby_core::export::TabbyExporter;
use crt2tabby_core::import::{ImportResult, ImportSource, SecureCrtImporter};
use tracing_subscriber::EnvFilter;

/// Convert SecureCRT session files to Tabby profiles
#[derive(Parser)]
#[command(name = "crt2tabby")]
#[command(author, version, about = "Convert SecureCRT session files to Tabby profiles")]
pub struct Cli {
    /// Directory containing SecureCRT session files
    session_dir: PathBuf,

    /// Output path for the generated Tabby profiles file
    outfile: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Log lines go to stderr so the per-session trace on stdout stays
    // machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Runs the conversion: import, diagnostics, export.
fn run(cli: &Cli) -> Result<(), CliError> {
    let importer = SecureCrtImporter::with_path(cli.session_dir.clone());
    let result = importer
        .import_from_path(&cli.session_dir)
        .map_err(|e| CliError::Import(e.to_string()))?;

    print_diagnostics(&result);

    let stats = TabbyExporter::export_to_file(&result.records, &cli.outfile)
        .map_err(|e| CliError::Export(e.to_string()))?;

    println!(
        "{} -> {} ({})",
        cli.session_dir.display(),
        cli.outfile.display(),
        stats.summary()
    );

    Ok(())
}

/// Prints the per-file diagnostics of an import run.
///
/// Every parsed session produces one stdout line in the converter's
/// historical format (`null` stands in for an absent group or port);
/// every skipped file produces one stderr line.
fn print_diagnostics(result: &ImportResult) {
    for record in &result.records {
        let group = record.group.as_deref().unwrap_or("null");
        let port = record
            .port
            .map_or_else(|| "null".to_string(), |p| p.to_string());
        println!(
            "{} {} {} {} {} {} {}",
            record.source.display(),
            group,
            record.name,
            record.protocol,
            record.host,
            record.username,
            port
        );
    }

    for skipped in &result.skipped {
        eprintln!("unable to convert {}", skipped.identifier);
    }
}

/// Errors surfaced by the CLI
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Import error
    #[error("Import error: {0}")]
    Import(String),

    /// Export error
    #[error("Export error: {0}")]
    Export(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Import(_) | Self::Export(_) | Self::Io(_) => 1,
        }
    }
}
