//! Tabby profile exporter.
//!
//! Renders parsed session records into the `profiles:` fragment of a
//! Tabby YAML configuration. Indentation and key order are fixed;
//! Tabby's configuration loader is the consumer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{debug, info_span};

use crate::error::ExportError;
use crate::models::{SessionRecord, TabbyProfile};

/// Statistics of a completed export.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    /// Number of profiles written
    pub exported_count: usize,
    /// Number of records dropped (unrecognized protocol)
    pub skipped_count: usize,
}

impl ExportStats {
    /// Returns a summary string of the export result
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Exported: {}, Skipped: {}",
            self.exported_count, self.skipped_count
        )
    }
}

/// Exporter producing the Tabby `profiles:` document.
pub struct TabbyExporter;

impl TabbyExporter {
    /// Creates a new Tabby exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the full output document.
    ///
    /// The header line is always present; records whose protocol is not
    /// recognized are dropped without a warning.
    #[must_use]
    pub fn render(records: &[SessionRecord]) -> String {
        let _span =
            info_span!("export", format = "tabby", record_count = records.len()).entered();

        let mut output = String::from("profiles:\n");
        let mut exported = 0_usize;

        for record in records {
            if let Some(profile) = TabbyProfile::from_session(record) {
                output.push_str(&Self::format_profile_entry(&profile));
                exported += 1;
            }
        }

        debug!(exported, "tabby render completed");
        output
    }

    /// Formats a single profile block.
    ///
    /// Key order and indentation are exactly what Tabby expects:
    /// name, options (host, port), type, group, disableDynamicTitle.
    #[must_use]
    pub fn format_profile_entry(profile: &TabbyProfile) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "  - name: {}", profile.name);
        output.push_str("    options:\n");
        let _ = writeln!(output, "      host: {}", profile.host);
        if let Some(port) = profile.port {
            let _ = writeln!(output, "      port: {port}");
        }
        let _ = writeln!(output, "    type: {}", profile.kind);
        if let Some(ref group) = profile.group {
            let _ = writeln!(output, "    group: {group}");
        }
        if profile.disable_dynamic_title {
            output.push_str("    disableDynamicTitle: true\n");
        }

        output
    }

    /// Renders `records` and writes the document to `path`.
    ///
    /// The document is built fully in memory and written in a single
    /// operation, overwriting any existing file; a failed run never
    /// leaves a partial output file behind.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Write`] when the output file cannot be
    /// written.
    pub fn export_to_file(
        records: &[SessionRecord],
        path: &Path,
    ) -> Result<ExportStats, ExportError> {
        let content = Self::render(records);

        fs::write(path, &content).map_err(|e| {
            ExportError::Write(format!("Failed to write to {}: {}", path.display(), e))
        })?;

        let exported_count = records
            .iter()
            .filter(|r| r.profile_kind().is_some())
            .count();

        Ok(ExportStats {
            exported_count,
            skipped_count: records.len() - exported_count,
        })
    }
}

impl Default for TabbyExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn record(
        name: &str,
        protocol: &str,
        group: Option<&str>,
        port: Option<u32>,
    ) -> SessionRecord {
        SessionRecord {
            name: name.to_string(),
            group: group.map(str::to_string),
            protocol: protocol.to_string(),
            host: "example.com".to_string(),
            username: "bob".to_string(),
            port,
            source: PathBuf::from(format!("{name}.ini")),
        }
    }

    #[test]
    fn test_render_ssh_profile() {
        let records = vec![record("foo", "ssh2", None, Some(80))];
        let output = TabbyExporter::render(&records);

        let expected = "profiles:
  - name: foo
    options:
      host: example.com
      port: 80
    type: ssh
    disableDynamicTitle: true
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_telnet_profile_with_group() {
        let records = vec![record("router", "telnet", Some("lab-rack1"), None)];
        let output = TabbyExporter::render(&records);

        let expected = "profiles:
  - name: router
    options:
      host: example.com
    type: telnet
    group: lab-rack1
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_omits_port_when_absent() {
        let records = vec![record("foo", "ssh2", None, None)];
        let output = TabbyExporter::render(&records);
        assert!(!output.contains("port:"));
    }

    #[test]
    fn test_render_drops_unrecognized_protocol() {
        let records = vec![record("old", "rlogin", None, None)];
        let output = TabbyExporter::render(&records);
        assert_eq!(output, "profiles:\n");
    }

    #[test]
    fn test_render_keeps_input_order() {
        let records = vec![
            record("b", "ssh2", None, None),
            record("a", "telnet", None, None),
        ];
        let output = TabbyExporter::render(&records);

        let b_pos = output.find("- name: b").unwrap();
        let a_pos = output.find("- name: a").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_render_empty_records() {
        assert_eq!(TabbyExporter::render(&[]), "profiles:\n");
    }

    #[test]
    fn test_export_to_file_stats() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("profiles.yaml");

        let records = vec![
            record("foo", "ssh2", None, Some(22)),
            record("old", "rlogin", None, None),
        ];
        let stats = TabbyExporter::export_to_file(&records, &out).unwrap();

        assert_eq!(stats.exported_count, 1);
        assert_eq!(stats.skipped_count, 1);
        assert_eq!(stats.summary(), "Exported: 1, Skipped: 1");

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("profiles:\n"));
        assert!(written.contains("- name: foo"));
        assert!(!written.contains("old"));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("profiles.yaml");
        fs::write(&out, "stale content\n").unwrap();

        TabbyExporter::export_to_file(&[], &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "profiles:\n");
    }
}
