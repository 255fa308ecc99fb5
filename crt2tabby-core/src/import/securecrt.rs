//! SecureCRT session tree importer.
//!
//! SecureCRT stores one session per file in a flat key/value text
//! format:
//!
//! ```text
//! S:"Protocol Name"=SSH2
//! S:"Hostname"=example.com
//! S:"Username"=bob
//! D:"Port"=00000016
//! ```
//!
//! Keys carry a type prefix and a quoted name; `D:` values are
//! hexadecimal integers. Directory nesting below the session root
//! becomes the profile group.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

use crate::error::ImportError;
use crate::models::RawSession;

use super::traits::{ImportResult, ImportSource, SkippedEntry};

/// Separator joining nested directory names into a group label.
const GROUP_SEPARATOR: char = '-';

/// Tracked keys, matched after quote stripping and lowercasing.
const KEY_PROTOCOL: &str = "s:protocol name";
const KEY_HOSTNAME: &str = "s:hostname";
const KEY_USERNAME: &str = "s:username";
const KEY_PORT: &str = "d:port";

/// Importer for SecureCRT session directories.
///
/// Walks the session root depth-first in directory listing order and
/// parses every regular file with an extension.
pub struct SecureCrtImporter {
    /// Custom session root to import from
    custom_path: Option<PathBuf>,
}

impl SecureCrtImporter {
    /// Creates a new importer using the default SecureCRT paths.
    #[must_use]
    pub const fn new() -> Self {
        Self { custom_path: None }
    }

    /// Creates a new importer with a custom session root.
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self {
            custom_path: Some(path),
        }
    }

    /// Parses the content of one session file into its raw fields.
    ///
    /// Lines without `=` (comments, blanks, folder markers) are ignored.
    /// Keys are trimmed, stripped of `"` characters and lowercased;
    /// values are trimmed with any quoting left intact. A repeated key
    /// overwrites the earlier value.
    #[must_use]
    pub fn parse_session_content(content: &str) -> RawSession {
        let mut raw = RawSession::default();

        for line in content.lines() {
            let Some(eq_pos) = line.find('=') else {
                continue;
            };

            let key = line[..eq_pos].trim().replace('"', "").to_lowercase();
            let value = line[eq_pos + 1..].trim().to_string();

            match key.as_str() {
                KEY_PROTOCOL => raw.protocol = Some(value),
                KEY_HOSTNAME => raw.hostname = Some(value),
                KEY_USERNAME => raw.username = Some(value),
                KEY_PORT => raw.port = Some(value),
                _ => {}
            }
        }

        raw
    }

    /// Converts one session file, appending the outcome to `result`.
    ///
    /// A file missing a required field is recorded as skipped; a
    /// malformed port value aborts the run.
    fn convert_file(
        path: &Path,
        session_name: &str,
        group: Option<&str>,
        result: &mut ImportResult,
    ) -> Result<(), ImportError> {
        // SecureCRT writes Windows-encoded files; fall back to a lossy
        // conversion when the content is not valid UTF-8.
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

        let raw = Self::parse_session_content(&content);
        match raw.into_record(session_name, group.map(str::to_string), path.to_path_buf())? {
            Some(record) => {
                debug!(session = %record.name, protocol = %record.protocol, "parsed session");
                result.add_record(record);
            }
            None => {
                let file_name = path.file_name().map_or_else(
                    || session_name.to_string(),
                    |n| n.to_string_lossy().into_owned(),
                );
                result.add_skipped(SkippedEntry::with_location(
                    file_name,
                    "missing protocol, hostname or username",
                    path.display().to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Walks one directory level, recursing into subdirectories.
    fn convert_dir(
        dir: &Path,
        group: Option<&str>,
        result: &mut ImportResult,
    ) -> Result<(), ImportError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if path.is_dir() {
                let child_group = match group {
                    Some(g) => format!("{g}{GROUP_SEPARATOR}{file_name}"),
                    None => file_name,
                };
                Self::convert_dir(&path, Some(&child_group), result)?;
            } else if path.is_file() {
                // The session name is the file name up to the last dot;
                // a file without one is not a session file.
                let Some(dot) = file_name.rfind('.') else {
                    continue;
                };
                Self::convert_file(&path, &file_name[..dot], group, result)?;
            }
            // Anything else (broken links, special files) is skipped.
        }

        Ok(())
    }
}

impl Default for SecureCrtImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportSource for SecureCrtImporter {
    fn source_id(&self) -> &'static str {
        "securecrt"
    }

    fn display_name(&self) -> &'static str {
        "SecureCRT"
    }

    fn is_available(&self) -> bool {
        self.default_paths().iter().any(|p| p.is_dir())
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return vec![path.clone()];
        }

        let mut paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".vandyke")
                    .join("SecureCRT")
                    .join("Config")
                    .join("Sessions"),
            );
        }

        if let Some(config) = dirs::config_dir() {
            paths.push(config.join("VanDyke").join("Config").join("Sessions"));
        }

        paths
    }

    fn import(&self) -> Result<ImportResult, ImportError> {
        let roots: Vec<PathBuf> = self
            .default_paths()
            .into_iter()
            .filter(|p| p.is_dir())
            .collect();

        if roots.is_empty() {
            return Err(ImportError::DirectoryNotFound(PathBuf::from(
                "no SecureCRT session directory found",
            )));
        }

        let mut combined = ImportResult::new();
        for root in roots {
            combined.merge(self.import_from_path(&root)?);
        }

        Ok(combined)
    }

    fn import_from_path(&self, path: &Path) -> Result<ImportResult, ImportError> {
        if !path.is_dir() {
            return Err(ImportError::DirectoryNotFound(path.to_path_buf()));
        }

        let _span = info_span!("import", source = "securecrt", root = %path.display()).entered();

        let mut result = ImportResult::new();
        Self::convert_dir(path, None, &mut result)?;

        debug!(
            parsed = result.records.len(),
            skipped = result.skipped.len(),
            "import completed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssh_session() {
        let content = "S:\"Protocol Name\"=SSH2\r\n\
                       S:\"Hostname\"=192.168.1.100\r\n\
                       S:\"Username\"=admin\r\n\
                       D:\"Port\"=00000016\r\n";

        let raw = SecureCrtImporter::parse_session_content(content);
        assert_eq!(raw.protocol.as_deref(), Some("SSH2"));
        assert_eq!(raw.hostname.as_deref(), Some("192.168.1.100"));
        assert_eq!(raw.username.as_deref(), Some("admin"));
        assert_eq!(raw.port.as_deref(), Some("00000016"));

        let record = raw
            .into_record("server", None, PathBuf::from("server.ini"))
            .unwrap()
            .unwrap();
        assert_eq!(record.protocol, "ssh2");
        assert_eq!(record.port, Some(22));
    }

    #[test]
    fn test_parse_keys_case_insensitive() {
        let content = "s:\"protocol name\"=Telnet\n\
                       S:\"HOSTNAME\"=host.example.com\n\
                       S:\"Username\"=operator\n";

        let raw = SecureCrtImporter::parse_session_content(content);
        assert_eq!(raw.protocol.as_deref(), Some("Telnet"));
        assert_eq!(raw.hostname.as_deref(), Some("host.example.com"));
    }

    #[test]
    fn test_parse_unquoted_keys() {
        let content = "S:Protocol Name=SSH2\nS:Hostname=example.com\nS:Username=bob\n";

        let raw = SecureCrtImporter::parse_session_content(content);
        assert_eq!(raw.protocol.as_deref(), Some("SSH2"));
    }

    #[test]
    fn test_last_key_wins() {
        let content = "S:\"Hostname\"=first.example.com\n\
                       S:\"Hostname\"=second.example.com\n";

        let raw = SecureCrtImporter::parse_session_content(content);
        assert_eq!(raw.hostname.as_deref(), Some("second.example.com"));
    }

    #[test]
    fn test_lines_without_equals_ignored() {
        let content = "; comment line\n\
                       [General]\n\
                       \n\
                       S:\"Hostname\"=example.com\n";

        let raw = SecureCrtImporter::parse_session_content(content);
        assert_eq!(raw.hostname.as_deref(), Some("example.com"));
        assert!(raw.protocol.is_none());
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let content = "S:\"Protocol Name\"=SSH2\n\
                       S:\"Hostname\"=example.com\n\
                       S:\"Username\"=bob\n\
                       D:\"Session Password Saved\"=00000001\n\
                       S:\"Firewall Name\"=None\n";

        let raw = SecureCrtImporter::parse_session_content(content);
        assert!(raw.port.is_none());
    }

    #[test]
    fn test_value_quotes_preserved() {
        // Quote stripping applies to keys only; a quoted protocol value
        // does not match the recognized protocol names.
        let content = "S:\"Protocol Name\"=\"SSH2\"\n\
                       S:\"Hostname\"=example.com\n\
                       S:\"Username\"=bob\n";

        let raw = SecureCrtImporter::parse_session_content(content);
        assert_eq!(raw.protocol.as_deref(), Some("\"SSH2\""));

        let record = raw
            .into_record("foo", None, PathBuf::from("foo.ini"))
            .unwrap()
            .unwrap();
        assert!(record.profile_kind().is_none());
    }

    #[test]
    fn test_default_paths_without_custom_path() {
        let importer = SecureCrtImporter::new();
        for path in importer.default_paths() {
            assert!(path.ends_with("Sessions"));
        }
    }

    #[test]
    fn test_custom_path_overrides_defaults() {
        let importer = SecureCrtImporter::with_path(PathBuf::from("/tmp/sessions"));
        assert_eq!(
            importer.default_paths(),
            vec![PathBuf::from("/tmp/sessions")]
        );
    }

    #[test]
    fn test_import_from_missing_directory() {
        let importer = SecureCrtImporter::new();
        let err = importer
            .import_from_path(Path::new("/nonexistent/sessions"))
            .unwrap_err();
        assert!(matches!(err, ImportError::DirectoryNotFound(_)));
    }
}
