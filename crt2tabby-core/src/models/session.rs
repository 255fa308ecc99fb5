//! Session record model for parsed SecureCRT session files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

use super::profile::ProfileKind;

/// Field accumulator for a single session file parse.
///
/// All fields are optional while parsing; a repeated key overwrites the
/// earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSession {
    /// Value of `S:"Protocol Name"`
    pub protocol: Option<String>,
    /// Value of `S:"Hostname"`
    pub hostname: Option<String>,
    /// Value of `S:"Username"`
    pub username: Option<String>,
    /// Value of `D:"Port"`, kept as the raw hexadecimal string
    pub port: Option<String>,
}

impl RawSession {
    /// Validates required fields and decodes the port, producing a
    /// [`SessionRecord`].
    ///
    /// Returns `Ok(None)` when protocol, hostname or username is missing;
    /// the file is unconvertible but the run continues.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::InvalidPort`] when the port value is not a
    /// hexadecimal integer. This aborts the whole run.
    pub fn into_record(
        self,
        name: impl Into<String>,
        group: Option<String>,
        source: PathBuf,
    ) -> Result<Option<SessionRecord>, ImportError> {
        let name = name.into();
        let (Some(protocol), Some(host), Some(username)) =
            (self.protocol, self.hostname, self.username)
        else {
            return Ok(None);
        };

        let port = match self.port {
            Some(raw) => {
                Some(
                    u32::from_str_radix(&raw, 16).map_err(|_| ImportError::InvalidPort {
                        session: name.clone(),
                        value: raw,
                    })?,
                )
            }
            None => None,
        };

        Ok(Some(SessionRecord {
            name,
            group,
            protocol: protocol.to_lowercase(),
            host,
            username,
            port,
            source,
        }))
    }
}

/// One SecureCRT session that passed required-field validation.
///
/// The protocol is stored lowercased; the port has already been decoded
/// from SecureCRT's hexadecimal representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session name (file name without its extension)
    pub name: String,
    /// Group label derived from directory nesting (None at top level)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Protocol name, lowercased (e.g. "ssh2", "telnet", "rlogin")
    pub protocol: String,
    /// Remote host address (hostname or IP)
    pub host: String,
    /// Username (present in the source, unused in the emitted profile)
    pub username: String,
    /// Decoded port number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    /// Path of the session file the record was parsed from
    pub source: PathBuf,
}

impl SessionRecord {
    /// Maps the protocol onto a Tabby profile kind.
    ///
    /// Only `telnet` and `ssh2` are recognized; any other protocol means
    /// the session is silently left out of the output.
    #[must_use]
    pub fn profile_kind(&self) -> Option<ProfileKind> {
        match self.protocol.as_str() {
            "telnet" => Some(ProfileKind::Telnet),
            "ssh2" => Some(ProfileKind::Ssh),
            _ => None,
        }
    }
}
