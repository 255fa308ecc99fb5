//! Tabby profile model emitted by the converter.

use serde::{Deserialize, Serialize};

use super::session::SessionRecord;

/// Profile type tag in the Tabby configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Telnet profile
    Telnet,
    /// SSH profile
    Ssh,
}

impl ProfileKind {
    /// Returns the `type:` tag as written in the Tabby configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Telnet => "telnet",
            Self::Ssh => "ssh",
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One profile block of the generated Tabby configuration.
///
/// Profiles are appended to the output in traversal order and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabbyProfile {
    /// Profile name
    pub name: String,
    /// Remote host address
    pub host: String,
    /// Port number (the port line is omitted when None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    /// Profile type tag
    pub kind: ProfileKind,
    /// Group label (the group line is omitted when None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Tabby's dynamic tab title feature, disabled for SSH profiles
    pub disable_dynamic_title: bool,
}

impl TabbyProfile {
    /// Builds a profile from a parsed session record.
    ///
    /// Returns `None` when the record's protocol is not one of the two
    /// recognized values.
    #[must_use]
    pub fn from_session(record: &SessionRecord) -> Option<Self> {
        let kind = record.profile_kind()?;
        Some(Self {
            name: record.name.clone(),
            host: record.host.clone(),
            port: record.port,
            kind,
            group: record.group.clone(),
            disable_dynamic_title: kind == ProfileKind::Ssh,
        })
    }
}
