//! Data models for parsed sessions and emitted profiles.

mod profile;
mod session;

pub use profile::{ProfileKind, TabbyProfile};
pub use session::{RawSession, SessionRecord};
