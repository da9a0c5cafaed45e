//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Timestamp, ValidationError};

/// Per-process sequence appended to generated ids so that two sessions
/// started within the same second still get distinct, ordered ids.
static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Identifier for a planning session.
///
/// Generated ids have the form `<prefix>_<YYYYmmdd_HHMMSS>_<seq>`, so they
/// sort by creation order within a process. Ids supplied by callers are
/// accepted as opaque strings and only looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a new timestamp-derived SessionId.
    pub fn generate(prefix: &str, at: Timestamp) -> Self {
        let seq = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "{}_{}_{:06}",
            prefix,
            at.as_datetime().format("%Y%m%d_%H%M%S"),
            seq
        ))
    }

    /// Wraps an existing id, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_starts_with_prefix_and_timestamp() {
        let ts = Timestamp::from_unix_secs(1705276800);
        let id = SessionId::generate("planning", ts);
        assert!(id.as_str().starts_with("planning_20240115_000000_"));
    }

    #[test]
    fn generated_ids_are_unique_within_the_same_second() {
        let ts = Timestamp::from_unix_secs(1705276800);
        let first = SessionId::generate("planning", ts);
        let second = SessionId::generate("planning", ts);
        assert_ne!(first, second);
        assert!(first < second);
    }

    #[test]
    fn later_timestamp_sorts_after_earlier() {
        let first = SessionId::generate("planning", Timestamp::from_unix_secs(1705276800));
        let second = SessionId::generate("planning", Timestamp::from_unix_secs(1705276801));
        assert!(first < second);
    }

    #[test]
    fn new_rejects_empty_id() {
        assert!(SessionId::new("").is_err());
        assert!(SessionId::new("   ").is_err());
    }

    #[test]
    fn from_str_accepts_arbitrary_ids() {
        let id: SessionId = "planning_20240115_103000".parse().unwrap();
        assert_eq!(id.to_string(), "planning_20240115_103000");
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let id = SessionId::new("planning_1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"planning_1\"");
    }
}
