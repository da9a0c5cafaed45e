//! Keyword signals derived from free-text answers.

use serde::{Deserialize, Serialize};

use crate::domain::planning::RequirementsRecord;

/// Keywords in data needs or features that imply persistent storage.
pub const DATABASE_KEYWORDS: &[&str] = &[
    "store", "save", "profile", "user", "account", "data", "records",
];

/// Keywords in features that imply sign-in.
pub const AUTH_KEYWORDS: &[&str] = &["login", "account", "user", "profile", "auth", "signup"];

/// Keywords in data needs or features that imply live updates.
pub const REALTIME_KEYWORDS: &[&str] = &[
    "chat",
    "message",
    "notification",
    "real-time",
    "live",
    "collaborative",
];

/// Boolean signals computed by case-insensitive substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequirementSignals {
    pub needs_database: bool,
    pub needs_auth: bool,
    pub needs_realtime: bool,
}

impl RequirementSignals {
    /// Computes all three signals for a record.
    ///
    /// `needs_auth` looks at features only; the other two also look at
    /// data needs.
    pub fn detect(record: &RequirementsRecord) -> Self {
        let features_and_data = record.feature_and_data_text();
        let features = record.feature_text();

        Self {
            needs_database: contains_any(&features_and_data, DATABASE_KEYWORDS),
            needs_auth: contains_any(&features, AUTH_KEYWORDS),
            needs_realtime: contains_any(&features_and_data, REALTIME_KEYWORDS),
        }
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}
