//! Requirements record - the accumulated intake answers for one session.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::Timestamp;

use super::answers::{AnswerOption, BudgetLevel, TechnicalComfort, Timeline, UserScale};
use super::PlanningError;

/// Answers gathered for a single planning session.
///
/// Starts empty; each intake step fills its own fields. Re-running a step
/// overwrites only that step's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsRecord {
    pub vision: String,
    pub target_users: String,
    pub interaction: String,
    pub features: Vec<String>,
    pub data_needs: String,
    pub scale: Option<UserScale>,
    pub timeline: Option<Timeline>,
    pub budget: Option<BudgetLevel>,
    pub technical_comfort: Option<TechnicalComfort>,
    pub created_at: Timestamp,
}

impl RequirementsRecord {
    /// Creates an empty record stamped with `created_at`.
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            vision: String::new(),
            target_users: String::new(),
            interaction: String::new(),
            features: Vec::new(),
            data_needs: String::new(),
            scale: None,
            timeline: None,
            budget: None,
            technical_comfort: None,
            created_at,
        }
    }

    /// Parses a serialized requirements object.
    ///
    /// Accepts the record's own field names and the long names used by
    /// earlier planner clients (`project_vision`, `core_features`, ...).
    /// `features` may be a list or one comma-separated string.
    pub fn from_json(payload: &str) -> Result<Self, PlanningError> {
        let parsed: RequirementsPayload = serde_json::from_str(payload)
            .map_err(|e| PlanningError::MalformedPayload(e.to_string()))?;
        Ok(parsed.into_record())
    }

    /// Features and data needs joined into one lower-cased haystack.
    ///
    /// Every part is separated by a space, so a keyword never matches
    /// across the end of the data needs and the first feature.
    pub fn feature_and_data_text(&self) -> String {
        let mut text = self.data_needs.to_lowercase();
        for feature in &self.features {
            text.push(' ');
            text.push_str(&feature.to_lowercase());
        }
        text
    }

    /// Features joined into one lower-cased haystack.
    pub fn feature_text(&self) -> String {
        self.features
            .iter()
            .map(|f| f.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True once the final intake step has recorded its answers.
    pub fn is_complete(&self) -> bool {
        self.timeline.is_some() && self.budget.is_some() && self.technical_comfort.is_some()
    }
}

impl Default for RequirementsRecord {
    fn default() -> Self {
        Self::new(Timestamp::now())
    }
}

/// Splits a comma-separated feature list.
///
/// Entries are trimmed, empty entries dropped, order preserved.
pub fn split_features(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(String::from)
        .collect()
}

/// Wire shape accepted by [`RequirementsRecord::from_json`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequirementsPayload {
    #[serde(default, alias = "project_vision")]
    vision: String,
    #[serde(default)]
    target_users: String,
    #[serde(default, alias = "user_interaction")]
    interaction: String,
    #[serde(default, alias = "core_features")]
    features: FeatureList,
    #[serde(default)]
    data_needs: String,
    #[serde(default, alias = "user_scale", deserialize_with = "optional_answer")]
    scale: Option<UserScale>,
    #[serde(default, deserialize_with = "optional_answer")]
    timeline: Option<Timeline>,
    #[serde(default, alias = "budget_level", deserialize_with = "optional_answer")]
    budget: Option<BudgetLevel>,
    #[serde(default, deserialize_with = "optional_answer")]
    technical_comfort: Option<TechnicalComfort>,
    #[serde(default, alias = "gathered_at")]
    created_at: Option<Timestamp>,
}

impl RequirementsPayload {
    fn into_record(self) -> RequirementsRecord {
        let mut record = RequirementsRecord::new(self.created_at.unwrap_or_else(Timestamp::now));
        record.vision = self.vision;
        record.target_users = self.target_users;
        record.interaction = self.interaction;
        record.features = self.features.into_vec();
        record.data_needs = self.data_needs;
        record.scale = self.scale;
        record.timeline = self.timeline;
        record.budget = self.budget;
        record.technical_comfort = self.technical_comfort;
        record
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeatureList {
    List(Vec<String>),
    Text(String),
}

impl Default for FeatureList {
    fn default() -> Self {
        FeatureList::List(Vec::new())
    }
}

impl FeatureList {
    fn into_vec(self) -> Vec<String> {
        match self {
            FeatureList::List(items) => items,
            FeatureList::Text(text) => split_features(&text),
        }
    }
}

/// Deserializes an optional answer; `null` and `""` both mean unanswered.
fn optional_answer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: AnswerOption,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => T::parse_answer(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
