//! Planner configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the intake wizard itself
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Leading segment of generated session ids
    #[serde(default = "default_session_prefix")]
    pub session_prefix: String,

    /// Characters of the vision echoed by the basic explanation
    #[serde(default = "default_vision_preview_chars")]
    pub vision_preview_chars: usize,

    /// Maximum length of the project directory name in deployment guides
    #[serde(default = "default_project_slug_chars")]
    pub project_slug_chars: usize,
}

impl PlannerConfig {
    /// Validate planner configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let prefix_ok = !self.session_prefix.is_empty()
            && self
                .session_prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !prefix_ok {
            return Err(ValidationError::InvalidSessionPrefix);
        }
        if self.vision_preview_chars == 0 {
            return Err(ValidationError::ZeroLength("vision_preview_chars"));
        }
        if self.project_slug_chars == 0 {
            return Err(ValidationError::ZeroLength("project_slug_chars"));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            session_prefix: default_session_prefix(),
            vision_preview_chars: default_vision_preview_chars(),
            project_slug_chars: default_project_slug_chars(),
        }
    }
}

fn default_session_prefix() -> String {
    "planning".to_string()
}

fn default_vision_preview_chars() -> usize {
    100
}

fn default_project_slug_chars() -> usize {
    20
}
