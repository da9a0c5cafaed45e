//! Request and response DTOs for the planner HTTP API.

use serde::{Deserialize, Serialize};

use crate::application::handlers::planning::{
    DeploymentGuideResult, ExplainRecommendationResult, FinalizePlanResult, RecommendStackResult,
    RecordStepResult, StartPlanningResult,
};
use crate::domain::foundation::SessionId;
use crate::domain::planning::{
    AnswerOption, PlanningSession, PlanningStep, RequirementsRecord, StepProgress,
};
use crate::domain::recommendation::StackRecommendation;

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /vision`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordVisionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub vision: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordUserInfoRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub target_users: String,
    pub user_interaction: String,
}

/// Body of `POST /features`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordFeaturesRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    /// Comma-separated feature list.
    pub core_features: String,
    pub data_needs: String,
}

/// Body of `POST /finalize`.
#[derive(Debug, Clone, Deserialize)]
pub struct FinalizePlanRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub timeline: String,
    pub budget_level: String,
    pub technical_comfort: String,
    #[serde(default)]
    pub user_scale: Option<String>,
}

/// Body of `POST /recommend`.
///
/// `requirements` may be a JSON object or a string holding serialized JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub requirements: Option<serde_json::Value>,
}

impl RecommendRequest {
    /// The requirements as serialized JSON text, if any were sent.
    pub fn requirements_text(&self) -> Option<String> {
        match &self.requirements {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Query string of `GET /explain`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplainParams {
    pub detail_level: Option<String>,
}

/// Query string of `GET /deployment-guide`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentGuideParams {
    pub platform: Option<String>,
}

/// Blank ids are treated as absent so clients can send `""`.
pub fn optional_session_id(raw: Option<String>) -> Option<SessionId> {
    raw.filter(|id| !id.trim().is_empty())
        .and_then(|id| SessionId::new(id).ok())
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Reply to a session start or an intake step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuidanceResponse {
    pub session_id: String,
    /// Step the session now waits for.
    pub position: PlanningStep,
    /// Operation to call next.
    pub next_tool: String,
    /// `in_order`, `revisited` or `skipped_ahead`; absent for a new session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    pub message: String,
}

impl GuidanceResponse {
    fn for_session(session: &PlanningSession, progress: Option<StepProgress>, message: String) -> Self {
        Self {
            session_id: session.id().to_string(),
            position: session.position(),
            next_tool: session.position().tool_name().to_string(),
            progress: progress.map(|p| progress_label(p).to_string()),
            message,
        }
    }
}

impl From<StartPlanningResult> for GuidanceResponse {
    fn from(result: StartPlanningResult) -> Self {
        Self::for_session(&result.session, None, result.message)
    }
}

impl From<RecordStepResult> for GuidanceResponse {
    fn from(result: RecordStepResult) -> Self {
        Self::for_session(&result.session, Some(result.progress), result.message)
    }
}

fn progress_label(progress: StepProgress) -> &'static str {
    match progress {
        StepProgress::InOrder => "in_order",
        StepProgress::Revisited { .. } => "revisited",
        StepProgress::SkippedAhead { .. } => "skipped_ahead",
    }
}

/// Reply to `POST /finalize`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalizePlanResponse {
    pub session_id: String,
    pub progress: String,
    pub recommendation: StackRecommendation,
    pub message: String,
}

impl From<FinalizePlanResult> for FinalizePlanResponse {
    fn from(result: FinalizePlanResult) -> Self {
        Self {
            session_id: result.session.id().to_string(),
            progress: progress_label(result.progress).to_string(),
            recommendation: result.recommendation,
            message: result.message,
        }
    }
}

/// Reply to `POST /recommend`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RecommendResponse {
    /// Recommendation computed from the payload.
    Direct {
        recommendation: StackRecommendation,
        message: String,
    },
    /// No payload: a guided session was started.
    Guided(GuidanceResponse),
}

impl From<RecommendStackResult> for RecommendResponse {
    fn from(result: RecommendStackResult) -> Self {
        match result {
            RecommendStackResult::Recommended {
                recommendation,
                message,
                ..
            } => RecommendResponse::Direct {
                recommendation,
                message,
            },
            RecommendStackResult::Started(started) => RecommendResponse::Guided(started.into()),
        }
    }
}

/// Reply to `GET /explain`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExplanationResponse {
    pub session_id: String,
    pub detail_level: String,
    pub explanation: String,
}

impl From<ExplainRecommendationResult> for ExplanationResponse {
    fn from(result: ExplainRecommendationResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            detail_level: result.detail_level.as_str().to_string(),
            explanation: result.explanation,
        }
    }
}

/// Reply to `GET /deployment-guide`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeploymentGuideResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub platform: String,
    pub guide: String,
}

impl From<DeploymentGuideResult> for DeploymentGuideResponse {
    fn from(result: DeploymentGuideResult) -> Self {
        Self {
            session_id: result.session_id.map(|id| id.to_string()),
            platform: result.platform.as_str().to_string(),
            guide: result.guide,
        }
    }
}

/// Read-only session view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub session_id: String,
    pub position: PlanningStep,
    pub complete: bool,
    pub requirements: RequirementsRecord,
    pub updated_at: String,
}

impl From<PlanningSession> for SessionResponse {
    fn from(session: PlanningSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            position: session.position(),
            complete: session.is_complete(),
            updated_at: session.updated_at().to_rfc3339(),
            requirements: session.requirements().clone(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use serde_json::json;

    #[test]
    fn recommend_request_accepts_object_or_string() {
        let as_object: RecommendRequest =
            serde_json::from_value(json!({"requirements": {"vision": "x"}})).unwrap();
        assert_eq!(as_object.requirements_text().unwrap(), r#"{"vision":"x"}"#);

        let as_string: RecommendRequest =
            serde_json::from_value(json!({"requirements": "{\"vision\": \"x\"}"})).unwrap();
        assert_eq!(as_string.requirements_text().unwrap(), "{\"vision\": \"x\"}");

        let empty: RecommendRequest = serde_json::from_value(json!({})).unwrap();
        assert!(empty.requirements_text().is_none());

        let null: RecommendRequest = serde_json::from_value(json!({"requirements": null})).unwrap();
        assert!(null.requirements_text().is_none());
    }

    #[test]
    fn blank_session_id_is_absent() {
        assert!(optional_session_id(None).is_none());
        assert!(optional_session_id(Some("  ".to_string())).is_none());
        assert_eq!(
            optional_session_id(Some("planning_1".to_string())).unwrap().as_str(),
            "planning_1"
        );
    }

    #[test]
    fn guidance_serializes_step_in_snake_case() {
        let session = PlanningSession::new(SessionId::new("planning_dto").unwrap(), Timestamp::now());
        let response = GuidanceResponse::for_session(&session, None, "hi".to_string());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["position"], "vision");
        assert_eq!(value["next_tool"], "record_project_vision");
        assert!(value.get("progress").is_none());
    }

    #[test]
    fn recommend_response_is_tagged_by_mode() {
        let response = RecommendResponse::Direct {
            recommendation: StackRecommendation {
                stack_summary: "s".into(),
                reasoning: "r".into(),
                cost_estimate: "c".into(),
                complexity_level: "l".into(),
            },
            message: "m".into(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["mode"], "direct");
        assert_eq!(value["recommendation"]["cost_estimate"], "c");
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let response = ErrorResponse::new("SESSION_NOT_FOUND", "Not found");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn error_response_with_details_includes_details() {
        let details = json!({"field": "platform"});
        let response = ErrorResponse::with_details("INVALID_ENUM_VALUE", "Invalid", details.clone());
        assert_eq!(response.details, Some(details));
    }
}
