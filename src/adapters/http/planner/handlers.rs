//! HTTP handlers for planner endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::planning::{
    DeploymentGuideHandler, DeploymentGuideQuery, ExplainRecommendationHandler,
    ExplainRecommendationQuery, FinalizePlanCommand, FinalizePlanHandler, GetSessionHandler,
    GetSessionQuery, RecommendStackCommand, RecommendStackHandler, RecordFeaturesCommand,
    RecordFeaturesHandler, RecordUserInfoCommand, RecordUserInfoHandler, RecordVisionCommand,
    RecordVisionHandler, StartPlanningCommand, StartPlanningHandler,
};
use crate::config::PlannerConfig;
use crate::domain::foundation::SessionId;
use crate::domain::planning::PlanningError;
use crate::ports::SessionStore;

use super::dto::{
    optional_session_id, DeploymentGuideParams, DeploymentGuideResponse, ErrorResponse,
    ExplainParams, ExplanationResponse, FinalizePlanRequest, FinalizePlanResponse,
    GuidanceResponse, RecommendRequest, RecommendResponse, RecordFeaturesRequest,
    RecordUserInfoRequest, RecordVisionRequest, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct PlannerAppState {
    pub store: Arc<dyn SessionStore>,
    pub planner: PlannerConfig,
}

impl PlannerAppState {
    pub fn new(store: Arc<dyn SessionStore>, planner: PlannerConfig) -> Self {
        Self { store, planner }
    }

    /// Create handlers on demand from the shared state.
    pub fn start_planning_handler(&self) -> StartPlanningHandler {
        StartPlanningHandler::new(self.store.clone(), self.planner.session_prefix.clone())
    }

    pub fn record_vision_handler(&self) -> RecordVisionHandler {
        RecordVisionHandler::new(self.store.clone())
    }

    pub fn record_user_info_handler(&self) -> RecordUserInfoHandler {
        RecordUserInfoHandler::new(self.store.clone())
    }

    pub fn record_features_handler(&self) -> RecordFeaturesHandler {
        RecordFeaturesHandler::new(self.store.clone())
    }

    pub fn finalize_plan_handler(&self) -> FinalizePlanHandler {
        FinalizePlanHandler::new(self.store.clone())
    }

    pub fn recommend_stack_handler(&self) -> RecommendStackHandler {
        RecommendStackHandler::new(self.store.clone(), self.planner.session_prefix.clone())
    }

    pub fn explain_handler(&self) -> ExplainRecommendationHandler {
        ExplainRecommendationHandler::new(self.store.clone(), self.planner.vision_preview_chars)
    }

    pub fn deployment_guide_handler(&self) -> DeploymentGuideHandler {
        DeploymentGuideHandler::new(self.store.clone(), self.planner.project_slug_chars)
    }

    pub fn get_session_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/planner/sessions - Start a planning session
pub async fn start_session(
    State(state): State<PlannerAppState>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let result = state
        .start_planning_handler()
        .handle(StartPlanningCommand)
        .await?;
    Ok((StatusCode::CREATED, Json(GuidanceResponse::from(result))))
}

/// POST /api/planner/vision - Record the project vision
pub async fn record_vision(
    State(state): State<PlannerAppState>,
    Json(request): Json<RecordVisionRequest>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let cmd = RecordVisionCommand {
        session_id: optional_session_id(request.session_id),
        vision: request.vision,
    };
    let result = state.record_vision_handler().handle(cmd).await?;
    Ok(Json(GuidanceResponse::from(result)))
}

/// POST /api/planner/users - Record target users and interaction style
pub async fn record_user_info(
    State(state): State<PlannerAppState>,
    Json(request): Json<RecordUserInfoRequest>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let cmd = RecordUserInfoCommand {
        session_id: optional_session_id(request.session_id),
        target_users: request.target_users,
        user_interaction: request.user_interaction,
    };
    let result = state.record_user_info_handler().handle(cmd).await?;
    Ok(Json(GuidanceResponse::from(result)))
}

/// POST /api/planner/features - Record features and data needs
pub async fn record_features(
    State(state): State<PlannerAppState>,
    Json(request): Json<RecordFeaturesRequest>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let cmd = RecordFeaturesCommand {
        session_id: optional_session_id(request.session_id),
        core_features: request.core_features,
        data_needs: request.data_needs,
    };
    let result = state.record_features_handler().handle(cmd).await?;
    Ok(Json(GuidanceResponse::from(result)))
}

/// POST /api/planner/finalize - Record timeline, budget and comfort; recommend
pub async fn finalize_plan(
    State(state): State<PlannerAppState>,
    Json(request): Json<FinalizePlanRequest>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let cmd = FinalizePlanCommand {
        session_id: optional_session_id(request.session_id),
        timeline: request.timeline,
        budget_level: request.budget_level,
        technical_comfort: request.technical_comfort,
        user_scale: request.user_scale,
    };
    let result = state.finalize_plan_handler().handle(cmd).await?;
    Ok(Json(FinalizePlanResponse::from(result)))
}

/// POST /api/planner/recommend - Recommend from a requirements payload
///
/// An empty body, or one without `requirements`, starts a guided session.
pub async fn recommend(
    State(state): State<PlannerAppState>,
    body: String,
) -> Result<impl IntoResponse, PlannerApiError> {
    let request = if body.trim().is_empty() {
        RecommendRequest::default()
    } else {
        serde_json::from_str::<RecommendRequest>(&body)
            .map_err(|err| PlanningError::MalformedPayload(err.to_string()))?
    };

    let cmd = RecommendStackCommand {
        requirements: request.requirements_text(),
    };
    let result = state.recommend_stack_handler().handle(cmd).await?;
    Ok(Json(RecommendResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/planner/explain - Explain the latest recommendation
pub async fn explain(
    State(state): State<PlannerAppState>,
    Query(params): Query<ExplainParams>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let query = ExplainRecommendationQuery {
        detail_level: params.detail_level,
    };
    let result = state.explain_handler().handle(query).await?;
    Ok(Json(ExplanationResponse::from(result)))
}

/// GET /api/planner/deployment-guide - Step-by-step setup instructions
pub async fn deployment_guide(
    State(state): State<PlannerAppState>,
    Query(params): Query<DeploymentGuideParams>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let query = DeploymentGuideQuery {
        platform: params.platform,
    };
    let result = state.deployment_guide_handler().handle(query).await?;
    Ok(Json(DeploymentGuideResponse::from(result)))
}

/// GET /api/planner/sessions/latest - Most recent session
pub async fn get_latest_session(
    State(state): State<PlannerAppState>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let session = state
        .get_session_handler()
        .handle(GetSessionQuery::default())
        .await?;
    Ok(Json(SessionResponse::from(session)))
}

/// GET /api/planner/sessions/:id - Session by id
pub async fn get_session(
    State(state): State<PlannerAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlannerApiError> {
    let session_id =
        SessionId::new(id).map_err(|_| PlanningError::SessionNotFound(None))?;
    let session = state
        .get_session_handler()
        .handle(GetSessionQuery {
            session_id: Some(session_id),
        })
        .await?;
    Ok(Json(SessionResponse::from(session)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts planning errors to HTTP responses.
#[derive(Debug)]
pub struct PlannerApiError(PlanningError);

impl From<PlanningError> for PlannerApiError {
    fn from(err: PlanningError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlannerApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PlanningError::SessionNotFound(_) | PlanningError::NoActiveSession => {
                StatusCode::NOT_FOUND
            }
            PlanningError::InvalidEnumValue { .. } | PlanningError::MalformedPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            PlanningError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let code = self.0.code().to_string();
        let message = self.0.to_string();
        let body = match &self.0 {
            PlanningError::InvalidEnumValue { field, value, allowed } => ErrorResponse::with_details(
                code,
                message,
                serde_json::json!({ "field": field, "value": value, "allowed": allowed }),
            ),
            PlanningError::SessionNotFound(Some(id)) => ErrorResponse::with_details(
                code,
                message,
                serde_json::json!({ "session_id": id.as_str() }),
            ),
            _ => ErrorResponse::new(code, message),
        };
        (status, Json(body)).into_response()
    }
}
