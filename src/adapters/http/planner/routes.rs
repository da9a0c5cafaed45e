//! Axum router configuration for planner endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    deployment_guide, explain, finalize_plan, get_latest_session, get_session, record_features,
    record_user_info, record_vision, recommend, start_session, PlannerAppState,
};

/// Create the planner API router.
///
/// # Routes
///
/// ## Guided intake
/// - `POST /sessions` - Start a session
/// - `POST /vision` - Record the vision
/// - `POST /users` - Record users and interaction
/// - `POST /features` - Record features and data needs
/// - `POST /finalize` - Record timeline, budget and comfort; get recommendation
///
/// ## Direct
/// - `POST /recommend` - Recommend from a requirements payload
///
/// ## Follow-ups
/// - `GET /explain?detail_level=` - Explain the latest recommendation
/// - `GET /deployment-guide?platform=` - Setup instructions
/// - `GET /sessions/latest` - Most recent session
/// - `GET /sessions/:id` - Session by id
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api/planner", planner_router())
///     .with_state(app_state);
/// ```
pub fn planner_router() -> Router<PlannerAppState> {
    Router::new()
        .route("/sessions", post(start_session))
        .route("/sessions/latest", get(get_latest_session))
        .route("/sessions/:id", get(get_session))
        .route("/vision", post(record_vision))
        .route("/users", post(record_user_info))
        .route("/features", post(record_features))
        .route("/finalize", post(finalize_plan))
        .route("/recommend", post(recommend))
        .route("/explain", get(explain))
        .route("/deployment-guide", get(deployment_guide))
}
