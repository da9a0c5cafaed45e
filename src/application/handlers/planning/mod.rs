//! Planning command and query handlers.
//!
//! Each planner operation has one handler:
//!
//! - `StartPlanningHandler` - opens a session
//! - `RecordVisionHandler`, `RecordUserInfoHandler`, `RecordFeaturesHandler` -
//!   the guided intake steps
//! - `FinalizePlanHandler` - last step plus recommendation
//! - `RecommendStackHandler` - recommendation from a JSON payload
//! - `ExplainRecommendationHandler`, `DeploymentGuideHandler` - read-only
//!   follow-ups on the most recent session
//! - `GetSessionHandler` - raw session view

mod deployment_guide;
mod explain_recommendation;
mod finalize_plan;
mod get_session;
pub mod messages;
mod recommend_stack;
mod record_features;
mod record_user_info;
mod record_vision;
mod session_lookup;
mod start_planning;

pub use deployment_guide::{
    project_slug, DeploymentGuideHandler, DeploymentGuideQuery, DeploymentGuideResult,
};
pub use explain_recommendation::{
    ExplainRecommendationHandler, ExplainRecommendationQuery, ExplainRecommendationResult,
};
pub use finalize_plan::{FinalizePlanCommand, FinalizePlanHandler, FinalizePlanResult};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use recommend_stack::{RecommendStackCommand, RecommendStackHandler, RecommendStackResult};
pub use record_features::{RecordFeaturesCommand, RecordFeaturesHandler};
pub use record_user_info::{RecordUserInfoCommand, RecordUserInfoHandler};
pub use record_vision::{RecordStepResult, RecordVisionCommand, RecordVisionHandler};
pub use start_planning::{StartPlanningCommand, StartPlanningHandler, StartPlanningResult};
