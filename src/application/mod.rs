//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (start, record, finalize) write to the session store;
//! query handlers (explain, deployment guide, get session) only read it.

pub mod handlers;

pub use handlers::planning::{
    DeploymentGuideHandler, ExplainRecommendationHandler, FinalizePlanHandler,
    GetSessionHandler, RecommendStackHandler, RecordFeaturesHandler, RecordUserInfoHandler,
    RecordVisionHandler, StartPlanningHandler,
};
