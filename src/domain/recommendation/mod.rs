//! Recommendation Module - Pure rule engine for stack recommendations.
//!
//! Everything here is stateless: a requirements record goes in, a
//! recommendation comes out. No ports or adapters are involved.
//!
//! # Components
//!
//! - `RequirementSignals` - keyword signals over features and data needs
//! - `BackendStack` - 2x2 decision table on (database, auth)
//! - `StackAdvisor` - assembles summary, reasoning, cost and complexity

mod advisor;
mod signals;

pub use advisor::{
    BackendStack, StackAdvisor, StackRecommendation, COMPLEXITY_HIGH, COMPLEXITY_LOW,
    COMPLEXITY_MEDIUM, COST_FREE_TIER, COST_LOW, COST_SCALING, DOMAIN_RECOMMENDATION,
    FRONTEND_RECOMMENDATION, HOSTING_RECOMMENDATION,
};
pub use signals::{RequirementSignals, AUTH_KEYWORDS, DATABASE_KEYWORDS, REALTIME_KEYWORDS};
