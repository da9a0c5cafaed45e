//! RecommendStackHandler - Recommends a stack straight from a serialized
//! requirements payload, skipping the guided intake.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::planning::{PlanningError, RequirementsRecord};
use crate::domain::recommendation::{StackAdvisor, StackRecommendation};
use crate::ports::SessionStore;

use super::messages;
use super::start_planning::{StartPlanningCommand, StartPlanningHandler, StartPlanningResult};

/// Command with an optional JSON requirements object.
#[derive(Debug, Clone, Default)]
pub struct RecommendStackCommand {
    pub requirements: Option<String>,
}

/// Outcome of a direct recommendation request.
#[derive(Debug, Clone)]
pub enum RecommendStackResult {
    /// The payload was parsed and evaluated. The store is untouched.
    Recommended {
        record: RequirementsRecord,
        recommendation: StackRecommendation,
        message: String,
    },
    /// No payload was given, so a guided session was started instead.
    Started(StartPlanningResult),
}

impl RecommendStackResult {
    pub fn message(&self) -> &str {
        match self {
            RecommendStackResult::Recommended { message, .. } => message,
            RecommendStackResult::Started(started) => &started.message,
        }
    }
}

/// Handler for direct recommendations.
pub struct RecommendStackHandler {
    start: StartPlanningHandler,
}

impl RecommendStackHandler {
    pub fn new(store: Arc<dyn SessionStore>, session_prefix: impl Into<String>) -> Self {
        Self {
            start: StartPlanningHandler::new(store, session_prefix),
        }
    }

    pub async fn handle(
        &self,
        cmd: RecommendStackCommand,
    ) -> Result<RecommendStackResult, PlanningError> {
        let payload = match cmd.requirements.as_deref().map(str::trim) {
            Some(payload) if !payload.is_empty() => payload,
            _ => {
                debug!("No requirements payload, starting guided planning");
                let started = self.start.handle(StartPlanningCommand).await?;
                return Ok(RecommendStackResult::Started(started));
            }
        };

        let record = RequirementsRecord::from_json(payload).map_err(|err| {
            warn!(error = %err, "Rejected requirements payload");
            err
        })?;

        let recommendation = StackAdvisor::recommend(&record);
        debug!(
            cost = recommendation.cost_estimate.as_str(),
            "Direct recommendation produced"
        );

        Ok(RecommendStackResult::Recommended {
            message: messages::direct_recommendation(&recommendation),
            record,
            recommendation,
        })
    }
}
