//! ExplainRecommendationHandler - Query handler explaining the recommendation
//! for the most recent session.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::SessionId;
use crate::domain::planning::{AnswerOption, DetailLevel, PlanningError};
use crate::domain::recommendation::RequirementSignals;
use crate::ports::SessionStore;

use super::messages;

/// Query for an explanation.
#[derive(Debug, Clone, Default)]
pub struct ExplainRecommendationQuery {
    /// Raw detail level; `detailed` when absent.
    pub detail_level: Option<String>,
}

/// Result of an explanation query.
#[derive(Debug, Clone)]
pub struct ExplainRecommendationResult {
    pub session_id: SessionId,
    pub detail_level: DetailLevel,
    pub explanation: String,
}

/// Handler for explanations.
pub struct ExplainRecommendationHandler {
    store: Arc<dyn SessionStore>,
    vision_preview_chars: usize,
}

impl ExplainRecommendationHandler {
    pub fn new(store: Arc<dyn SessionStore>, vision_preview_chars: usize) -> Self {
        Self {
            store,
            vision_preview_chars,
        }
    }

    pub async fn handle(
        &self,
        query: ExplainRecommendationQuery,
    ) -> Result<ExplainRecommendationResult, PlanningError> {
        let detail_level = match query.detail_level.as_deref() {
            Some(raw) => DetailLevel::parse_answer(raw)?,
            None => DetailLevel::default(),
        };

        let session = self.store.find_latest().await?.ok_or_else(|| {
            warn!("Explanation requested with no planning sessions");
            PlanningError::NoActiveSession
        })?;

        let record = session.requirements();
        let explanation = match detail_level {
            DetailLevel::Basic => messages::basic_explanation(record, self.vision_preview_chars),
            DetailLevel::Detailed => {
                messages::detailed_explanation(record, &RequirementSignals::detect(record))
            }
        };

        debug!(session_id = %session.id(), detail_level = %detail_level, "Explained recommendation");
        Ok(ExplainRecommendationResult {
            session_id: session.id().clone(),
            detail_level,
            explanation,
        })
    }
}
