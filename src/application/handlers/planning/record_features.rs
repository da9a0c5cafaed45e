//! RecordFeaturesHandler - Command handler for the features and data step.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{PlanningError, PlanningSession, PlanningStep};
use crate::ports::SessionStore;

use super::messages;
use super::record_vision::RecordStepResult;
use super::session_lookup::apply_step;

/// Command to record features and data needs.
#[derive(Debug, Clone)]
pub struct RecordFeaturesCommand {
    pub session_id: Option<SessionId>,
    /// Comma-separated feature list.
    pub core_features: String,
    pub data_needs: String,
}

/// Handler for the features step.
pub struct RecordFeaturesHandler {
    store: Arc<dyn SessionStore>,
}

impl RecordFeaturesHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RecordFeaturesCommand,
    ) -> Result<RecordStepResult, PlanningError> {
        let (session, progress) = apply_step(
            self.store.as_ref(),
            cmd.session_id.as_ref(),
            PlanningStep::Features,
            Box::new(|session: &mut PlanningSession| {
                session.record_features(&cmd.core_features, cmd.data_needs.clone())
            }),
        )
        .await?;

        let message =
            messages::features_recorded(&session.requirements().features, &cmd.data_needs);
        Ok(RecordStepResult {
            session,
            progress,
            message,
        })
    }
}
