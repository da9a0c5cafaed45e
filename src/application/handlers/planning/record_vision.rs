//! RecordVisionHandler - Command handler for the vision step.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{PlanningError, PlanningSession, PlanningStep, StepProgress};
use crate::ports::SessionStore;

use super::messages;
use super::session_lookup::apply_step;

/// Command to record the project vision.
#[derive(Debug, Clone)]
pub struct RecordVisionCommand {
    /// Target session; the most recent one when `None`.
    pub session_id: Option<SessionId>,
    pub vision: String,
}

/// Result of a recorded step.
#[derive(Debug, Clone)]
pub struct RecordStepResult {
    pub session: PlanningSession,
    pub progress: StepProgress,
    pub message: String,
}

/// Handler for the vision step.
pub struct RecordVisionHandler {
    store: Arc<dyn SessionStore>,
}

impl RecordVisionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RecordVisionCommand) -> Result<RecordStepResult, PlanningError> {
        let (session, progress) = apply_step(
            self.store.as_ref(),
            cmd.session_id.as_ref(),
            PlanningStep::Vision,
            Box::new(|session: &mut PlanningSession| session.record_vision(cmd.vision.clone())),
        )
        .await?;

        Ok(RecordStepResult {
            message: messages::vision_recorded(&cmd.vision),
            session,
            progress,
        })
    }
}
