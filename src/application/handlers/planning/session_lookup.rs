//! Shared helpers for resolving the session a planner call targets.

use tracing::{debug, warn};

use crate::domain::foundation::SessionId;
use crate::domain::planning::{PlanningError, PlanningSession, PlanningStep, StepProgress};
use crate::ports::{SessionStore, StepChange};

/// Loads the session with `id`, or the most recent one when `id` is `None`.
pub(crate) async fn resolve_session(
    store: &dyn SessionStore,
    id: Option<&SessionId>,
) -> Result<PlanningSession, PlanningError> {
    let found = match id {
        Some(id) => store.find_by_id(id).await?,
        None => store.find_latest().await?,
    };

    found.ok_or_else(|| not_found(id))
}

/// Applies one intake step to the targeted session inside the store and
/// logs how it related to the session's position.
pub(crate) async fn apply_step(
    store: &dyn SessionStore,
    id: Option<&SessionId>,
    step: PlanningStep,
    change: StepChange<'_>,
) -> Result<(PlanningSession, StepProgress), PlanningError> {
    let (session, progress) = store
        .record_step(id, change)
        .await?
        .ok_or_else(|| not_found(id))?;
    log_step_progress(&session, step, progress);
    Ok((session, progress))
}

fn not_found(id: Option<&SessionId>) -> PlanningError {
    warn!(session_id = ?id.map(SessionId::as_str), "Planning session not found");
    PlanningError::SessionNotFound(id.cloned())
}

fn log_step_progress(
    session: &PlanningSession,
    recorded: PlanningStep,
    progress: StepProgress,
) {
    match progress {
        StepProgress::InOrder => {
            debug!(session_id = %session.id(), step = %recorded, "Recorded planning step");
        }
        StepProgress::Revisited { expected } => {
            debug!(
                session_id = %session.id(),
                step = %recorded,
                expected = %expected,
                "Revisited earlier planning step"
            );
        }
        StepProgress::SkippedAhead { expected } => {
            warn!(
                session_id = %session.id(),
                step = %recorded,
                expected = %expected,
                "Planning step recorded out of order"
            );
        }
    }
}
