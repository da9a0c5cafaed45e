//! StartPlanningHandler - Command handler for opening a new planning session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::planning::{PlanningError, PlanningSession};
use crate::ports::SessionStore;

use super::messages;

/// Command to open a new planning session.
#[derive(Debug, Clone, Default)]
pub struct StartPlanningCommand;

/// Result of opening a session.
#[derive(Debug, Clone)]
pub struct StartPlanningResult {
    pub session: PlanningSession,
    pub message: String,
}

/// Handler for opening planning sessions.
pub struct StartPlanningHandler {
    store: Arc<dyn SessionStore>,
    session_prefix: String,
}

impl StartPlanningHandler {
    pub fn new(store: Arc<dyn SessionStore>, session_prefix: impl Into<String>) -> Self {
        Self {
            store,
            session_prefix: session_prefix.into(),
        }
    }

    pub async fn handle(
        &self,
        _cmd: StartPlanningCommand,
    ) -> Result<StartPlanningResult, PlanningError> {
        let now = Timestamp::now();
        let session = PlanningSession::new(SessionId::generate(&self.session_prefix, now), now);

        self.store.create(&session).await?;

        info!(session_id = %session.id(), "Planning session started");

        let message = messages::welcome_message(session.id());
        Ok(StartPlanningResult { session, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::planning::{PlanningStep, StepProgress};
    use crate::ports::StepChange;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn create(&self, _session: &PlanningSession) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::InternalError,
                "Simulated create failure",
            ))
        }

        async fn record_step(
            &self,
            _id: Option<&SessionId>,
            _change: StepChange<'_>,
        ) -> Result<Option<(PlanningSession, StepProgress)>, DomainError> {
            Ok(None)
        }

        async fn find_by_id(
            &self,
            _id: &SessionId,
        ) -> Result<Option<PlanningSession>, DomainError> {
            Ok(None)
        }

        async fn find_latest(&self) -> Result<Option<PlanningSession>, DomainError> {
            Ok(None)
        }

        async fn count(&self) -> Result<usize, DomainError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn creates_session_waiting_for_vision() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartPlanningHandler::new(store.clone(), "planning");

        let result = handler.handle(StartPlanningCommand).await.unwrap();

        assert!(result.session.id().as_str().starts_with("planning_"));
        assert_eq!(result.session.position(), PlanningStep::Vision);
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(result.message.contains("record_project_vision"));
    }

    #[tokio::test]
    async fn new_session_becomes_latest() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartPlanningHandler::new(store.clone(), "planning");

        handler.handle(StartPlanningCommand).await.unwrap();
        let second = handler.handle(StartPlanningCommand).await.unwrap();

        let latest = store.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.id(), second.session.id());
    }

    #[tokio::test]
    async fn sessions_started_in_the_same_second_are_distinct() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartPlanningHandler::new(store.clone(), "planning");

        let a = handler.handle(StartPlanningCommand).await.unwrap();
        let b = handler.handle(StartPlanningCommand).await.unwrap();

        assert_ne!(a.session.id(), b.session.id());
        assert!(a.session.id() < b.session.id());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn uses_configured_prefix() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartPlanningHandler::new(store, "intake");

        let result = handler.handle(StartPlanningCommand).await.unwrap();
        assert!(result.session.id().as_str().starts_with("intake_"));
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure_error() {
        let handler = StartPlanningHandler::new(Arc::new(FailingStore), "planning");

        let result = handler.handle(StartPlanningCommand).await;
        assert!(matches!(result, Err(PlanningError::Infrastructure(_))));
    }
}
