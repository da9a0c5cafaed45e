//! RecordUserInfoHandler - Command handler for the users and interaction step.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{PlanningError, PlanningSession, PlanningStep};
use crate::ports::SessionStore;

use super::messages;
use super::record_vision::RecordStepResult;
use super::session_lookup::apply_step;

/// Command to record who the users are and how they interact.
#[derive(Debug, Clone)]
pub struct RecordUserInfoCommand {
    pub session_id: Option<SessionId>,
    pub target_users: String,
    pub user_interaction: String,
}

/// Handler for the users step.
pub struct RecordUserInfoHandler {
    store: Arc<dyn SessionStore>,
}

impl RecordUserInfoHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RecordUserInfoCommand,
    ) -> Result<RecordStepResult, PlanningError> {
        let (session, progress) = apply_step(
            self.store.as_ref(),
            cmd.session_id.as_ref(),
            PlanningStep::UserInfo,
            Box::new(|session: &mut PlanningSession| {
                session.record_user_info(cmd.target_users.clone(), cmd.user_interaction.clone())
            }),
        )
        .await?;

        Ok(RecordStepResult {
            message: messages::user_info_recorded(&cmd.target_users, &cmd.user_interaction),
            session,
            progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::planning::StepProgress;

    async fn store_with_session() -> Arc<InMemorySessionStore> {
        let store = Arc::new(InMemorySessionStore::new());
        let session =
            PlanningSession::new(SessionId::new("planning_users").unwrap(), Timestamp::now());
        store.create(&session).await.unwrap();
        store
    }

    fn command() -> RecordUserInfoCommand {
        RecordUserInfoCommand {
            session_id: None,
            target_users: "Busy parents".to_string(),
            user_interaction: "Quick checks on their phone".to_string(),
        }
    }

    #[tokio::test]
    async fn records_both_fields_and_echoes_them() {
        let store = store_with_session().await;
        let handler = RecordUserInfoHandler::new(store.clone());

        let result = handler.handle(command()).await.unwrap();

        let requirements = result.session.requirements();
        assert_eq!(requirements.target_users, "Busy parents");
        assert_eq!(requirements.interaction, "Quick checks on their phone");
        assert!(result.message.contains("Users: Busy parents"));
        assert!(result.message.contains("record_features"));
        assert_eq!(result.session.position(), PlanningStep::Features);
    }

    #[tokio::test]
    async fn skipping_vision_still_succeeds() {
        let store = store_with_session().await;
        let handler = RecordUserInfoHandler::new(store.clone());

        let result = handler.handle(command()).await.unwrap();

        assert_eq!(
            result.progress,
            StepProgress::SkippedAhead {
                expected: PlanningStep::Vision
            }
        );
        let stored = store.find_latest().await.unwrap().unwrap();
        assert_eq!(stored.requirements().target_users, "Busy parents");
    }

    #[tokio::test]
    async fn fails_without_session() {
        let handler = RecordUserInfoHandler::new(Arc::new(InMemorySessionStore::new()));
        let result = handler.handle(command()).await;
        assert!(matches!(result, Err(PlanningError::SessionNotFound(None))));
    }
}
