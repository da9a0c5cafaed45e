//! In-Memory Session Store Adapter
//!
//! Keeps planning sessions in a map for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::planning::{PlanningSession, StepProgress};
use crate::ports::{SessionStore, StepChange};

#[derive(Debug, Default)]
struct StoreState {
    sessions: HashMap<SessionId, PlanningSession>,
    latest: Option<SessionId>,
}

/// In-memory storage for planning sessions.
///
/// Steps run under the write lock, so concurrent steps on one session
/// serialize instead of overwriting each other.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: &PlanningSession) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.sessions.insert(session.id().clone(), session.clone());
        state.latest = Some(session.id().clone());
        Ok(())
    }

    async fn record_step(
        &self,
        id: Option<&SessionId>,
        change: StepChange<'_>,
    ) -> Result<Option<(PlanningSession, StepProgress)>, DomainError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let session = match id.or(state.latest.as_ref()) {
            Some(id) => state.sessions.get_mut(id),
            None => None,
        };
        let Some(session) = session else {
            return Ok(None);
        };

        let progress = change(session);
        Ok(Some((session.clone(), progress)))
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<PlanningSession>, DomainError> {
        let state = self.state.read().await;
        Ok(state.sessions.get(id).cloned())
    }

    async fn find_latest(&self) -> Result<Option<PlanningSession>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .latest
            .as_ref()
            .and_then(|id| state.sessions.get(id))
            .cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.state.read().await.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn test_session(id: &str) -> PlanningSession {
        PlanningSession::new(SessionId::new(id).unwrap(), Timestamp::now())
    }

    #[tokio::test]
    async fn create_and_find_session() {
        let store = InMemorySessionStore::new();
        let session = test_session("planning_a");

        store.create(&session).await.unwrap();

        let loaded = store.find_by_id(session.id()).await.unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn find_unknown_session_returns_none() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new("planning_missing").unwrap();
        assert!(store.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn latest_is_none_when_empty() {
        let store = InMemorySessionStore::new();
        assert!(store.find_latest().await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn latest_tracks_last_created_not_key_order() {
        let store = InMemorySessionStore::new();
        // "zzz" sorts after "aaa" but is created first
        store.create(&test_session("planning_zzz")).await.unwrap();
        store.create(&test_session("planning_aaa")).await.unwrap();

        let latest = store.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.id().as_str(), "planning_aaa");
    }

    #[tokio::test]
    async fn record_step_without_id_targets_latest() {
        let store = InMemorySessionStore::new();
        store.create(&test_session("planning_1")).await.unwrap();
        store.create(&test_session("planning_2")).await.unwrap();

        let (session, progress) = store
            .record_step(
                None,
                Box::new(|s: &mut PlanningSession| s.record_vision("Latest")),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.id().as_str(), "planning_2");
        assert!(progress.is_in_order());
        let first = SessionId::new("planning_1").unwrap();
        let untouched = store.find_by_id(&first).await.unwrap().unwrap();
        assert!(untouched.requirements().vision.is_empty());
    }

    #[tokio::test]
    async fn record_step_on_explicit_id_keeps_latest_pointer() {
        let store = InMemorySessionStore::new();
        store.create(&test_session("planning_1")).await.unwrap();
        store.create(&test_session("planning_2")).await.unwrap();
        let first = SessionId::new("planning_1").unwrap();

        store
            .record_step(
                Some(&first),
                Box::new(|s: &mut PlanningSession| s.record_vision("Updated")),
            )
            .await
            .unwrap();

        let latest = store.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.id().as_str(), "planning_2");
        let loaded = store.find_by_id(&first).await.unwrap().unwrap();
        assert_eq!(loaded.requirements().vision, "Updated");
    }

    #[tokio::test]
    async fn record_step_on_unknown_session_skips_the_change() {
        let store = InMemorySessionStore::new();
        let ghost = SessionId::new("planning_ghost").unwrap();
        let mut called = false;

        let applied = store
            .record_step(
                Some(&ghost),
                Box::new(|s: &mut PlanningSession| {
                    called = true;
                    s.record_vision("never")
                }),
            )
            .await
            .unwrap();

        assert!(applied.is_none());
        assert!(!called);
        let latest = store
            .record_step(None, Box::new(|s: &mut PlanningSession| s.record_vision("x")))
            .await
            .unwrap();
        assert!(latest.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_steps_on_one_session_keep_every_field() {
        let store = InMemorySessionStore::new();
        store.create(&test_session("planning_busy")).await.unwrap();

        for round in 0..20 {
            let vision = format!("Idea {round}");
            let users = format!("Users {round}");
            let (a, b) = (store.clone(), store.clone());
            let (v, u) = (vision.clone(), users.clone());

            let (first, second) = tokio::join!(
                tokio::spawn(async move {
                    let change = move |s: &mut PlanningSession| s.record_vision(v);
                    a.record_step(None, Box::new(change)).await
                }),
                tokio::spawn(async move {
                    let change = move |s: &mut PlanningSession| s.record_user_info(u, "Phones");
                    b.record_step(None, Box::new(change)).await
                }),
            );
            first.unwrap().unwrap();
            second.unwrap().unwrap();

            let stored = store.find_latest().await.unwrap().unwrap();
            assert_eq!(stored.requirements().vision, vision);
            assert_eq!(stored.requirements().target_users, users);
        }
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemorySessionStore::new();
        let other = store.clone();

        let handle = tokio::spawn(async move {
            other.create(&test_session("planning_shared")).await.unwrap();
        });
        handle.await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
    }
}
