//! GetSessionHandler - Query handler returning a stored planning session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{PlanningError, PlanningSession};
use crate::ports::SessionStore;

use super::session_lookup::resolve_session;

/// Query for a session; the most recent one when `session_id` is `None`.
#[derive(Debug, Clone, Default)]
pub struct GetSessionQuery {
    pub session_id: Option<SessionId>,
}

/// Handler for reading sessions.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<PlanningSession, PlanningError> {
        resolve_session(self.store.as_ref(), query.session_id.as_ref()).await
    }
}
