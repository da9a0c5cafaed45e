//! Session store port.
//!
//! Defines the contract for keeping planning sessions for the lifetime of
//! the process. Sessions are never deleted.
//!
//! # Design
//!
//! - **Explicit latest pointer**: the store remembers which session was
//!   created last; id-less planner calls resolve to it.
//! - **Atomic steps**: a step is applied by the store itself, resolving the
//!   target session and mutating it under one write, so concurrent steps on
//!   the same session never overwrite each other's fields.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::planning::{PlanningSession, StepProgress};
use async_trait::async_trait;

/// A step mutation applied to a stored session.
pub type StepChange<'a> = Box<dyn FnOnce(&mut PlanningSession) -> StepProgress + Send + 'a>;

/// Port for planning session storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new session and make it the most recent one.
    async fn create(&self, session: &PlanningSession) -> Result<(), DomainError>;

    /// Apply `change` to the session with `id`, or to the most recent one
    /// when `id` is `None`, and return the updated session.
    ///
    /// Returns `None` without calling `change` when no session matches.
    /// Does not move the latest pointer.
    async fn record_step(
        &self,
        id: Option<&SessionId>,
        change: StepChange<'_>,
    ) -> Result<Option<(PlanningSession, StepProgress)>, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<PlanningSession>, DomainError>;

    /// The most recently created session, if any.
    async fn find_latest(&self) -> Result<Option<PlanningSession>, DomainError>;

    /// Number of sessions held.
    async fn count(&self) -> Result<usize, DomainError>;
}
