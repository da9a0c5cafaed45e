//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API for the planner
//! - `storage` - Session store implementations

pub mod http;
pub mod storage;

pub use self::http::{app_router, PlannerAppState};
pub use storage::InMemorySessionStore;
