//! HTTP adapter for planner endpoints.
//!
//! Exposes the intake wizard via REST API, mounted at `/api/planner`:
//! - `POST /sessions`, `/vision`, `/users`, `/features`, `/finalize` - guided intake
//! - `POST /recommend` - direct recommendation from a JSON payload
//! - `GET /explain`, `/deployment-guide` - follow-ups on the latest session
//! - `GET /sessions/latest`, `/sessions/:id` - session views

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PlannerApiError, PlannerAppState};
pub use routes::planner_router;
