//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `planning` - Intake sessions, requirements, step sequencing
//! - `recommendation` - Pure rule engine for stack recommendations

pub mod foundation;
pub mod planning;
pub mod recommendation;
