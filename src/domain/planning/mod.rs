//! Planning module - intake sessions and the answers they collect.
//!
//! # Components
//!
//! - `PlanningSession` - aggregate holding one intake's answers and position
//! - `RequirementsRecord` - the accumulated answers
//! - `PlanningStep` / `StepProgress` - advisory step sequencing
//! - `AnswerOption` - closed answer sets with allowed-value validation
//! - `PlanningError` - error taxonomy for planner operations

mod answers;
mod errors;
mod requirements;
mod session;
mod step;

pub use answers::{
    AnswerOption, BudgetLevel, DeploymentPlatform, DetailLevel, TechnicalComfort, Timeline,
    UserScale,
};
pub use errors::PlanningError;
pub use requirements::{split_features, RequirementsRecord};
pub use session::PlanningSession;
pub use step::{PlanningStep, StepProgress};
