//! Intake step sequencing.
//!
//! A session's position is the step whose answers it is waiting for.
//! The order is advisory: recording a step out of order still succeeds,
//! it is only reported as [`StepProgress::SkippedAhead`] or
//! [`StepProgress::Revisited`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Positions of the intake sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanningStep {
    #[default]
    Vision,
    UserInfo,
    Features,
    TimelineBudget,
    Complete,
}

impl PlanningStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [PlanningStep] {
        &[
            PlanningStep::Vision,
            PlanningStep::UserInfo,
            PlanningStep::Features,
            PlanningStep::TimelineBudget,
            PlanningStep::Complete,
        ]
    }

    /// Returns the 0-based index of this step in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            PlanningStep::Vision => 0,
            PlanningStep::UserInfo => 1,
            PlanningStep::Features => 2,
            PlanningStep::TimelineBudget => 3,
            PlanningStep::Complete => 4,
        }
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<PlanningStep> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns true if this step comes before another in order.
    pub fn is_before(&self, other: &PlanningStep) -> bool {
        self.order_index() < other.order_index()
    }

    /// Name of the operation that records this step.
    pub fn tool_name(&self) -> &'static str {
        match self {
            PlanningStep::Vision => "record_project_vision",
            PlanningStep::UserInfo => "record_user_info",
            PlanningStep::Features => "record_features",
            PlanningStep::TimelineBudget => "record_timeline_budget",
            PlanningStep::Complete => "get_deployment_guide",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanningStep::Vision => "Project Vision",
            PlanningStep::UserInfo => "Users & Interaction",
            PlanningStep::Features => "Features & Data",
            PlanningStep::TimelineBudget => "Timeline, Budget & Comfort",
            PlanningStep::Complete => "Complete",
        }
    }
}

impl StateMachine for PlanningStep {
    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}

impl fmt::Display for PlanningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a recorded step related to the session's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepProgress {
    /// The step the session was waiting for.
    InOrder,
    /// A step the session had already passed, recorded again.
    Revisited { expected: PlanningStep },
    /// A step past the session's position; earlier steps were skipped.
    SkippedAhead { expected: PlanningStep },
}

impl StepProgress {
    /// Classifies recording `recorded` while positioned at `position`.
    pub fn classify(position: PlanningStep, recorded: PlanningStep) -> Self {
        let target = recorded.next().unwrap_or(PlanningStep::Complete);
        if position.can_transition_to(&target) {
            StepProgress::InOrder
        } else if recorded.is_before(&position) || recorded == position {
            StepProgress::Revisited { expected: position }
        } else {
            StepProgress::SkippedAhead { expected: position }
        }
    }

    pub fn is_in_order(&self) -> bool {
        matches!(self, StepProgress::InOrder)
    }
}
