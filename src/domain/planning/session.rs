//! PlanningSession aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, StateMachine, Timestamp};

use super::answers::{BudgetLevel, TechnicalComfort, Timeline, UserScale};
use super::requirements::{split_features, RequirementsRecord};
use super::step::{PlanningStep, StepProgress};

/// One user's intake: the requirements gathered so far and the step the
/// session is waiting on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSession {
    id: SessionId,
    requirements: RequirementsRecord,
    position: PlanningStep,
    updated_at: Timestamp,
}

impl PlanningSession {
    /// Creates a session waiting for the project vision.
    pub fn new(id: SessionId, created_at: Timestamp) -> Self {
        Self {
            id,
            requirements: RequirementsRecord::new(created_at),
            position: PlanningStep::Vision,
            updated_at: created_at,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn requirements(&self) -> &RequirementsRecord {
        &self.requirements
    }

    /// The step this session is waiting for.
    pub fn position(&self) -> PlanningStep {
        self.position
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_complete(&self) -> bool {
        self.position.is_terminal()
    }

    /// Records the project vision.
    pub fn record_vision(&mut self, vision: impl Into<String>) -> StepProgress {
        self.requirements.vision = vision.into();
        self.advance(PlanningStep::Vision)
    }

    /// Records who the users are and how they will interact.
    pub fn record_user_info(
        &mut self,
        target_users: impl Into<String>,
        interaction: impl Into<String>,
    ) -> StepProgress {
        self.requirements.target_users = target_users.into();
        self.requirements.interaction = interaction.into();
        self.advance(PlanningStep::UserInfo)
    }

    /// Records comma-separated features and the data the project handles.
    pub fn record_features(
        &mut self,
        features_text: &str,
        data_needs: impl Into<String>,
    ) -> StepProgress {
        self.requirements.features = split_features(features_text);
        self.requirements.data_needs = data_needs.into();
        self.advance(PlanningStep::Features)
    }

    /// Records the final answers. A missing scale is stored as
    /// [`UserScale::SmallStart`].
    pub fn record_timeline_budget(
        &mut self,
        timeline: Timeline,
        budget: BudgetLevel,
        technical_comfort: TechnicalComfort,
        scale: Option<UserScale>,
    ) -> StepProgress {
        self.requirements.timeline = Some(timeline);
        self.requirements.budget = Some(budget);
        self.requirements.technical_comfort = Some(technical_comfort);
        self.requirements.scale = Some(scale.unwrap_or(UserScale::SmallStart));
        self.advance(PlanningStep::TimelineBudget)
    }

    fn advance(&mut self, recorded: PlanningStep) -> StepProgress {
        let progress = StepProgress::classify(self.position, recorded);
        self.position = recorded.next().unwrap_or(PlanningStep::Complete);
        self.updated_at = Timestamp::now();
        progress
    }
}
