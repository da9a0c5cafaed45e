//! FinalizePlanHandler - Command handler for the timeline, budget and comfort
//! step. Completes the intake and produces the stack recommendation.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::SessionId;
use crate::domain::planning::{
    AnswerOption, BudgetLevel, PlanningError, PlanningSession, PlanningStep, StepProgress,
    TechnicalComfort, Timeline, UserScale,
};
use crate::domain::recommendation::{StackAdvisor, StackRecommendation};
use crate::ports::SessionStore;

use super::messages;
use super::session_lookup::{apply_step, resolve_session};

/// Command carrying the final answers as raw wire values.
#[derive(Debug, Clone)]
pub struct FinalizePlanCommand {
    pub session_id: Option<SessionId>,
    pub timeline: String,
    pub budget_level: String,
    pub technical_comfort: String,
    /// Expected user scale; stored as `small_start` when absent.
    pub user_scale: Option<String>,
}

/// Result of finalizing a plan.
#[derive(Debug, Clone)]
pub struct FinalizePlanResult {
    pub session: PlanningSession,
    pub progress: StepProgress,
    pub recommendation: StackRecommendation,
    pub message: String,
}

/// Parsed final answers.
#[derive(Clone, Copy)]
struct FinalAnswers {
    timeline: Timeline,
    budget: BudgetLevel,
    comfort: TechnicalComfort,
    scale: Option<UserScale>,
}

impl FinalAnswers {
    fn parse(cmd: &FinalizePlanCommand) -> Result<Self, PlanningError> {
        Ok(Self {
            timeline: Timeline::parse_answer(&cmd.timeline)?,
            budget: BudgetLevel::parse_answer(&cmd.budget_level)?,
            comfort: TechnicalComfort::parse_answer(&cmd.technical_comfort)?,
            scale: cmd
                .user_scale
                .as_deref()
                .map(UserScale::parse_answer)
                .transpose()?,
        })
    }
}

/// Handler for the final intake step.
pub struct FinalizePlanHandler {
    store: Arc<dyn SessionStore>,
}

impl FinalizePlanHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: FinalizePlanCommand) -> Result<FinalizePlanResult, PlanningError> {
        let answers = match FinalAnswers::parse(&cmd) {
            Ok(answers) => answers,
            Err(err) => {
                // a missing session is reported ahead of a bad answer
                let session =
                    resolve_session(self.store.as_ref(), cmd.session_id.as_ref()).await?;
                warn!(session_id = %session.id(), error = %err, "Rejected final planning answers");
                return Err(err);
            }
        };

        let (session, progress) = apply_step(
            self.store.as_ref(),
            cmd.session_id.as_ref(),
            PlanningStep::TimelineBudget,
            Box::new(move |session: &mut PlanningSession| {
                session.record_timeline_budget(
                    answers.timeline,
                    answers.budget,
                    answers.comfort,
                    answers.scale,
                )
            }),
        )
        .await?;

        let recommendation = StackAdvisor::recommend(session.requirements());
        info!(
            session_id = %session.id(),
            budget = %answers.budget,
            technical_comfort = %answers.comfort,
            "Planning session finalized"
        );

        Ok(FinalizePlanResult {
            message: messages::plan_recommendation(&recommendation),
            session,
            progress,
            recommendation,
        })
    }
}
