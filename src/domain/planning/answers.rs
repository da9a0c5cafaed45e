//! Enumerated answers collected during intake.
//!
//! Every multiple-choice question the planner asks has a fixed set of
//! allowed values. Parsing an answer that falls outside the set yields
//! [`PlanningError::InvalidEnumValue`] listing what is allowed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PlanningError;

/// A closed set of answers for one question.
pub trait AnswerOption: Sized + Copy + PartialEq + 'static {
    /// Field name used in error messages.
    const FIELD: &'static str;

    /// Every allowed answer, in presentation order.
    fn all() -> &'static [Self];

    /// The wire value of this answer.
    fn as_str(&self) -> &'static str;

    /// Human-readable label (underscores become spaces).
    fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Wire values of every allowed answer.
    fn allowed_values() -> Vec<&'static str> {
        Self::all().iter().map(|option| option.as_str()).collect()
    }

    /// Parses a wire value, rejecting anything outside the allowed set.
    fn parse_answer(value: &str) -> Result<Self, PlanningError> {
        Self::all()
            .iter()
            .copied()
            .find(|option| option.as_str() == value)
            .ok_or_else(|| PlanningError::invalid_enum(Self::FIELD, value, Self::allowed_values()))
    }
}

/// How many people are expected to use the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserScale {
    Personal,
    SmallCommunity,
    Hundreds,
    ThousandsPlus,
    /// Written when the final step is called without an explicit scale.
    SmallStart,
}

impl AnswerOption for UserScale {
    const FIELD: &'static str = "user_scale";

    fn all() -> &'static [Self] {
        &[
            UserScale::Personal,
            UserScale::SmallCommunity,
            UserScale::Hundreds,
            UserScale::ThousandsPlus,
            UserScale::SmallStart,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            UserScale::Personal => "personal",
            UserScale::SmallCommunity => "small_community",
            UserScale::Hundreds => "hundreds",
            UserScale::ThousandsPlus => "thousands_plus",
            UserScale::SmallStart => "small_start",
        }
    }
}

/// When the user wants something working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Experimental,
    FewWeeks,
    MonthOrTwo,
    Urgent,
}

impl AnswerOption for Timeline {
    const FIELD: &'static str = "timeline";

    fn all() -> &'static [Self] {
        &[
            Timeline::Experimental,
            Timeline::FewWeeks,
            Timeline::MonthOrTwo,
            Timeline::Urgent,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Timeline::Experimental => "experimental",
            Timeline::FewWeeks => "few_weeks",
            Timeline::MonthOrTwo => "month_or_two",
            Timeline::Urgent => "urgent",
        }
    }
}

/// Monthly budget the user is comfortable with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    FreeOnly,
    LowCost,
    Reasonable,
    Flexible,
}

impl AnswerOption for BudgetLevel {
    const FIELD: &'static str = "budget_level";

    fn all() -> &'static [Self] {
        &[
            BudgetLevel::FreeOnly,
            BudgetLevel::LowCost,
            BudgetLevel::Reasonable,
            BudgetLevel::Flexible,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::FreeOnly => "free_only",
            BudgetLevel::LowCost => "low_cost",
            BudgetLevel::Reasonable => "reasonable",
            BudgetLevel::Flexible => "flexible",
        }
    }
}

/// How much technical work the user is willing to take on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalComfort {
    AvoidTechnical,
    BasicSetup,
    SomeTechnical,
    EnjoyTechnical,
}

impl TechnicalComfort {
    /// Returns true for the two levels that want tools to hide the details.
    pub fn is_beginner(&self) -> bool {
        matches!(
            self,
            TechnicalComfort::AvoidTechnical | TechnicalComfort::BasicSetup
        )
    }
}

impl AnswerOption for TechnicalComfort {
    const FIELD: &'static str = "technical_comfort";

    fn all() -> &'static [Self] {
        &[
            TechnicalComfort::AvoidTechnical,
            TechnicalComfort::BasicSetup,
            TechnicalComfort::SomeTechnical,
            TechnicalComfort::EnjoyTechnical,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            TechnicalComfort::AvoidTechnical => "avoid_technical",
            TechnicalComfort::BasicSetup => "basic_setup",
            TechnicalComfort::SomeTechnical => "some_technical",
            TechnicalComfort::EnjoyTechnical => "enjoy_technical",
        }
    }
}

/// Depth of the recommendation explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Basic,
    #[default]
    Detailed,
}

impl AnswerOption for DetailLevel {
    const FIELD: &'static str = "detail_level";

    fn all() -> &'static [Self] {
        &[DetailLevel::Basic, DetailLevel::Detailed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Basic => "basic",
            DetailLevel::Detailed => "detailed",
        }
    }
}

/// Hosting platform the deployment guide is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentPlatform {
    #[default]
    Recommended,
    Vercel,
    Netlify,
    Supabase,
    All,
}

impl AnswerOption for DeploymentPlatform {
    const FIELD: &'static str = "platform";

    fn all() -> &'static [Self] {
        &[
            DeploymentPlatform::Recommended,
            DeploymentPlatform::Vercel,
            DeploymentPlatform::Netlify,
            DeploymentPlatform::Supabase,
            DeploymentPlatform::All,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            DeploymentPlatform::Recommended => "recommended",
            DeploymentPlatform::Vercel => "vercel",
            DeploymentPlatform::Netlify => "netlify",
            DeploymentPlatform::Supabase => "supabase",
            DeploymentPlatform::All => "all",
        }
    }
}

macro_rules! answer_display_and_parse {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = PlanningError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as AnswerOption>::parse_answer(s)
                }
            }
        )+
    };
}

answer_display_and_parse!(
    UserScale,
    Timeline,
    BudgetLevel,
    TechnicalComfort,
    DetailLevel,
    DeploymentPlatform,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_allowed_timeline() {
        for timeline in Timeline::all() {
            assert_eq!(Timeline::parse_answer(timeline.as_str()), Ok(*timeline));
        }
    }

    #[test]
    fn rejects_value_outside_allowed_set() {
        let err = BudgetLevel::parse_answer("unlimited").unwrap_err();
        match err {
            PlanningError::InvalidEnumValue { field, value, allowed } => {
                assert_eq!(field, "budget_level");
                assert_eq!(value, "unlimited");
                assert_eq!(allowed, vec!["free_only", "low_cost", "reasonable", "flexible"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(TechnicalComfort::parse_answer("Basic_Setup").is_err());
    }

    #[test]
    fn label_replaces_underscores() {
        assert_eq!(BudgetLevel::FreeOnly.label(), "free only");
        assert_eq!(Timeline::MonthOrTwo.label(), "month or two");
    }

    #[test]
    fn from_str_delegates_to_parse_answer() {
        let scale: UserScale = "thousands_plus".parse().unwrap();
        assert_eq!(scale, UserScale::ThousandsPlus);
        assert!("lots".parse::<UserScale>().is_err());
    }

    #[test]
    fn serde_uses_wire_values() {
        let json = serde_json::to_string(&TechnicalComfort::EnjoyTechnical).unwrap();
        assert_eq!(json, "\"enjoy_technical\"");
        let scale: UserScale = serde_json::from_str("\"small_start\"").unwrap();
        assert_eq!(scale, UserScale::SmallStart);
    }

    #[test]
    fn beginner_comfort_levels() {
        assert!(TechnicalComfort::AvoidTechnical.is_beginner());
        assert!(TechnicalComfort::BasicSetup.is_beginner());
        assert!(!TechnicalComfort::SomeTechnical.is_beginner());
        assert!(!TechnicalComfort::EnjoyTechnical.is_beginner());
    }

    #[test]
    fn read_only_option_defaults() {
        assert_eq!(DetailLevel::default(), DetailLevel::Detailed);
        assert_eq!(DeploymentPlatform::default(), DeploymentPlatform::Recommended);
    }
}
