//! Stack Advisor - rule-based mapping from requirements to a recommendation.

use serde::{Deserialize, Serialize};

use crate::domain::planning::{BudgetLevel, RequirementsRecord, TechnicalComfort};

use super::signals::RequirementSignals;

pub const FRONTEND_RECOMMENDATION: &str =
    "Next.js (React framework) - one codebase that works in desktop and mobile browsers";

pub const HOSTING_RECOMMENDATION: &str = "Vercel (free tier covers most small projects)";

pub const DOMAIN_RECOMMENDATION: &str = "Namecheap or Google Domains (~$12/year)";

pub const COST_FREE_TIER: &str = "$0-15/month (domain + potential overages)";
pub const COST_LOW: &str = "$20-40/month";
pub const COST_SCALING: &str = "$50-150/month with room to scale";

pub const COMPLEXITY_LOW: &str = "Low - mostly drag-and-drop with good documentation";
pub const COMPLEXITY_MEDIUM: &str = "Medium - some coding required but well-supported";
pub const COMPLEXITY_HIGH: &str = "Medium-High - full control with room to customize";

const REASON_BASE: &str =
    "This stack lets you get your idea live quickly without managing servers";
const REASON_BEGINNER: &str =
    "I chose beginner-friendly tools that handle most technical details automatically";
const REASON_REALTIME: &str =
    "Supabase Realtime can push live updates like chat messages and notifications when you need them";
const REASON_SCALING: &str = "These platforms scale automatically as you grow";
const REASON_MOBILE: &str =
    "A responsive Next.js site works on phones without building a separate mobile app";

/// Backend choice from the (database, auth) decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendStack {
    /// Needs both a database and sign-in.
    DatabaseWithAuth,
    /// Needs a database only.
    DatabaseOnly,
    /// Needs sign-in only.
    AuthOnly,
    /// Needs neither.
    Serverless,
}

impl BackendStack {
    /// Looks up the decision table.
    pub fn select(signals: &RequirementSignals) -> Self {
        match (signals.needs_database, signals.needs_auth) {
            (true, true) => BackendStack::DatabaseWithAuth,
            (true, false) => BackendStack::DatabaseOnly,
            (false, true) => BackendStack::AuthOnly,
            (false, false) => BackendStack::Serverless,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BackendStack::DatabaseWithAuth => {
                "Supabase (handles database, user accounts, and API automatically)"
            }
            BackendStack::DatabaseOnly => {
                "Supabase database (managed PostgreSQL with a visual table editor)"
            }
            BackendStack::AuthOnly => "Clerk for sign-in plus Vercel Functions for server logic",
            BackendStack::Serverless => "Vercel Functions (serverless, no server management)",
        }
    }
}

/// Derived recommendation shown to the user and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRecommendation {
    pub stack_summary: String,
    pub reasoning: String,
    pub cost_estimate: String,
    pub complexity_level: String,
}

/// Pure, deterministic recommendation engine.
pub struct StackAdvisor;

impl StackAdvisor {
    /// Builds the recommendation for a record.
    ///
    /// Never fails: unanswered questions fall through to the default
    /// branch of each rule.
    pub fn recommend(record: &RequirementsRecord) -> StackRecommendation {
        let signals = RequirementSignals::detect(record);
        let backend = BackendStack::select(&signals);

        StackRecommendation {
            stack_summary: Self::stack_summary(backend),
            reasoning: Self::reasoning(record, &signals),
            cost_estimate: Self::cost_estimate(record.budget).to_string(),
            complexity_level: Self::complexity_level(record.technical_comfort).to_string(),
        }
    }

    /// Bullet block naming each layer of the stack.
    pub fn stack_summary(backend: BackendStack) -> String {
        format!(
            "\n• Frontend: {}\n• Backend: {}\n• Hosting: {}\n• Domain: {}\n",
            FRONTEND_RECOMMENDATION,
            backend.description(),
            HOSTING_RECOMMENDATION,
            DOMAIN_RECOMMENDATION
        )
    }

    /// Reasoning sentences joined with ". " and closed with a period.
    ///
    /// Signals only gate text here; they never change the stack.
    pub fn reasoning(record: &RequirementsRecord, signals: &RequirementSignals) -> String {
        let mut parts = vec![REASON_BASE];

        if record
            .technical_comfort
            .is_some_and(|comfort| comfort.is_beginner())
        {
            parts.push(REASON_BEGINNER);
        }
        if signals.needs_realtime {
            parts.push(REASON_REALTIME);
        }
        parts.push(REASON_SCALING);
        parts.push(REASON_MOBILE);

        format!("{}.", parts.join(". "))
    }

    pub fn cost_estimate(budget: Option<BudgetLevel>) -> &'static str {
        match budget {
            Some(BudgetLevel::FreeOnly) => COST_FREE_TIER,
            Some(BudgetLevel::LowCost) => COST_LOW,
            _ => COST_SCALING,
        }
    }

    pub fn complexity_level(comfort: Option<TechnicalComfort>) -> &'static str {
        match comfort {
            Some(c) if c.is_beginner() => COMPLEXITY_LOW,
            Some(TechnicalComfort::EnjoyTechnical) => COMPLEXITY_HIGH,
            _ => COMPLEXITY_MEDIUM,
        }
    }
}
