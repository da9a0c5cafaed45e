//! Message templates for the intake conversation.
//!
//! Every planner reply is plain text meant to be shown to the user as-is.
//! Step replies echo what was recorded and name the operation to call next.

use crate::domain::foundation::SessionId;
use crate::domain::planning::{
    AnswerOption, BudgetLevel, PlanningStep, RequirementsRecord, TechnicalComfort, Timeline,
    UserScale,
};
use crate::domain::recommendation::{RequirementSignals, StackRecommendation};

/// Placeholder for questions the user has not answered yet.
pub const NOT_ANSWERED: &str = "not specified yet";

/// Greeting returned when a new session starts.
pub fn welcome_message(session_id: &SessionId) -> String {
    format!(
        r#"Let's start planning your project! (session: {session_id})

First, tell me about your vision.

What problem are you trying to solve, or what idea do you want to build?
Think about it like you're explaining to a friend - what would this thing do and why would people want to use it?

When you're ready, call `{next}` with your answer."#,
        session_id = session_id,
        next = PlanningStep::Vision.tool_name(),
    )
}

/// Reply after the vision step.
pub fn vision_recorded(vision: &str) -> String {
    format!(
        r#"Great! I've noted your vision: "{vision}"

Now let's talk about who will use this.

Who do you imagine using your project? Are they:
- People like you who have a specific problem to solve?
- Businesses that need this functionality?
- General consumers who would find this useful?
- A specific community or group?

Also, how do you picture them using it? Will they:
- Visit a website and use it occasionally?
- Use it regularly as part of their daily routine?
- Access it on their phone while on the go?
- Need to collaborate with others?

Call `{next}` with `target_users` and `user_interaction`."#,
        vision = vision,
        next = PlanningStep::UserInfo.tool_name(),
    )
}

/// Reply after the users and interaction step.
pub fn user_info_recorded(target_users: &str, interaction: &str) -> String {
    format!(
        r#"Perfect! Users: {target_users}
How they'll use it: {interaction}

Now let's think about what your project actually needs to do.

What are the main things people will do with your project? For example:
- Will they create accounts and log in?
- Do they need to store or upload information?
- Will they search for things or browse content?
- Do they need to communicate with others?
- Will there be payments or transactions?
- Does it need to send notifications or emails?

Also, what kind of information will your project work with?
- User profiles and preferences?
- Documents, images, or files?
- Data from other websites or services?
- Real-time information that changes frequently?

Call `{next}` with `core_features` (comma-separated) and `data_needs`."#,
        target_users = target_users,
        interaction = interaction,
        next = PlanningStep::Features.tool_name(),
    )
}

/// Reply after the features and data step.
pub fn features_recorded(features: &[String], data_needs: &str) -> String {
    let feature_list = if features.is_empty() {
        format!("- {}", NOT_ANSWERED)
    } else {
        features
            .iter()
            .map(|feature| format!("- {}", feature))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"Got it! Features:
{feature_list}
Data: {data_needs}

Almost done! Last questions about timing, budget and comfort level.

When do you want to have something working? ({timelines})
What's your budget situation for this project? ({budgets})
How comfortable are you with technical stuff? ({comforts})

Call `{next}` with `timeline`, `budget_level` and `technical_comfort` to get your recommendation."#,
        feature_list = feature_list,
        data_needs = data_needs,
        timelines = Timeline::allowed_values().join(", "),
        budgets = BudgetLevel::allowed_values().join(", "),
        comforts = TechnicalComfort::allowed_values().join(", "),
        next = PlanningStep::TimelineBudget.tool_name(),
    )
}

/// Final reply of the guided flow.
pub fn plan_recommendation(recommendation: &StackRecommendation) -> String {
    format!(
        r#"🎉 Perfect! Based on what you've told me, here's my recommendation:

**Recommended Tech Stack:**
{stack}

**Why this works for you:**
{reasoning}

**Estimated monthly cost:** {cost}
**Setup complexity:** {complexity}

Use the `get_deployment_guide` tool to get step-by-step instructions for setting this up!

You can also use `explain_recommendation` if you want more details about why I suggested this approach."#,
        stack = recommendation.stack_summary,
        reasoning = recommendation.reasoning,
        cost = recommendation.cost_estimate,
        complexity = recommendation.complexity_level,
    )
}

/// Reply for a recommendation built straight from a payload.
pub fn direct_recommendation(recommendation: &StackRecommendation) -> String {
    format!(
        r#"**Tech Stack Recommendation:**

{stack}

**Reasoning:** {reasoning}
**Estimated Cost:** {cost}
**Setup Complexity:** {complexity}"#,
        stack = recommendation.stack_summary,
        reasoning = recommendation.reasoning,
        cost = recommendation.cost_estimate,
        complexity = recommendation.complexity_level,
    )
}

/// Short, jargon-free explanation.
pub fn basic_explanation(record: &RequirementsRecord, vision_preview_chars: usize) -> String {
    let preview: String = record.vision.chars().take(vision_preview_chars).collect();

    format!(
        r#"**Why I recommended this stack for your project:**

Based on your vision: "{preview}..."

• **Easy to start:** The tools I suggested are designed for people who want to focus on their idea, not wrestle with technical setup
• **Grows with you:** These platforms automatically handle more users without you having to rebuild everything
• **Budget-friendly:** Fits your {budget} budget with predictable costs
• **Timeline-appropriate:** You can get a working version deployed in {timeline}

The combination of these tools means you spend time building features users want, not managing servers or databases."#,
        preview = preview,
        budget = answer_label(record.budget),
        timeline = answer_label(record.timeline),
    )
}

/// Field-by-field explanation with the architecture rationale.
pub fn detailed_explanation(record: &RequirementsRecord, signals: &RequirementSignals) -> String {
    format!(
        r#"**Detailed Technical Reasoning:**

**Project Analysis:**
- Vision: {vision}
- Users: {users}
- Interaction: {interaction}
- Features: {features}
- Data needs: {data_needs}
- Scale: {scale} users expected
- Timeline: {timeline}
- Budget: {budget}
- Technical comfort: {comfort}

**What your answers tell me:**
- Stores data: {database}
- Needs sign-in: {auth}
- Needs live updates: {realtime}

**Architecture Decisions:**

1. **Frontend Choice:** Modern React-based approach because:
   - Large community and excellent documentation
   - Component-based architecture scales well
   - Great tooling and development experience

2. **Backend Strategy:** Platform-as-a-Service approach because:
   - Reduces operational overhead (no server management)
   - Built-in scaling and security features
   - Pay-as-you-grow pricing model

3. **Database Selection:** Based on your data needs:
   - Managed databases reduce maintenance burden
   - Built-in backup and security features
   - Automatic scaling capabilities

4. **Hosting Platform:** Cloud-native deployment because:
   - Global CDN for fast performance
   - Automatic HTTPS and security
   - Integrated CI/CD pipelines

This stack follows modern "Jamstack" principles: JavaScript frontend, APIs, and Markup pre-built where possible."#,
        vision = text_or_unset(&record.vision),
        users = text_or_unset(&record.target_users),
        interaction = text_or_unset(&record.interaction),
        features = if record.features.is_empty() {
            NOT_ANSWERED.to_string()
        } else {
            record.features.join(", ")
        },
        data_needs = text_or_unset(&record.data_needs),
        scale = answer_value::<UserScale>(record.scale),
        timeline = answer_value(record.timeline),
        budget = answer_value(record.budget),
        comfort = answer_value(record.technical_comfort),
        database = yes_no(signals.needs_database),
        auth = yes_no(signals.needs_auth),
        realtime = yes_no(signals.needs_realtime),
    )
}

/// Label for an answer (`free only`), or the placeholder.
pub fn answer_label<T: AnswerOption>(answer: Option<T>) -> String {
    answer
        .map(|a| a.label())
        .unwrap_or_else(|| NOT_ANSWERED.to_string())
}

/// Wire value for an answer (`free_only`), or the placeholder.
pub fn answer_value<T: AnswerOption>(answer: Option<T>) -> &'static str {
    answer.map(|a| a.as_str()).unwrap_or(NOT_ANSWERED)
}

fn text_or_unset(text: &str) -> &str {
    if text.trim().is_empty() {
        NOT_ANSWERED
    } else {
        text
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::StackAdvisor;

    #[test]
    fn welcome_names_session_and_next_tool() {
        let id = SessionId::new("planning_20240115_103000_000001").unwrap();
        let msg = welcome_message(&id);
        assert!(msg.contains("planning_20240115_103000_000001"));
        assert!(msg.contains("record_project_vision"));
    }

    #[test]
    fn vision_reply_echoes_vision_and_points_to_user_info() {
        let msg = vision_recorded("A plant watering reminder");
        assert!(msg.contains("\"A plant watering reminder\""));
        assert!(msg.contains("record_user_info"));
    }

    #[test]
    fn features_reply_lists_each_feature_and_allowed_answers() {
        let msg = features_recorded(&["login".into(), "photo upload".into()], "photos");
        assert!(msg.contains("- login\n- photo upload"));
        assert!(msg.contains("free_only, low_cost, reasonable, flexible"));
        assert!(msg.contains("record_timeline_budget"));
    }

    #[test]
    fn features_reply_with_no_features() {
        let msg = features_recorded(&[], "none");
        assert!(msg.contains(NOT_ANSWERED));
    }

    #[test]
    fn plan_recommendation_includes_all_parts() {
        let rec = StackAdvisor::recommend(&RequirementsRecord::default());
        let msg = plan_recommendation(&rec);
        assert!(msg.contains(&rec.stack_summary));
        assert!(msg.contains(&rec.reasoning));
        assert!(msg.contains(&format!("**Estimated monthly cost:** {}", rec.cost_estimate)));
        assert!(msg.contains(&format!("**Setup complexity:** {}", rec.complexity_level)));
    }

    #[test]
    fn basic_explanation_truncates_vision_by_characters() {
        let mut record = RequirementsRecord::default();
        record.vision = "é".repeat(150);
        record.budget = Some(BudgetLevel::FreeOnly);
        record.timeline = Some(Timeline::FewWeeks);

        let msg = basic_explanation(&record, 100);
        assert!(msg.contains(&format!("\"{}...\"", "é".repeat(100))));
        assert!(!msg.contains(&"é".repeat(101)));
        assert!(msg.contains("Fits your free only budget"));
        assert!(msg.contains("deployed in few weeks"));
    }

    #[test]
    fn detailed_explanation_marks_unanswered_fields() {
        let record = RequirementsRecord::default();
        let msg = detailed_explanation(&record, &RequirementSignals::default());
        assert!(msg.contains(&format!("- Budget: {}", NOT_ANSWERED)));
        assert!(msg.contains("- Stores data: no"));
    }

    #[test]
    fn answer_helpers_render_values() {
        assert_eq!(answer_label(Some(Timeline::MonthOrTwo)), "month or two");
        assert_eq!(answer_value(Some(Timeline::MonthOrTwo)), "month_or_two");
        assert_eq!(answer_value::<Timeline>(None), NOT_ANSWERED);
    }
}
