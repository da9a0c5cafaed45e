//! DeploymentGuideHandler - Query handler producing setup instructions.
//!
//! With no sessions stored the guide is generic. Otherwise it is tailored to
//! the most recent session: project directory named after the vision, an
//! authentication section when a feature mentions `auth` or `login`, and a
//! database section when the data needs mention `database` or `store`.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{AnswerOption, DeploymentPlatform, PlanningError, RequirementsRecord};
use crate::ports::SessionStore;

use super::messages;

const DEFAULT_PROJECT_DIR: &str = "my-project";
const AUTH_MARKERS: &[&str] = &["auth", "login"];
const DATABASE_MARKERS: &[&str] = &["database", "store"];

/// Query for a deployment guide.
#[derive(Debug, Clone, Default)]
pub struct DeploymentGuideQuery {
    /// Raw platform value; `recommended` when absent.
    pub platform: Option<String>,
}

/// Result of a deployment guide query.
#[derive(Debug, Clone)]
pub struct DeploymentGuideResult {
    /// Session the guide was tailored to, if any.
    pub session_id: Option<SessionId>,
    pub platform: DeploymentPlatform,
    pub guide: String,
}

/// Hosting provider a guide gives deploy steps for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostingTarget {
    Vercel,
    Netlify,
}

impl HostingTarget {
    fn for_platform(platform: DeploymentPlatform) -> &'static [HostingTarget] {
        match platform {
            DeploymentPlatform::Recommended
            | DeploymentPlatform::Vercel
            | DeploymentPlatform::Supabase => &[HostingTarget::Vercel],
            DeploymentPlatform::Netlify => &[HostingTarget::Netlify],
            DeploymentPlatform::All => &[HostingTarget::Vercel, HostingTarget::Netlify],
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HostingTarget::Vercel => "Vercel",
            HostingTarget::Netlify => "Netlify",
        }
    }

    fn deploy_steps(&self) -> &'static str {
        match self {
            HostingTarget::Vercel => {
                r#"**Deploy to Vercel:**
   - Go to vercel.com and sign up with GitHub
   - Click "New Project" and import your repository
   - Click "Deploy" - done!
   - Your site will be live at: your-project.vercel.app"#
            }
            HostingTarget::Netlify => {
                r#"**Deploy to Netlify:**
   - Go to netlify.com and sign up with GitHub
   - Click "Add new site" and import your repository
   - Keep the detected build command (`npm run build`) and click "Deploy"
   - Your site will be live at: your-project.netlify.app"#
            }
        }
    }
}

/// Appends numbered steps under phase headings. Numbering runs across
/// phases and is never restarted.
struct GuideBuilder {
    text: String,
    step: usize,
}

impl GuideBuilder {
    fn new(intro: &str) -> Self {
        Self {
            text: intro.to_string(),
            step: 0,
        }
    }

    fn phase(&mut self, heading: &str) {
        self.text.push_str(&format!("\n\n**{}**", heading));
    }

    fn step(&mut self, body: &str) {
        self.step += 1;
        self.text.push_str(&format!("\n{}. {}", self.step, body));
    }

    fn line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    fn finish(self) -> String {
        self.text
    }
}

/// Handler for deployment guides.
pub struct DeploymentGuideHandler {
    store: Arc<dyn SessionStore>,
    project_slug_chars: usize,
}

impl DeploymentGuideHandler {
    pub fn new(store: Arc<dyn SessionStore>, project_slug_chars: usize) -> Self {
        Self {
            store,
            project_slug_chars,
        }
    }

    pub async fn handle(
        &self,
        query: DeploymentGuideQuery,
    ) -> Result<DeploymentGuideResult, PlanningError> {
        let platform = match query.platform.as_deref() {
            Some(raw) => DeploymentPlatform::parse_answer(raw)?,
            None => DeploymentPlatform::default(),
        };

        let Some(session) = self.store.find_latest().await? else {
            debug!(platform = %platform, "No sessions stored, returning generic guide");
            return Ok(DeploymentGuideResult {
                session_id: None,
                platform,
                guide: generic_guide(platform),
            });
        };

        debug!(session_id = %session.id(), platform = %platform, "Building tailored guide");
        let guide = tailored_guide(session.requirements(), platform, self.project_slug_chars);
        Ok(DeploymentGuideResult {
            session_id: Some(session.id().clone()),
            platform,
            guide,
        })
    }
}

/// Directory name derived from the vision, cut to `max_chars` characters.
pub fn project_slug(vision: &str, max_chars: usize) -> String {
    let slug: String = vision
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .take(max_chars)
        .collect();

    if slug.is_empty() {
        DEFAULT_PROJECT_DIR.to_string()
    } else {
        slug
    }
}

fn wants_auth_section(record: &RequirementsRecord) -> bool {
    record.features.iter().any(|feature| {
        let feature = feature.to_lowercase();
        AUTH_MARKERS.iter().any(|marker| feature.contains(marker))
    })
}

fn wants_database_section(record: &RequirementsRecord, platform: DeploymentPlatform) -> bool {
    if platform == DeploymentPlatform::Supabase {
        return true;
    }
    let data_needs = record.data_needs.to_lowercase();
    DATABASE_MARKERS
        .iter()
        .any(|marker| data_needs.contains(marker))
}

fn host_names(hosts: &[HostingTarget]) -> String {
    hosts
        .iter()
        .map(HostingTarget::name)
        .collect::<Vec<_>>()
        .join(" or ")
}

fn generic_guide(platform: DeploymentPlatform) -> String {
    let hosts = HostingTarget::for_platform(platform);
    let mut guide = GuideBuilder::new(
        "No active planning session found. Here's a general deployment guide for beginners:",
    );

    guide.phase("Quick Start Deployment (Recommended Stack):");
    guide.step(
        r#"**Set up your development environment:**
   ```bash
   # Install Node.js from nodejs.org
   # Install VS Code as your editor
   ```"#,
    );
    guide.step(&format!(
        r#"**Create your project:**
   ```bash
   npx create-next-app@latest {dir}
   cd {dir}
   ```"#,
        dir = DEFAULT_PROJECT_DIR,
    ));
    for host in hosts {
        guide.step(host.deploy_steps());
    }
    guide.step(&format!(
        r#"**Add a custom domain:**
   - Buy domain from Namecheap or Google Domains
   - Add it in the {hosts} dashboard under "Domains""#,
        hosts = host_names(hosts),
    ));
    guide.line("");
    guide.line("**Total setup time:** 15-30 minutes for a basic site!");
    guide.finish()
}

fn tailored_guide(
    record: &RequirementsRecord,
    platform: DeploymentPlatform,
    project_slug_chars: usize,
) -> String {
    let hosts = HostingTarget::for_platform(platform);
    let dir = project_slug(&record.vision, project_slug_chars);
    let mut guide = GuideBuilder::new(
        "**Deployment Guide for Your Project**\n\nBased on your requirements, here's your step-by-step deployment plan:",
    );

    guide.phase("Phase 1: Setup (Day 1)");
    guide.step(
        r#"**Install development tools:**
   - Download VS Code (free code editor): code.visualstudio.com
   - Install Node.js (JavaScript runtime): nodejs.org
   - Create GitHub account if you don't have one"#,
    );
    guide.step(&format!(
        r#"**Create your project:**
   ```bash
   npx create-next-app@latest {dir}
   cd {dir}
   ```"#,
        dir = dir,
    ));

    guide.phase("Phase 2: Basic Deployment (Day 1-2)");
    guide.step(
        r#"**Push to GitHub:**
   ```bash
   git add .
   git commit -m "Initial project setup"
   git push origin main
   ```"#,
    );
    for host in hosts {
        guide.step(host.deploy_steps());
    }

    let auth = wants_auth_section(record);
    let database = wants_database_section(record, platform);
    // an empty phase gets no heading
    if auth || database {
        guide.phase("Phase 3: Add Features (Days 3-7)");
    }
    if auth {
        guide.step(&format!(
            r#"**Add user authentication:**
   ```bash
   npm install @supabase/supabase-js
   ```
   - Sign up at supabase.com (free)
   - Create new project
   - Copy your project URL and API key
   - Add to your environment variables in {hosts}"#,
            hosts = host_names(hosts),
        ));
    }
    if database {
        guide.step(
            r#"**Set up database:**
   - Supabase automatically provides PostgreSQL database
   - Use their visual table editor to create your data structure
   - No SQL knowledge required!"#,
        );
    }

    guide.phase("Phase 4: Custom Domain (Optional)");
    guide.line("- Buy domain from Namecheap (~$12/year)");
    guide.line(&format!(
        "- Add in the {} dashboard under \"Domains\"",
        host_names(hosts)
    ));
    guide.line("- Automatic HTTPS included!");
    guide.line("");
    guide.line(&format!(
        "**Expected Timeline:** {}",
        messages::answer_label(record.timeline)
    ));
    guide.line("**Budget:** Starts free, scales with usage");
    guide.line("");
    guide.line(
        "**Need help?** Each platform has excellent documentation and community support!",
    );
    guide.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::planning::{BudgetLevel, PlanningSession, TechnicalComfort, Timeline};

    async fn store_with(record: impl FnOnce(&mut PlanningSession)) -> Arc<InMemorySessionStore> {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session =
            PlanningSession::new(SessionId::new("planning_guide").unwrap(), Timestamp::now());
        record(&mut session);
        store.create(&session).await.unwrap();
        store
    }

    async fn guide_for(store: Arc<InMemorySessionStore>, platform: Option<&str>) -> String {
        DeploymentGuideHandler::new(store, 20)
            .handle(DeploymentGuideQuery {
                platform: platform.map(str::to_string),
            })
            .await
            .unwrap()
            .guide
    }

    #[test]
    fn slug_lowercases_hyphenates_and_truncates() {
        assert_eq!(
            project_slug("My Awesome Recipe Sharing App", 20),
            "my-awesome-recipe-sh"
        );
        assert_eq!(project_slug("Short", 20), "short");
        assert_eq!(project_slug("", 20), DEFAULT_PROJECT_DIR);
    }

    #[test]
    fn slug_truncates_on_characters() {
        assert_eq!(project_slug("Ünïcödé", 3), "ünï");
    }

    #[tokio::test]
    async fn empty_store_gives_generic_guide() {
        let handler = DeploymentGuideHandler::new(Arc::new(InMemorySessionStore::new()), 20);

        let result = handler.handle(DeploymentGuideQuery::default()).await.unwrap();

        assert!(result.session_id.is_none());
        assert_eq!(result.platform, DeploymentPlatform::Recommended);
        assert!(result.guide.starts_with("No active planning session found."));
        assert!(result.guide.contains("npx create-next-app@latest my-project"));
        assert!(result.guide.contains("**Deploy to Vercel:**"));
        assert!(result.guide.contains("15-30 minutes"));
    }

    #[tokio::test]
    async fn tailored_guide_uses_vision_slug_and_timeline() {
        let store = store_with(|s| {
            s.record_vision("Dog Walking Scheduler For Neighbors");
            s.record_timeline_budget(
                Timeline::MonthOrTwo,
                BudgetLevel::LowCost,
                TechnicalComfort::SomeTechnical,
                None,
            );
        })
        .await;

        let guide = guide_for(store, None).await;

        assert!(guide.contains("npx create-next-app@latest dog-walking-schedule"));
        assert!(guide.contains("**Expected Timeline:** month or two"));
        assert!(guide.contains("**Budget:** Starts free, scales with usage"));
        assert!(!guide.contains("Phase 3"));
    }

    #[tokio::test]
    async fn auth_feature_adds_authentication_section() {
        let store = store_with(|s| {
            s.record_features("Google Login, sharing", "nothing special");
        })
        .await;

        let guide = guide_for(store, None).await;

        assert!(guide.contains("**Add user authentication:**"));
        assert!(guide.contains("npm install @supabase/supabase-js"));
        assert!(!guide.contains("**Set up database:**"));
    }

    #[tokio::test]
    async fn database_data_needs_adds_database_section() {
        let store = store_with(|s| {
            s.record_features("browse", "Store photos and comments");
        })
        .await;

        let guide = guide_for(store, None).await;

        assert!(guide.contains("**Set up database:**"));
        assert!(!guide.contains("**Add user authentication:**"));
    }

    #[tokio::test]
    async fn supabase_platform_always_includes_database() {
        let store = store_with(|s| {
            s.record_features("browse", "none");
        })
        .await;

        let guide = guide_for(store, Some("supabase")).await;

        assert!(guide.contains("**Set up database:**"));
        assert!(guide.contains("**Deploy to Vercel:**"));
    }

    #[tokio::test]
    async fn netlify_platform_swaps_hosting_steps() {
        let store = store_with(|s| {
            s.record_vision("Blog");
        })
        .await;

        let guide = guide_for(store, Some("netlify")).await;

        assert!(guide.contains("**Deploy to Netlify:**"));
        assert!(!guide.contains("**Deploy to Vercel:**"));
        assert!(guide.contains("Add in the Netlify dashboard"));
    }

    #[tokio::test]
    async fn all_platform_lists_both_hosts() {
        let store = store_with(|s| {
            s.record_vision("Blog");
        })
        .await;

        let guide = guide_for(store, Some("all")).await;

        assert!(guide.contains("**Deploy to Vercel:**"));
        assert!(guide.contains("**Deploy to Netlify:**"));
        assert!(guide.contains("Vercel or Netlify dashboard"));
    }

    #[tokio::test]
    async fn steps_are_numbered_consecutively() {
        let store = store_with(|s| {
            s.record_features("login", "store profiles");
        })
        .await;

        let guide = guide_for(store, Some("all")).await;

        for n in 1..=6 {
            assert!(guide.contains(&format!("\n{}. **", n)), "missing step {n}");
        }
    }

    #[tokio::test]
    async fn unknown_platform_is_rejected() {
        let handler = DeploymentGuideHandler::new(Arc::new(InMemorySessionStore::new()), 20);

        let err = handler
            .handle(DeploymentGuideQuery {
                platform: Some("heroku".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PlanningError::InvalidEnumValue {
                field: "platform",
                ..
            }
        ));
    }
}
