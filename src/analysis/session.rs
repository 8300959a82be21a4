// src/analysis/session.rs
use super::input_resolver::FormState;
use super::profile_coordinator::{ProfileSnapshot, ProfileSubmissionCoordinator};
use super::skill_coordinator::{SkillQueryCoordinator, SkillQuerySnapshot};
use crate::core::service_client::{ServiceClient, ServiceResult};
use crate::core::ClientConfig;
use crate::types::SkillQueryInput;

/// One user session: a profile coordinator and a skill coordinator sharing
/// a single transport built from the injected configuration
#[derive(Clone)]
pub struct AnalysisSession {
    pub profile: ProfileSubmissionCoordinator,
    pub skills: SkillQueryCoordinator,
}

impl AnalysisSession {
    pub fn new(config: &ClientConfig) -> ServiceResult<Self> {
        let client = ServiceClient::new(config)?;
        Ok(Self {
            profile: ProfileSubmissionCoordinator::new(client.clone(), config.response_ordering),
            skills: SkillQueryCoordinator::new(client, config.response_ordering),
        })
    }

    pub async fn submit_profile(&self, form: &FormState) -> ProfileSnapshot {
        self.profile.submit(form).await
    }

    pub async fn fetch_trends(&self, query: &SkillQueryInput) -> SkillQuerySnapshot {
        self.skills.fetch_trends(query).await
    }

    /// Compare against the profile from the latest successful analysis
    pub async fn compare_skills(&self, query: &SkillQueryInput) -> SkillQuerySnapshot {
        let identifier = self.profile.snapshot().profile_identifier().map(str::to_string);
        self.skills
            .compare_skills(query, identifier.as_deref())
            .await
    }

    /// Run both skill queries concurrently
    pub async fn run_skill_queries(&self, query: &SkillQueryInput) -> SkillQuerySnapshot {
        tokio::join!(self.fetch_trends(query), self.compare_skills(query));
        self.skills.snapshot()
    }
}
