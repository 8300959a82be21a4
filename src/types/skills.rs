// src/types/skills.rs
//! Skill intelligence results: market trends and profile/job comparison

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTrend {
    pub skill: String,
    pub frequency: u64,
    pub percentage: f64,
}

/// Skill trends in the rank order the server returned them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub skill_trends: Vec<SkillTrend>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub total_jobs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub matching_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    /// Profile skills no sampled job asked for
    #[serde(default)]
    pub unique_skills: BTreeSet<String>,
    pub match_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSummary {
    pub name: String,
    pub headline: String,
}

/// Job title and optional location shared by both skill queries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillQueryInput {
    pub job_title: String,
    pub location: Option<String>,
}

impl SkillQueryInput {
    pub fn new(job_title: impl Into<String>, location: Option<String>) -> Self {
        Self {
            job_title: job_title.into(),
            location,
        }
    }

    pub fn has_job_title(&self) -> bool {
        !self.job_title.trim().is_empty()
    }

    /// Location as sent on the wire: empty when not provided
    pub fn location_param(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}
