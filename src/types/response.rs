use serde::{Deserialize, Serialize};

use crate::types::{
    profile::ProfileData,
    skills::{ComparisonResult, ProfileSummary},
};

// ===== Service Response Types =====

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileAnalysisResponse {
    pub data: ProfileData,
    pub status: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillComparisonResponse {
    pub comparison: ComparisonResult,
    pub profile: Option<ProfileSummary>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
}

/// Body of a failed request. `detail` is a plain string for handled
/// errors and a list of objects for request validation failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(message)) if !message.is_empty() => {
                Some(message.clone())
            }
            _ => None,
        }
    }
}

// ===== Request Types =====

#[derive(Debug, Serialize)]
pub struct ProfileUrlRequest<'a> {
    pub profile_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SkillQueryParams<'a> {
    pub job_title: &'a str,
    pub location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<&'a str>,
}
