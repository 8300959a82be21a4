// src/types/profile.rs
//! Profile data returned by the analysis service

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub about: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub description: String,
}

/// Outcome of the last profile submission as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Success(ProfileData),
    Error { message: String },
}

impl AnalysisResult {
    pub fn data(&self) -> Option<&ProfileData> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message } => Some(message),
        }
    }
}

/// An uploaded profile export (LinkedIn "Save to PDF")
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ProfileDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_data_tolerates_missing_fields() {
        let data: ProfileData = serde_json::from_str(
            r#"{"name": "Alice", "skills": ["Rust", "Go"], "experience": [{"title": "Engineer"}]}"#,
        )
        .unwrap();

        assert_eq!(data.name, "Alice");
        assert_eq!(data.headline, "");
        assert_eq!(data.skills, vec!["Rust", "Go"]);
        assert_eq!(data.experience[0].title, "Engineer");
        assert_eq!(data.experience[0].company, "");
        assert!(data.education.is_empty());
        assert!(data.url.is_none());
    }

    #[test]
    fn test_analysis_result_accessors() {
        let ok = AnalysisResult::Success(ProfileData::default());
        assert!(ok.data().is_some());
        assert!(ok.error().is_none());

        let err = AnalysisResult::Error {
            message: "boom".to_string(),
        };
        assert!(err.data().is_none());
        assert_eq!(err.error(), Some("boom"));
    }
}
