// src/core/service_client.rs
//! HTTP client for the skill analysis service

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::core::config_manager::ClientConfig;
use crate::types::{
    response::{
        ErrorBody, ProfileAnalysisResponse, ProfileUrlRequest, ServiceStatus,
        SkillComparisonResponse, SkillQueryParams,
    },
    ComparisonResult, ProfileData, ProfileDocument, SkillQueryInput, TrendResult,
};

const ANALYZE_PROFILE_ENDPOINT: &str = "/analyze/profile";
const SKILL_TRENDS_ENDPOINT: &str = "/skills/trends";
const SKILL_COMPARE_ENDPOINT: &str = "/skills/compare";
const STATUS_ENDPOINT: &str = "/";

const PDF_FIELD: &str = "pdf_file";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service returned {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Request(String),
}

impl ServiceError {
    /// The server's human-readable `detail`, when the failure carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Profile submission as it goes over the wire
#[derive(Debug, Clone, Copy)]
pub enum ProfileRequest<'a> {
    Url(&'a str),
    Document(&'a ProfileDocument),
}

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ClientConfig) -> ServiceResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Profile analysis - sends a PDF export or a profile URL, receives ProfileData
    pub async fn analyze_profile(&self, request: ProfileRequest<'_>) -> ServiceResult<ProfileData> {
        let url = self.endpoint(ANALYZE_PROFILE_ENDPOINT);

        let builder = match request {
            ProfileRequest::Document(document) => {
                let part = Part::bytes(document.bytes.clone())
                    .file_name(document.file_name.clone())
                    .mime_str(PDF_CONTENT_TYPE)
                    .map_err(|e| ServiceError::Request(e.to_string()))?;
                debug!(
                    "Uploading {} ({} bytes) to {}",
                    document.file_name,
                    document.bytes.len(),
                    url
                );
                self.client
                    .post(&url)
                    .multipart(Form::new().part(PDF_FIELD, part))
            }
            ProfileRequest::Url(profile_url) => {
                debug!("Submitting profile URL {} to {}", profile_url, url);
                self.client
                    .post(&url)
                    .json(&ProfileUrlRequest { profile_url })
            }
        };

        let response: ProfileAnalysisResponse = self.execute(builder).await?;
        Ok(response.data)
    }

    /// Skill trends for a job title, ranked by the server
    pub async fn skill_trends(&self, query: &SkillQueryInput) -> ServiceResult<TrendResult> {
        let url = self.endpoint(SKILL_TRENDS_ENDPOINT);
        let params = SkillQueryParams {
            job_title: &query.job_title,
            location: query.location_param(),
            profile_url: None,
        };

        debug!("Fetching skill trends from {}", url);
        self.execute(self.client.get(&url).query(&params)).await
    }

    /// Skill gap between a submitted profile and the market for a job title
    pub async fn compare_skills(
        &self,
        query: &SkillQueryInput,
        profile_url: Option<&str>,
    ) -> ServiceResult<ComparisonResult> {
        let url = self.endpoint(SKILL_COMPARE_ENDPOINT);
        let params = SkillQueryParams {
            job_title: &query.job_title,
            location: query.location_param(),
            profile_url,
        };

        debug!("Comparing skills via {}", url);
        let response: SkillComparisonResponse =
            self.execute(self.client.get(&url).query(&params)).await?;
        Ok(response.comparison)
    }

    /// Service liveness
    pub async fn status(&self) -> ServiceResult<ServiceStatus> {
        let url = self.endpoint(STATUS_ENDPOINT);
        self.execute(self.client.get(&url)).await
    }

    async fn execute<R>(&self, builder: RequestBuilder) -> ServiceResult<R>
    where
        R: DeserializeOwned,
    {
        let response = builder.send().await?;

        let status = response.status();
        trace!("Response status: {}", status);

        let body = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<R>(&body).map_err(|e| {
                warn!("Failed to parse service response: {}", e);
                ServiceError::Decode(e.to_string())
            })
        } else {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail_message());

            warn!("Service error response {}: {}", status, body);
            Err(ServiceError::Status { status, detail })
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
