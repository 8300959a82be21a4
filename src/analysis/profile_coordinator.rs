// src/analysis/profile_coordinator.rs
//! Profile submission: resolves the form, dispatches the analysis request and
//! owns the resulting `AnalysisResult`

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::error_message::user_message;
use super::input_resolver::{self, FormState, ResolvedInput};
use super::workflow::{SlotSequencer, WorkflowState};
use crate::core::service_client::{ProfileRequest, ServiceClient};
use crate::core::ResponseOrdering;
use crate::types::{AnalysisResult, ProfileData};

pub const MISSING_INPUT_MESSAGE: &str = "Please provide a LinkedIn URL or upload a PDF.";
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Error analyzing profile. Please try again.";
pub const RESULT_FALLBACK_MESSAGE: &str = "Error analyzing profile.";

/// What observers see of the submission flow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileSnapshot {
    pub state: WorkflowState<ProfileData>,
    /// Result panel content; holds an error result after a failed request
    pub result: Option<AnalysisResult>,
    /// URL text of the submission this snapshot belongs to; `None` for uploads
    pub submitted_url: Option<String>,
}

impl ProfileSnapshot {
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn profile(&self) -> Option<&ProfileData> {
        self.state.value()
    }

    /// Identifier used to correlate a skill comparison with this analysis.
    /// Prefers the URL the service reported, then the URL that was submitted.
    pub fn profile_identifier(&self) -> Option<&str> {
        let data = self.profile()?;
        data.url.as_deref().or(self.submitted_url.as_deref())
    }
}

#[derive(Clone)]
pub struct ProfileSubmissionCoordinator {
    client: ServiceClient,
    state: Arc<watch::Sender<ProfileSnapshot>>,
    sequencer: Arc<SlotSequencer>,
}

impl ProfileSubmissionCoordinator {
    pub fn new(client: ServiceClient, ordering: ResponseOrdering) -> Self {
        let (state, _) = watch::channel(ProfileSnapshot::default());
        Self {
            client,
            state: Arc::new(state),
            sequencer: Arc::new(SlotSequencer::new(ordering)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        self.state.borrow().clone()
    }

    /// Submit the form. Returns the snapshot this call left behind, which
    /// a later-arriving response from an overlapping call may replace.
    pub async fn submit(&self, form: &FormState) -> ProfileSnapshot {
        let (request, submitted_url) = match input_resolver::resolve(form) {
            ResolvedInput::Invalid => {
                warn!("Profile submission rejected: no URL or PDF provided");
                let snapshot = ProfileSnapshot {
                    state: WorkflowState::Error(MISSING_INPUT_MESSAGE.to_string()),
                    result: None,
                    submitted_url: None,
                };
                self.state.send_replace(snapshot.clone());
                return snapshot;
            }
            ResolvedInput::UseFile(document) => (ProfileRequest::Document(document), None),
            ResolvedInput::UseUrl(url) => (ProfileRequest::Url(url), Some(url)),
        };

        let sequence = self.sequencer.issue();
        let request_id = Uuid::new_v4();
        let mode = if submitted_url.is_some() { "url" } else { "pdf" };
        let submitted_url = submitted_url.map(str::to_string);

        self.state.send_replace(ProfileSnapshot {
            state: WorkflowState::Loading,
            result: None,
            submitted_url: submitted_url.clone(),
        });

        async {
            info!("Submitting profile for analysis");
            let outcome = self.client.analyze_profile(request).await;

            if !self.sequencer.accepts(sequence) {
                debug!("Discarding response superseded by a newer submission");
                return self.snapshot();
            }

            let snapshot = match outcome {
                Ok(data) => {
                    info!(
                        "Profile analysis completed for {} ({} skills)",
                        data.name,
                        data.skills.len()
                    );
                    ProfileSnapshot {
                        state: WorkflowState::Success(data.clone()),
                        result: Some(AnalysisResult::Success(data)),
                        submitted_url,
                    }
                }
                Err(e) => {
                    warn!("Profile analysis failed: {}", e);
                    ProfileSnapshot {
                        state: WorkflowState::Error(user_message(&e, SUBMIT_FALLBACK_MESSAGE)),
                        result: Some(AnalysisResult::Error {
                            message: user_message(&e, RESULT_FALLBACK_MESSAGE),
                        }),
                        submitted_url,
                    }
                }
            };

            self.state.send_replace(snapshot.clone());
            snapshot
        }
        .instrument(info_span!("profile_submission", %request_id, mode))
        .await
    }
}
