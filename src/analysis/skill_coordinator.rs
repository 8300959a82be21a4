// src/analysis/skill_coordinator.rs
//! Trend lookup and skill comparison. The two flows share job title and
//! location input, keep separate result slots, and report failures through
//! one shared error slot (last write wins).

use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::error_message::user_message;
use super::workflow::{SlotSequencer, WorkflowState};
use crate::core::service_client::{ServiceClient, ServiceResult};
use crate::core::ResponseOrdering;
use crate::types::{ComparisonResult, SkillQueryInput, TrendResult};

pub const JOB_TITLE_REQUIRED_MESSAGE: &str = "Please enter a job title";
pub const TRENDS_FALLBACK_MESSAGE: &str = "Error fetching skill trends";
pub const COMPARISON_FALLBACK_MESSAGE: &str = "Error comparing skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    Trends,
    Comparison,
}

impl QuerySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trends => "trends",
            Self::Comparison => "comparison",
        }
    }
}

/// Content of the shared error slot, tagged with the flow that wrote it
#[derive(Debug, Clone, PartialEq)]
pub struct QueryError {
    pub source: QuerySource,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillQuerySnapshot {
    pub trends: WorkflowState<TrendResult>,
    pub comparison: WorkflowState<ComparisonResult>,
    pub error: Option<QueryError>,
}

impl SkillQuerySnapshot {
    pub fn is_loading(&self) -> bool {
        self.trends.is_loading() || self.comparison.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

type SlotFn<T> = fn(&mut SkillQuerySnapshot) -> &mut WorkflowState<T>;

fn trends_slot(snapshot: &mut SkillQuerySnapshot) -> &mut WorkflowState<TrendResult> {
    &mut snapshot.trends
}

fn comparison_slot(snapshot: &mut SkillQuerySnapshot) -> &mut WorkflowState<ComparisonResult> {
    &mut snapshot.comparison
}

#[derive(Clone)]
pub struct SkillQueryCoordinator {
    client: ServiceClient,
    state: Arc<watch::Sender<SkillQuerySnapshot>>,
    trends_sequencer: Arc<SlotSequencer>,
    comparison_sequencer: Arc<SlotSequencer>,
}

impl SkillQueryCoordinator {
    pub fn new(client: ServiceClient, ordering: ResponseOrdering) -> Self {
        let (state, _) = watch::channel(SkillQuerySnapshot::default());
        Self {
            client,
            state: Arc::new(state),
            trends_sequencer: Arc::new(SlotSequencer::new(ordering)),
            comparison_sequencer: Arc::new(SlotSequencer::new(ordering)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SkillQuerySnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SkillQuerySnapshot {
        self.state.borrow().clone()
    }

    pub async fn fetch_trends(&self, query: &SkillQueryInput) -> SkillQuerySnapshot {
        if !query.has_job_title() {
            return self.reject(QuerySource::Trends);
        }

        let span = info_span!(
            "skill_trends",
            request_id = %Uuid::new_v4(),
            job_title = %query.job_title
        );
        self.run(
            QuerySource::Trends,
            &self.trends_sequencer,
            trends_slot,
            TRENDS_FALLBACK_MESSAGE,
            self.client.skill_trends(query),
        )
        .instrument(span)
        .await
    }

    /// `profile_identifier` comes from the latest successful analysis, if any
    pub async fn compare_skills(
        &self,
        query: &SkillQueryInput,
        profile_identifier: Option<&str>,
    ) -> SkillQuerySnapshot {
        if !query.has_job_title() {
            return self.reject(QuerySource::Comparison);
        }

        let span = info_span!(
            "skill_comparison",
            request_id = %Uuid::new_v4(),
            job_title = %query.job_title,
            has_profile = profile_identifier.is_some()
        );
        self.run(
            QuerySource::Comparison,
            &self.comparison_sequencer,
            comparison_slot,
            COMPARISON_FALLBACK_MESSAGE,
            self.client.compare_skills(query, profile_identifier),
        )
        .instrument(span)
        .await
    }

    fn reject(&self, source: QuerySource) -> SkillQuerySnapshot {
        warn!("{} query rejected: job title is empty", source.as_str());
        self.state.send_modify(|s| {
            s.error = Some(QueryError {
                source,
                message: JOB_TITLE_REQUIRED_MESSAGE.to_string(),
            })
        });
        self.snapshot()
    }

    async fn run<T, Fut>(
        &self,
        source: QuerySource,
        sequencer: &SlotSequencer,
        slot: SlotFn<T>,
        fallback: &str,
        request: Fut,
    ) -> SkillQuerySnapshot
    where
        Fut: Future<Output = ServiceResult<T>>,
    {
        let sequence = sequencer.issue();
        self.state.send_modify(|s| {
            *slot(s) = WorkflowState::Loading;
            s.error = None;
        });

        info!("Dispatching {} query", source.as_str());
        let outcome = request.await;

        if !sequencer.accepts(sequence) {
            debug!("Discarding superseded {} response", source.as_str());
            return self.snapshot();
        }

        match outcome {
            Ok(value) => {
                info!("{} query completed", source.as_str());
                self.state
                    .send_modify(|s| *slot(s) = WorkflowState::Success(value));
            }
            Err(e) => {
                let message = user_message(&e, fallback);
                warn!("{} query failed: {}", source.as_str(), e);
                self.state.send_modify(|s| {
                    *slot(s) = WorkflowState::Error(message.clone());
                    s.error = Some(QueryError { source, message });
                });
            }
        }

        self.snapshot()
    }
}
