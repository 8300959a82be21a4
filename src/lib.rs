//! Client for the LinkedIn skill analysis service: profile submission,
//! skill trend lookup and skill gap comparison.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod presentation;
pub mod types;
pub mod utils;

pub use analysis::{
    AnalysisSession, FormState, ProfileSnapshot, ProfileSubmissionCoordinator,
    SkillQueryCoordinator, SkillQuerySnapshot, WorkflowState,
};
pub use crate::core::{ClientConfig, ConfigManager, ResponseOrdering, ServiceClient, ServiceError};
