pub mod error_message;
pub mod input_resolver;
pub mod profile_coordinator;
pub mod session;
pub mod skill_coordinator;
pub mod workflow;

pub use input_resolver::{resolve, FormState, ResolvedInput};
pub use profile_coordinator::{ProfileSnapshot, ProfileSubmissionCoordinator};
pub use session::AnalysisSession;
pub use skill_coordinator::{QueryError, QuerySource, SkillQueryCoordinator, SkillQuerySnapshot};
pub use workflow::WorkflowState;
