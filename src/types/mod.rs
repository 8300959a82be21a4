pub mod profile;
pub mod response;
pub mod skills;

pub use profile::{AnalysisResult, EducationEntry, ExperienceEntry, ProfileData, ProfileDocument};
pub use skills::{ComparisonResult, SkillQueryInput, SkillTrend, TrendResult};
