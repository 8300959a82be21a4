// src/presentation.rs
//! Terminal rendering of coordinator snapshots. Read-only: nothing here
//! touches coordinator state.

use std::io::{self, Write};

use crate::analysis::{ProfileSnapshot, SkillQuerySnapshot, WorkflowState};
use crate::types::response::ServiceStatus;
use crate::types::{AnalysisResult, ComparisonResult, ProfileData, SkillQueryInput, TrendResult};

pub trait PresentationAdapter {
    fn render_profile(&mut self, snapshot: &ProfileSnapshot) -> io::Result<()>;

    fn render_skills(
        &mut self,
        query: &SkillQueryInput,
        snapshot: &SkillQuerySnapshot,
    ) -> io::Result<()>;

    fn render_status(&mut self, status: &ServiceStatus) -> io::Result<()>;
}

pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Blank line between the profile and skill sections
    pub fn render_separator(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn write_profile(&mut self, data: &ProfileData) -> io::Result<()> {
        writeln!(self.out, "Profile Analysis")?;
        writeln!(self.out, "Name: {}", data.name)?;
        writeln!(self.out, "Headline: {}", data.headline)?;
        writeln!(self.out, "Location: {}", data.location)?;
        writeln!(self.out, "About: {}", data.about)?;

        writeln!(self.out, "\nSkills")?;
        for skill in &data.skills {
            writeln!(self.out, "  - {}", skill)?;
        }

        writeln!(self.out, "\nExperience")?;
        for exp in &data.experience {
            writeln!(self.out, "  - {} at {} ({})", exp.title, exp.company, exp.duration)?;
            if !exp.description.is_empty() {
                writeln!(self.out, "    {}", exp.description)?;
            }
        }

        writeln!(self.out, "\nEducation")?;
        for edu in &data.education {
            writeln!(self.out, "  - {} at {}", edu.degree, edu.school)?;
            if !edu.description.is_empty() {
                writeln!(self.out, "    {}", edu.description)?;
            }
        }
        Ok(())
    }

    fn write_trends(&mut self, job_title: &str, trends: &TrendResult) -> io::Result<()> {
        writeln!(self.out, "Skill Trends for {}", job_title)?;
        if let Some(total) = trends.total_jobs {
            writeln!(self.out, "({} job postings sampled)", total)?;
        }
        for trend in &trends.skill_trends {
            writeln!(
                self.out,
                "  {:<24} frequency: {:>4}  percentage: {}%",
                trend.skill, trend.frequency, trend.percentage
            )?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &ComparisonResult) -> io::Result<()> {
        writeln!(self.out, "Skill Comparison")?;
        writeln!(self.out, "Matching Skills")?;
        for skill in &comparison.matching_skills {
            writeln!(self.out, "  + {}", skill)?;
        }
        writeln!(self.out, "Missing Skills")?;
        for skill in &comparison.missing_skills {
            writeln!(self.out, "  - {}", skill)?;
        }
        if !comparison.unique_skills.is_empty() {
            writeln!(self.out, "Other Profile Skills")?;
            for skill in &comparison.unique_skills {
                writeln!(self.out, "  * {}", skill)?;
            }
        }
        writeln!(self.out, "Match Percentage: {}%", comparison.match_percentage)
    }
}

impl<W: Write> PresentationAdapter for TerminalView<W> {
    fn render_profile(&mut self, snapshot: &ProfileSnapshot) -> io::Result<()> {
        let form_error = snapshot.state.error();
        if let Some(message) = form_error {
            writeln!(self.out, "Error: {}", message)?;
        }
        if snapshot.is_loading() {
            writeln!(self.out, "Analyzing profile...")?;
        }

        match &snapshot.result {
            Some(AnalysisResult::Success(data)) => self.write_profile(data)?,
            Some(AnalysisResult::Error { message }) if Some(message.as_str()) != form_error => {
                writeln!(self.out, "{}", message)?
            }
            _ => {}
        }
        self.out.flush()
    }

    fn render_skills(
        &mut self,
        query: &SkillQueryInput,
        snapshot: &SkillQuerySnapshot,
    ) -> io::Result<()> {
        if let Some(error) = &snapshot.error {
            writeln!(self.out, "Error ({}): {}", error.source.as_str(), error.message)?;
        }
        if snapshot.is_loading() {
            writeln!(self.out, "Loading...")?;
        }
        if let WorkflowState::Success(trends) = &snapshot.trends {
            self.write_trends(&query.job_title, trends)?;
        }
        if let WorkflowState::Success(comparison) = &snapshot.comparison {
            self.write_comparison(comparison)?;
        }
        self.out.flush()
    }

    fn render_status(&mut self, status: &ServiceStatus) -> io::Result<()> {
        writeln!(self.out, "{}: {}", status.status, status.message)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{QueryError, QuerySource};
    use crate::types::ExperienceEntry;

    fn rendered<F>(render: F) -> String
    where
        F: FnOnce(&mut TerminalView<Vec<u8>>) -> io::Result<()>,
    {
        let mut view = TerminalView::new(Vec::new());
        render(&mut view).unwrap();
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_profile_skills_keep_order_and_duplicates() {
        let data = ProfileData {
            name: "Alice".to_string(),
            skills: vec!["rust".into(), "aws".into(), "rust".into()],
            experience: vec![ExperienceEntry {
                title: "Engineer".into(),
                company: "Acme".into(),
                duration: "2y".into(),
                description: String::new(),
            }],
            ..Default::default()
        };
        let snapshot = ProfileSnapshot {
            state: WorkflowState::Success(data.clone()),
            result: Some(AnalysisResult::Success(data)),
            submitted_url: None,
        };

        let text = rendered(|v| v.render_profile(&snapshot));
        let skills: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("  - "))
            .take(3)
            .collect();
        assert_eq!(skills, vec!["rust", "aws", "rust"]);
        assert!(text.contains("Engineer at Acme (2y)"));
    }

    #[test]
    fn test_failed_submission_shows_both_messages_once() {
        let snapshot = ProfileSnapshot {
            state: WorkflowState::Error("Error analyzing profile. Please try again.".to_string()),
            result: Some(AnalysisResult::Error {
                message: "Error analyzing profile.".to_string(),
            }),
            submitted_url: None,
        };
        let text = rendered(|v| v.render_profile(&snapshot));
        assert_eq!(
            text,
            "Error: Error analyzing profile. Please try again.\nError analyzing profile.\n"
        );

        let snapshot = ProfileSnapshot {
            state: WorkflowState::Error("bad pdf".to_string()),
            result: Some(AnalysisResult::Error {
                message: "bad pdf".to_string(),
            }),
            submitted_url: None,
        };
        assert_eq!(rendered(|v| v.render_profile(&snapshot)), "Error: bad pdf\n");
    }

    #[test]
    fn test_skill_error_is_tagged_with_source() {
        let snapshot = SkillQuerySnapshot {
            error: Some(QueryError {
                source: QuerySource::Trends,
                message: "Please enter a job title".to_string(),
            }),
            ..Default::default()
        };
        let text = rendered(|v| v.render_skills(&SkillQueryInput::default(), &snapshot));
        assert_eq!(text, "Error (trends): Please enter a job title\n");
    }

    #[test]
    fn test_status_line() {
        let status = ServiceStatus {
            status: "online".to_string(),
            message: "LinkedIn Profile Analyzer API".to_string(),
        };
        let text = rendered(|v| v.render_status(&status));
        assert_eq!(text, "online: LinkedIn Profile Analyzer API\n");
    }
}
