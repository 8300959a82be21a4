// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::analysis::{AnalysisSession, FormState};
use crate::core::{ClientConfig, ResponseOrdering, ServiceClient};
use crate::presentation::{PresentationAdapter, TerminalView};
use crate::types::SkillQueryInput;
use crate::utils::load_profile_document;

#[derive(Parser, Debug)]
#[command(name = "skill-analyzer")]
#[command(about = "Analyze a LinkedIn profile and compare it against job market skills")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Analysis service base URL (overrides SKILL_API_URL and config.yaml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides SKILL_API_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// How overlapping responses are applied: last-response or latest-dispatch
    #[arg(long, global = true)]
    pub ordering: Option<String>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, mut config: ClientConfig) -> Result<ClientConfig> {
        if let Some(url) = &self.api_url {
            config = config.with_api_base_url(url.as_str());
        }
        if let Some(seconds) = self.timeout {
            config = config.with_timeout_seconds(seconds);
        }
        if let Some(ordering) = &self.ordering {
            config = config.with_response_ordering(ordering.parse::<ResponseOrdering>()?);
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the analysis service is up
    Status,
    /// Analyze a profile from a URL or a PDF export (the PDF wins if both are given)
    Analyze(ProfileArgs),
    /// Show the most requested skills for a job title
    Trends(QueryArgs),
    /// Compare a profile's skills with those requested for a job title
    Compare {
        #[command(flatten)]
        query: QueryArgs,
        #[arg(long)]
        profile_url: Option<String>,
    },
    /// Analyze a profile, then fetch trends and comparison concurrently
    Session {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// LinkedIn profile URL
    #[arg(long)]
    pub url: Option<String>,
    /// LinkedIn "Save to PDF" export
    #[arg(long)]
    pub pdf: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[arg(long, default_value = "")]
    pub job_title: String,
    #[arg(long)]
    pub location: Option<String>,
}

impl QueryArgs {
    fn to_input(&self) -> SkillQueryInput {
        SkillQueryInput::new(self.job_title.clone(), self.location.clone())
    }
}

impl ProfileArgs {
    async fn to_form(&self) -> Result<FormState> {
        let file = match &self.pdf {
            Some(path) => Some(load_profile_document(path).await?),
            None => None,
        };

        Ok(FormState {
            url_text: self.url.clone().unwrap_or_default(),
            file,
        })
    }
}

fn session(config: &ClientConfig) -> Result<AnalysisSession> {
    AnalysisSession::new(config).context("Failed to create HTTP client")
}

/// Run one command. Returns whether every flow it drove settled successfully.
pub async fn handle_command(command: Command, config: &ClientConfig) -> Result<bool> {
    let mut view = TerminalView::new(std::io::stdout());

    match command {
        Command::Status => {
            let client = ServiceClient::new(config).context("Failed to create HTTP client")?;
            let status = client
                .status()
                .await
                .with_context(|| format!("Service at {} is not reachable", client.base_url()))?;
            view.render_status(&status)?;
            Ok(true)
        }

        Command::Analyze(profile) => {
            let form = profile.to_form().await?;
            let snapshot = session(config)?.submit_profile(&form).await;
            view.render_profile(&snapshot)?;
            Ok(snapshot.profile().is_some())
        }

        Command::Trends(query) => {
            let input = query.to_input();
            let snapshot = session(config)?.fetch_trends(&input).await;
            view.render_skills(&input, &snapshot)?;
            Ok(snapshot.error.is_none())
        }

        Command::Compare { query, profile_url } => {
            let input = query.to_input();
            let snapshot = session(config)?
                .skills
                .compare_skills(&input, profile_url.as_deref())
                .await;
            view.render_skills(&input, &snapshot)?;
            Ok(snapshot.error.is_none())
        }

        Command::Session { profile, query } => {
            let form = profile.to_form().await?;
            let session = session(config)?;
            let profile_snapshot = session.submit_profile(&form).await;
            view.render_profile(&profile_snapshot)?;

            if profile_snapshot.profile().is_none() {
                return Ok(false);
            }

            let input = query.to_input();
            info!("Running skill queries for {}", input.job_title);
            let snapshot = session.run_skill_queries(&input).await;
            view.render_separator()?;
            view.render_skills(&input, &snapshot)?;
            Ok(snapshot.error.is_none())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_command() {
        let cli = Cli::try_parse_from([
            "skill-analyzer",
            "session",
            "--url",
            "https://www.linkedin.com/in/alice/",
            "--job-title",
            "Data Engineer",
            "--api-url",
            "http://127.0.0.1:9000",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000"));
        match cli.command {
            Command::Session { profile, query } => {
                assert_eq!(profile.url.as_deref(), Some("https://www.linkedin.com/in/alice/"));
                assert!(profile.pdf.is_none());
                assert_eq!(query.job_title, "Data Engineer");
                assert!(query.location.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "skill-analyzer",
            "trends",
            "--job-title",
            "Engineer",
            "--timeout",
            "15",
            "--ordering",
            "latest-dispatch",
            "--api-url",
            "http://127.0.0.1:9000/",
        ])
        .unwrap();

        let config = cli.apply_overrides(ClientConfig::default()).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_seconds, Some(15));
        assert_eq!(config.response_ordering, ResponseOrdering::LatestDispatchWins);
    }

    #[test]
    fn test_missing_flags_keep_loaded_config() {
        let cli = Cli::try_parse_from(["skill-analyzer", "status"]).unwrap();
        let loaded = ClientConfig::default().with_timeout_seconds(5);
        assert_eq!(cli.apply_overrides(loaded.clone()).unwrap(), loaded);
    }

    #[test]
    fn test_unknown_ordering_is_rejected() {
        let cli = Cli::try_parse_from(["skill-analyzer", "status", "--ordering", "random"]).unwrap();
        assert!(cli.apply_overrides(ClientConfig::default()).is_err());
    }

    #[test]
    fn test_trends_job_title_defaults_to_empty() {
        let cli = Cli::try_parse_from(["skill-analyzer", "trends"]).unwrap();
        match cli.command {
            Command::Trends(query) => assert!(!query.to_input().has_job_title()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_form_from_args_keeps_both_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.pdf");
        tokio::fs::write(&path, b"%PDF").await.unwrap();

        let args = ProfileArgs {
            url: Some("https://www.linkedin.com/in/alice/".to_string()),
            pdf: Some(path),
        };
        let form = args.to_form().await.unwrap();

        assert_eq!(form.url_text, "https://www.linkedin.com/in/alice/");
        assert_eq!(form.file.unwrap().file_name, "profile.pdf");
    }
}
