// src/core/config_manager.rs
//! Client configuration: endpoint base, transport timeout and ordering policy

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:8001";

const API_URL_VAR: &str = "SKILL_API_URL";
const TIMEOUT_VAR: &str = "SKILL_API_TIMEOUT_SECS";
const ORDERING_VAR: &str = "SKILL_API_ORDERING";

/// How responses racing for the same slot are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Whichever response arrives last overwrites the slot
    #[default]
    #[serde(alias = "last-response")]
    LastResponseWins,
    /// Only the response to the most recent dispatch is applied
    #[serde(alias = "latest-dispatch")]
    LatestDispatchWins,
}

impl FromStr for ResponseOrdering {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "last-response" | "last-response-wins" => Ok(Self::LastResponseWins),
            "latest-dispatch" | "latest-dispatch-wins" => Ok(Self::LatestDispatchWins),
            other => anyhow::bail!(
                "Unknown response ordering: {}. Use last-response or latest-dispatch",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// `None` leaves the transport default in place
    pub timeout_seconds: Option<u64>,
    pub response_ordering: ResponseOrdering,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
            response_ordering: ResponseOrdering::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = normalize_base_url(&url.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_response_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.response_ordering = ordering;
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileSection {
    api_base_url: Option<String>,
    timeout_seconds: Option<u64>,
    response_ordering: Option<ResponseOrdering>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Resolve configuration once at startup from `config.yaml` (if present)
    /// and the process environment
    pub fn load() -> Result<ClientConfig> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading client configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        let file = config_path.exists().then_some(config_path.as_path());

        Self::from_sources(file, &environment, |key| std::env::var(key).ok())
    }

    /// Layer defaults, the selected file section, then environment variables
    pub fn from_sources<F>(file: Option<&Path>, environment: &str, var: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = match file {
            Some(path) => Self::load_section(path, environment)?,
            None => FileSection::default(),
        };

        let mut config = ClientConfig::default();

        if let Some(url) = section.api_base_url {
            config = config.with_api_base_url(url);
        }
        config.timeout_seconds = section.timeout_seconds;
        if let Some(ordering) = section.response_ordering {
            config.response_ordering = ordering;
        }

        if let Some(url) = var(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_base_url(url);
        }
        if let Some(raw) = var(TIMEOUT_VAR) {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_VAR))?;
            config.timeout_seconds = Some(seconds);
        }
        if let Some(raw) = var(ORDERING_VAR) {
            config.response_ordering = raw.parse()?;
        }

        info!("Analysis service: {}", config.api_base_url);
        Ok(config)
    }

    fn load_section(path: &Path, environment: &str) -> Result<FileSection> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = ConfigManager::from_sources(None, "local", vars(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8001");
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_env_overrides_and_trailing_slash() {
        let config = ConfigManager::from_sources(
            None,
            "local",
            vars(&[
                ("SKILL_API_URL", "https://skills.example.com/"),
                ("SKILL_API_TIMEOUT_SECS", "45"),
                ("SKILL_API_ORDERING", "latest-dispatch"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://skills.example.com");
        assert_eq!(config.timeout_seconds, Some(45));
        assert_eq!(config.response_ordering, ResponseOrdering::LatestDispatchWins);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result =
            ConfigManager::from_sources(None, "local", vars(&[("SKILL_API_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_section_selected_by_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "local:\n  api_base_url: http://127.0.0.1:9000\nproduction:\n  api_base_url: https://api.example.com\n  timeout_seconds: 30\n  response_ordering: latest-dispatch-wins"
        )
        .unwrap();

        let local = ConfigManager::from_sources(Some(file.path()), "local", vars(&[])).unwrap();
        assert_eq!(local.api_base_url, "http://127.0.0.1:9000");
        assert!(local.timeout_seconds.is_none());

        let production =
            ConfigManager::from_sources(Some(file.path()), "production", vars(&[])).unwrap();
        assert_eq!(production.api_base_url, "https://api.example.com");
        assert_eq!(production.timeout_seconds, Some(30));
        assert_eq!(
            production.response_ordering,
            ResponseOrdering::LatestDispatchWins
        );

        let overridden = ConfigManager::from_sources(
            Some(file.path()),
            "production",
            vars(&[("SKILL_API_URL", "http://override:1")]),
        )
        .unwrap();
        assert_eq!(overridden.api_base_url, "http://override:1");
    }
}
