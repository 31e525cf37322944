//! Configuration management for Nudge
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (NUDGE_*, plus IGNORE_WORDS)
//! 3. Config file (~/.config/nudge/config.toml)
//! 4. Default values
//!
//! The loaded `Config` is constructed once at startup and passed by
//! reference into the run controller; nothing reads the environment after
//! that point.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Reminder-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Slack channel the reminder is posted to
    pub channel: String,

    /// Bitbucket project/repository to scan for open pull requests
    pub repo: String,

    /// Minimum age of the last update before a pull request is nagged about
    #[serde(with = "humantime_serde")]
    pub stale_after: Duration,

    /// Title substrings that exempt a pull request from reminders
    pub ignore_words: Vec<String>,

    /// CSV file mapping reviewer emails to Slack handles
    pub people_file: PathBuf,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            channel: "#code-review".to_string(),
            repo: String::new(),
            stale_after: Duration::from_secs(5 * 60 * 60),
            ignore_words: Vec::new(),
            people_file: PathBuf::from("people.csv"),
        }
    }
}

/// Bitbucket server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BitbucketConfig {
    /// Base URL of the Bitbucket Server instance (no trailing slash)
    pub base_url: String,
}

impl Default for BitbucketConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:7990".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Reminder configuration
    pub reminder: ReminderConfig,

    /// Bitbucket configuration
    pub bitbucket: BitbucketConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/nudge/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nudge").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - NUDGE_CHANNEL: Slack channel
    /// - NUDGE_REPO: Bitbucket repository
    /// - NUDGE_BASE_URL: Bitbucket base URL
    /// - NUDGE_PEOPLE_FILE: identity CSV path
    /// - IGNORE_WORDS: comma-separated ignore words
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(channel) = std::env::var("NUDGE_CHANNEL") {
            self.reminder.channel = channel;
        }

        if let Ok(repo) = std::env::var("NUDGE_REPO") {
            self.reminder.repo = repo;
        }

        if let Ok(base_url) = std::env::var("NUDGE_BASE_URL") {
            self.bitbucket.base_url = base_url;
        }

        if let Ok(people_file) = std::env::var("NUDGE_PEOPLE_FILE") {
            self.reminder.people_file = PathBuf::from(people_file);
        }

        if let Ok(words) = std::env::var("IGNORE_WORDS") {
            self.reminder.ignore_words = words
                .split(',')
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect();
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, channel: Option<String>, repo: Option<String>) -> Self {
        if let Some(channel) = channel {
            self.reminder.channel = channel;
        }

        if let Some(repo) = repo {
            self.reminder.repo = repo;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(channel: Option<String>, repo: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(channel, repo))
    }
}
