//! Secrets management for Nudge
//!
//! Secrets are stored separately from configuration to avoid accidental sharing.
//! The secrets file is located at `~/.config/nudge/secrets.toml` and must have
//! restrictive permissions (0600 on Unix).
//!
//! Loading priority:
//! 1. Environment variables (SLACK_WEBHOOK_URL, BB_USER, BB_PASSWORD)
//! 2. Secrets file (~/.config/nudge/secrets.toml)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Secrets structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Secrets {
    /// Slack configuration
    pub slack: SlackSecrets,
    /// Bitbucket configuration
    pub bitbucket: BitbucketSecrets,
}

/// Slack-related secrets
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SlackSecrets {
    /// Incoming webhook URL
    pub webhook_url: Option<String>,
}

/// Bitbucket-related secrets
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BitbucketSecrets {
    /// Basic-auth username
    pub username: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
}

/// The full set of credentials a run needs, validated up front
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Slack incoming webhook URL
    pub slack_webhook_url: String,
    /// Bitbucket basic-auth username
    pub bitbucket_username: String,
    /// Bitbucket basic-auth password
    pub bitbucket_password: String,
}

impl Secrets {
    /// Load secrets from the default location
    ///
    /// Returns default (empty) secrets if file doesn't exist
    pub fn load() -> Result<Self> {
        let secrets_path = Self::default_secrets_path();

        if let Some(path) = secrets_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load secrets from a specific file with permission checking
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        // Check file permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            let mode = metadata.permissions().mode();

            // Check if file is readable by group or others (mode & 0o077)
            if mode & 0o077 != 0 {
                return Err(Error::Config(format!(
                    "Secrets file {} has insecure permissions {:o}. \
                     Please run: chmod 600 {}",
                    path.display(),
                    mode & 0o777,
                    path.display()
                )));
            }

            debug!(path = %path.display(), mode = format!("{:o}", mode & 0o777), "Secrets file permissions OK");
        }

        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let mut secrets: Secrets = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        // Trim whitespace from file values
        for value in [
            &mut secrets.slack.webhook_url,
            &mut secrets.bitbucket.username,
            &mut secrets.bitbucket.password,
        ]
        .into_iter()
        .flatten()
        {
            *value = value.trim().to_string();
        }

        Ok(secrets)
    }

    /// Get the default secrets file path
    ///
    /// Returns `~/.config/nudge/secrets.toml` on Unix
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nudge").join("secrets.toml"))
    }

    /// Get the Slack webhook URL with environment variable override
    ///
    /// Priority: SLACK_WEBHOOK_URL env var > secrets file
    pub fn slack_webhook_url(&self) -> Option<String> {
        env_or_file("SLACK_WEBHOOK_URL", self.slack.webhook_url.as_deref())
    }

    /// Get the Bitbucket username (BB_USER env var > secrets file)
    pub fn bitbucket_username(&self) -> Option<String> {
        env_or_file("BB_USER", self.bitbucket.username.as_deref())
    }

    /// Get the Bitbucket password (BB_PASSWORD env var > secrets file)
    pub fn bitbucket_password(&self) -> Option<String> {
        env_or_file("BB_PASSWORD", self.bitbucket.password.as_deref())
    }

    /// Resolve all required credentials, failing with the name of the first
    /// missing variable
    pub fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            slack_webhook_url: self
                .slack_webhook_url()
                .ok_or_else(|| missing("SLACK_WEBHOOK_URL"))?,
            bitbucket_username: self
                .bitbucket_username()
                .ok_or_else(|| missing("BB_USER"))?,
            bitbucket_password: self
                .bitbucket_password()
                .ok_or_else(|| missing("BB_PASSWORD"))?,
        })
    }
}

fn env_or_file(var: &str, file_value: Option<&str>) -> Option<String> {
    if let Ok(value) = std::env::var(var) {
        let value = value.trim().to_string();
        if !value.is_empty() {
            debug!(var, "Using credential from environment variable");
            return Some(value);
        }
    }

    match file_value {
        Some(value) if !value.is_empty() => {
            debug!(var, "Using credential from secrets file");
            Some(value.to_string())
        }
        _ => None,
    }
}

fn missing(var: &str) -> Error {
    Error::Config(format!(
        "Missing required credential: set the {} environment variable \
         or add it to ~/.config/nudge/secrets.toml",
        var
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_secrets() {
        let secrets = Secrets::default();
        assert!(secrets.slack.webhook_url.is_none());
        assert!(secrets.bitbucket.username.is_none());
        assert!(secrets.bitbucket.password.is_none());
    }

    #[test]
    fn test_parse_secrets() {
        let toml = r#"
[slack]
webhook_url = "https://hooks.slack.com/services/T000/B000/XXXX"

[bitbucket]
username = "nudgebot"
password = "hunter2"
"#;
        let secrets: Secrets = toml::from_str(toml).unwrap();
        assert_eq!(
            secrets.slack.webhook_url,
            Some("https://hooks.slack.com/services/T000/B000/XXXX".to_string())
        );
        assert_eq!(secrets.bitbucket.username, Some("nudgebot".to_string()));
        assert_eq!(secrets.bitbucket.password, Some("hunter2".to_string()));
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let secrets = Secrets {
            slack: SlackSecrets {
                webhook_url: Some("https://hooks.slack.com/services/T/B/X".to_string()),
            },
            bitbucket: BitbucketSecrets {
                username: Some("nudgebot".to_string()),
                password: None,
            },
        };

        // BB_PASSWORD is unlikely to be set in the test environment; if it
        // is, credentials() legitimately succeeds and there is nothing to
        // assert about the message.
        if std::env::var("BB_PASSWORD").is_err() {
            let err = secrets.credentials().unwrap_err();
            assert!(err.to_string().contains("BB_PASSWORD"));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_insecure_permissions_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bitbucket]\nusername = \"test\"").unwrap();

        // Set world-readable permissions
        let perms = std::fs::Permissions::from_mode(0o644);
        std::fs::set_permissions(file.path(), perms).unwrap();

        let result = Secrets::load_from_file(&file.path().to_path_buf());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("permissions"));
    }

    #[cfg(unix)]
    #[test]
    fn test_secure_permissions_accepted() {
        use std::os::unix::fs::PermissionsExt;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bitbucket]\nusername = \"  test  \"").unwrap();

        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(file.path(), perms).unwrap();

        let secrets = Secrets::load_from_file(&file.path().to_path_buf()).unwrap();
        // load_from_file trims file values
        assert_eq!(secrets.bitbucket.username, Some("test".to_string()));
    }
}
