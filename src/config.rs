use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::SstvError;
use crate::servers::ServerPolicy;

pub const ENV_USERNAME: &str = "SSTV_USERNAME";
pub const ENV_PASSWORD: &str = "SSTV_PASSWORD";
pub const ENV_SERVER: &str = "SSTV_SERVER";

/// Account credentials. Transient; the password is wiped from memory on
/// drop and never appears in logs or Debug output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Where a username/password pair can come from. Interactive prompting
/// lives behind this trait so tests can supply fixed credentials.
pub trait CredentialSource {
    /// Short label for status messages ("config file", "environment", ...)
    fn origin(&self) -> &'static str;

    /// `Ok(None)` means this source has nothing configured; the caller
    /// moves on to the next one.
    fn resolve(&self) -> Result<Option<Credentials>, SstvError>;
}

/// Fixed credentials, used for CLI flag overrides and in tests.
pub struct FixedSource {
    pub username: String,
    pub password: String,
}

impl CredentialSource for FixedSource {
    fn origin(&self) -> &'static str {
        "command line"
    }

    fn resolve(&self) -> Result<Option<Credentials>, SstvError> {
        Ok(Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }))
    }
}

/// Credentials from `SSTV_USERNAME` / `SSTV_PASSWORD`.
pub struct EnvSource;

impl CredentialSource for EnvSource {
    fn origin(&self) -> &'static str {
        "environment"
    }

    fn resolve(&self) -> Result<Option<Credentials>, SstvError> {
        match (std::env::var(ENV_USERNAME), std::env::var(ENV_PASSWORD)) {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Some(Credentials { username, password }))
            }
            _ => Ok(None),
        }
    }
}

/// Credentials stored in the config file.
pub struct ConfigSource<'a> {
    pub config: &'a AppConfig,
}

impl CredentialSource for ConfigSource<'_> {
    fn origin(&self) -> &'static str {
        "config file"
    }

    fn resolve(&self) -> Result<Option<Credentials>, SstvError> {
        match (&self.config.username, &self.config.password) {
            (Some(username), Some(password))
                if !username.is_empty() && !password.is_empty() =>
            {
                Ok(Some(Credentials {
                    username: username.clone(),
                    password: password.clone(),
                }))
            }
            _ => Ok(None),
        }
    }
}

/// Walk the sources in priority order and take the first hit, reporting
/// where the credentials came from.
pub fn resolve_credentials(
    sources: &[&dyn CredentialSource],
) -> Result<Option<(Credentials, &'static str)>, SstvError> {
    for source in sources {
        if let Some(credentials) = source.resolve()? {
            return Ok(Some((credentials, source.origin())));
        }
    }
    Ok(None)
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub server: Option<String>,
    #[serde(default)]
    pub server_policy: ServerPolicy,
    #[serde(default)]
    pub last_generated: Option<i64>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("tv", "smoothstreams", "sstv-playlist")
    }

    pub fn load() -> Result<Self, anyhow::Error> {
        if let Some(proj_dirs) = Self::project_dirs() {
            let config_path = proj_dirs.config_dir().join("config.json");
            if config_path.exists() {
                let content = fs::read_to_string(config_path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(AppConfig::default())
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(proj_dirs) = Self::project_dirs() {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let config_path = config_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }

    pub fn remember(&mut self, credentials: &Credentials, server: &str) {
        self.username = Some(credentials.username.clone());
        self.password = Some(credentials.password.clone());
        self.server = Some(server.to_string());
    }

    pub fn mark_generated(&mut self) {
        self.last_generated = Some(chrono::Utc::now().timestamp());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_wins_over_empty_config() {
        let config = AppConfig::default();
        let fixed = FixedSource {
            username: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let from_config = ConfigSource { config: &config };
        let resolved = resolve_credentials(&[&fixed, &from_config])
            .unwrap()
            .unwrap();
        assert_eq!(resolved.0.username, "user@example.com");
        assert_eq!(resolved.1, "command line");
    }

    #[test]
    fn test_config_source_requires_both_fields() {
        let config = AppConfig {
            username: Some("user@example.com".to_string()),
            ..Default::default()
        };
        let source = ConfigSource { config: &config };
        assert!(source.resolve().unwrap().is_none());
    }

    #[test]
    fn test_no_sources_resolve() {
        let config = AppConfig::default();
        let source = ConfigSource { config: &config };
        assert!(resolve_credentials(&[&source]).unwrap().is_none());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let credentials = Credentials {
            username: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{:?}", credentials);
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_default_policy_is_warn_and_continue() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server_policy, ServerPolicy::WarnAndContinue);
    }
}
