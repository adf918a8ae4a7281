/*!
 * Configuration types for the planet directory
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DirectoryError, Result};
use crate::source::validate_url;

/// First page of the public planets endpoint
pub const DEFAULT_API_URL: &str = "https://swapi.dev/api/planets/?format=json";

/// Main configuration for the directory client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// URL of the first page of planets
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Delay before a fetched page is appended to the list, in milliseconds
    #[serde(default = "default_append_delay_ms")]
    pub append_delay_ms: u64,

    /// Per-request timeout in seconds (0 = no timeout)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            append_delay_ms: default_append_delay_ms(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
            log_level: LogLevel::Warn,
            log_file: None,
            verbose: false,
        }
    }
}

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    #[default]
    Warn,

    /// Info, warnings, and errors
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_append_delay_ms() -> u64 {
    300
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("planet-directory/{}", crate::VERSION)
}

impl DirectoryConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: DirectoryConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    /// Load from `path` if given, else from the default location if it exists,
    /// else fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => match default_config_path() {
                Some(p) if p.exists() => {
                    tracing::debug!("Loading configuration from {}", p.display());
                    Self::from_file(&p)
                }
                _ => Ok(Self::default()),
            },
        }
    }

    /// Delay applied before appending a fetched page
    pub fn append_delay(&self) -> Duration {
        Duration::from_millis(self.append_delay_ms)
    }

    /// Request timeout, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Reject configurations the client cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(DirectoryError::Config("api_url must not be empty".to_string()));
        }
        validate_url(&self.api_url)?;
        if self.user_agent.trim().is_empty() {
            return Err(DirectoryError::Config(
                "user_agent must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// `~/.planet-directory/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".planet-directory").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.append_delay_ms, 300);
        assert_eq!(config.append_delay(), Duration::from_millis(300));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!config.verbose);
    }

    #[test]
    fn test_zero_timeout_disables_timeout() {
        let config = DirectoryConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DirectoryConfig = toml::from_str(
            r#"
            api_url = "http://localhost:8080/planets/"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8080/planets/");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.append_delay_ms, 300);
        assert!(config.user_agent.starts_with("planet-directory/"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = DirectoryConfig {
            append_delay_ms: 0,
            verbose: true,
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        let loaded = DirectoryConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = DirectoryConfig::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(DirectoryError::Io(_))));
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let config = DirectoryConfig {
            api_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DirectoryError::Config(_))));
        assert!(DirectoryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = DirectoryConfig {
            api_url: "file:///etc/planets.json".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidUrl { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_FATAL);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
        assert_eq!(LogLevel::Info.to_tracing_level(), tracing::Level::INFO);
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }
}
