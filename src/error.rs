/*!
 * Error types for the planet directory
 */

use std::fmt;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARTIAL: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// URL is not an absolute http(s) URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Positional index does not refer to a loaded planet
    #[error("No planet at index {index} ({len} loaded)")]
    PlanetNotFound { index: usize, len: usize },

    /// Navigation path matches no route
    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Interactive prompt failed (closed terminal, not a tty)
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl DirectoryError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DirectoryError::InvalidUrl { .. }
            | DirectoryError::PlanetNotFound { .. }
            | DirectoryError::InvalidRoute(_)
            | DirectoryError::Config(_) => EXIT_FATAL,
            _ => EXIT_PARTIAL,
        }
    }

    /// Check if this error is transient (temporary, worth retrying by hand)
    pub fn is_transient(&self) -> bool {
        match self {
            DirectoryError::Http { source, .. } => {
                source.is_timeout() || source.is_connect() || source.is_request()
            }
            DirectoryError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::InvalidUrl { .. } | DirectoryError::InvalidRoute(_) => {
                ErrorCategory::Validation
            }
            DirectoryError::Http { .. } | DirectoryError::Status { .. } => ErrorCategory::Network,
            DirectoryError::Decode { .. } => ErrorCategory::Codec,
            DirectoryError::PlanetNotFound { .. } => ErrorCategory::Navigation,
            DirectoryError::Config(_) => ErrorCategory::Configuration,
            DirectoryError::Io(_) => ErrorCategory::IoError,
            DirectoryError::Prompt(_) => ErrorCategory::Terminal,
        }
    }
}

/// Error category for classification and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// URL or route validation errors
    Validation,
    /// Network/protocol errors
    Network,
    /// JSON decoding errors
    Codec,
    /// Stale or out-of-range navigation
    Navigation,
    /// Configuration errors
    Configuration,
    /// I/O operation errors
    IoError,
    /// Interactive terminal errors
    Terminal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Network => write!(f, "network"),
            ErrorCategory::Codec => write!(f, "codec"),
            ErrorCategory::Navigation => write!(f, "navigation"),
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::IoError => write!(f, "io"),
            ErrorCategory::Terminal => write!(f, "terminal"),
        }
    }
}

impl From<toml::de::Error> for DirectoryError {
    fn from(err: toml::de::Error) -> Self {
        DirectoryError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for DirectoryError {
    fn from(err: toml::ser::Error) -> Self {
        DirectoryError::Config(format!("TOML serialize error: {}", err))
    }
}
