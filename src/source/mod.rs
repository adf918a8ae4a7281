//! Remote data sources for planets and residents
//!
//! `PlanetSource` abstracts the paged planets API so the loader and the
//! resident panel can run against the real HTTP service or an in-memory mock:
//! - `HttpPlanetSource`: reqwest-backed client for the public API
//! - `MockPlanetSource`: canned responses for unit tests (in tests module)

use async_trait::async_trait;
use url::Url;

use crate::error::{DirectoryError, Result};
use crate::model::{PlanetPage, Resident};

mod http;

pub use http::HttpPlanetSource;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::MockPlanetSource;

/// Read-only access to the planets API
#[async_trait]
pub trait PlanetSource: Send + Sync {
    /// Fetch one page of planets
    async fn fetch_page(&self, url: &str) -> Result<PlanetPage>;

    /// Fetch a single resident record
    async fn fetch_resident(&self, url: &str) -> Result<Resident>;
}

/// Parse `raw` as an absolute http(s) URL. No other validation is done.
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| DirectoryError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DirectoryError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("https://swapi.dev/api/planets/?format=json").is_ok());
        assert!(validate_url("http://127.0.0.1:8080/planets/").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = validate_url("/api/planets/").unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = validate_url("ftp://swapi.dev/planets").unwrap_err();
        match err {
            DirectoryError::InvalidUrl { reason, .. } => assert!(reason.contains("ftp")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
