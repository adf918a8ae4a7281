//! reqwest-backed planet source

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{validate_url, PlanetSource};
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::model::{PlanetPage, Resident};

/// Client for the public planets API
#[derive(Debug, Clone)]
pub struct HttpPlanetSource {
    client: reqwest::Client,
}

impl HttpPlanetSource {
    /// Build a client with the configured User-Agent and timeout
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| DirectoryError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn get_json<T: DeserializeOwned>(&self, raw_url: &str) -> Result<T> {
        let url = validate_url(raw_url)?;
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| DirectoryError::Http {
                url: raw_url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                url: raw_url.to_string(),
                status: status.as_u16(),
            });
        }

        // Decode from bytes so malformed JSON surfaces as Decode, not Http
        let body = response
            .bytes()
            .await
            .map_err(|source| DirectoryError::Http {
                url: raw_url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| DirectoryError::Decode {
            url: raw_url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PlanetSource for HttpPlanetSource {
    async fn fetch_page(&self, url: &str) -> Result<PlanetPage> {
        self.get_json(url).await
    }

    async fn fetch_resident(&self, url: &str) -> Result<Resident> {
        self.get_json(url).await
    }
}
