//! In-memory planet source for testing
//!
//! Responses are registered per URL. Every request is recorded so tests can
//! assert on what was (or was not) fetched.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use super::PlanetSource;
use crate::error::{DirectoryError, Result};
use crate::model::{Planet, PlanetPage, Resident};

#[derive(Debug, Default)]
struct MockState {
    pages: HashMap<String, PlanetPage>,
    residents: HashMap<String, Resident>,
    failing: HashSet<String>,
    requests: Vec<String>,
}

/// Mock planets API
#[derive(Debug, Clone, Default)]
pub struct MockPlanetSource {
    state: Arc<RwLock<MockState>>,
}

impl MockPlanetSource {
    /// Create a mock with no registered responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page at `url`
    pub fn add_page(&self, url: &str, results: Vec<Planet>, next: Option<&str>) {
        let page = PlanetPage {
            results,
            next: next.map(str::to_string),
        };
        self.state
            .write()
            .unwrap()
            .pages
            .insert(url.to_string(), page);
    }

    /// Register a resident at `url`
    pub fn add_resident(&self, url: &str, resident: Resident) {
        self.state
            .write()
            .unwrap()
            .residents
            .insert(url.to_string(), resident);
    }

    /// Make every request to `url` fail with a 503
    pub fn fail(&self, url: &str) {
        self.state.write().unwrap().failing.insert(url.to_string());
    }

    /// All URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.state.read().unwrap().requests.clone()
    }

    /// Number of requests made so far
    pub fn request_count(&self) -> usize {
        self.state.read().unwrap().requests.len()
    }

    fn record(&self, url: &str) -> Result<()> {
        let mut state = self.state.write().unwrap();
        state.requests.push(url.to_string());
        if state.failing.contains(url) {
            return Err(DirectoryError::Status {
                url: url.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PlanetSource for MockPlanetSource {
    async fn fetch_page(&self, url: &str) -> Result<PlanetPage> {
        self.record(url)?;
        self.state
            .read()
            .unwrap()
            .pages
            .get(url)
            .cloned()
            .ok_or_else(|| DirectoryError::Status {
                url: url.to_string(),
                status: 404,
            })
    }

    async fn fetch_resident(&self, url: &str) -> Result<Resident> {
        self.record(url)?;
        self.state
            .read()
            .unwrap()
            .residents
            .get(url)
            .cloned()
            .ok_or_else(|| DirectoryError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Planet with the given name and population and no residents
pub fn planet(name: &str, population: &str) -> Planet {
    Planet {
        name: name.to_string(),
        climate: "temperate".to_string(),
        population: population.to_string(),
        terrain: "grasslands".to_string(),
        residents: Vec::new(),
    }
}

/// Resident with the given name and fixed vitals
pub fn resident(name: &str) -> Resident {
    Resident {
        name: name.to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        gender: "male".to_string(),
    }
}
