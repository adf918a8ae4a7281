//! Paged planet loading
//!
//! Fetches a page, waits the append delay, then appends it to the
//! [`PlanetList`]. Failures are logged and leave the list untouched; there is
//! no retry and no guard against overlapping calls.

use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::DirectoryError;
use crate::source::PlanetSource;
use crate::state::PlanetList;

/// Result of a load attempt
#[derive(Debug)]
pub enum LoadOutcome {
    /// Page fetched and appended
    Appended { added: usize, has_more: bool },
    /// No cursor, nothing to fetch
    Exhausted,
    /// Fetch or decode failed; list unchanged
    Failed(DirectoryError),
}

impl LoadOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, LoadOutcome::Appended { .. })
    }
}

/// Loads planet pages from a [`PlanetSource`] into a [`PlanetList`]
#[derive(Debug, Clone)]
pub struct PlanetLoader<S> {
    source: S,
    append_delay: Duration,
}

impl<S: PlanetSource> PlanetLoader<S> {
    pub fn new(source: S, append_delay: Duration) -> Self {
        Self {
            source,
            append_delay,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the page at `url` and append it to `list`.
    pub async fn load_page(&self, list: &mut PlanetList, url: &str) -> LoadOutcome {
        debug!(url, "Loading planet page");

        let page = match self.source.fetch_page(url).await {
            Ok(page) => page,
            Err(e) => {
                error!(url, category = %e.category(), "Error fetching planets: {}", e);
                return LoadOutcome::Failed(e);
            }
        };

        if !self.append_delay.is_zero() {
            tokio::time::sleep(self.append_delay).await;
        }

        let added = list.append_page(page);
        info!(
            added,
            total = list.len(),
            next = list.cursor().unwrap_or("none"),
            "Appended planet page"
        );

        LoadOutcome::Appended {
            added,
            has_more: list.has_more(),
        }
    }

    /// Load the page the cursor points at; a no-op once the cursor is gone.
    pub async fn load_next_page(&self, list: &mut PlanetList) -> LoadOutcome {
        match list.cursor().map(str::to_string) {
            Some(next) => self.load_page(list, &next).await,
            None => {
                debug!("No next page, skipping load");
                LoadOutcome::Exhausted
            }
        }
    }

    /// Keep loading until `list` has at least `min_len` planets or the
    /// cursor runs out. Stops at the first failure.
    pub async fn load_until(&self, list: &mut PlanetList, min_len: usize) -> LoadOutcome {
        let mut outcome = LoadOutcome::Exhausted;
        while list.len() < min_len {
            outcome = self.load_next_page(list).await;
            if !outcome.is_appended() {
                break;
            }
        }
        outcome
    }

    /// Load every remaining page. Stops at the first failure.
    pub async fn load_all(&self, list: &mut PlanetList) -> LoadOutcome {
        self.load_until(list, usize::MAX).await
    }
}
