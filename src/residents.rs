//! Resident reveal/hide state for one detail view
//!
//! Showing residents fetches every resident URL concurrently and only takes
//! effect if all of them succeed. Hiding never fetches.

use futures::future::try_join_all;
use tracing::{debug, error};

use crate::error::Result;
use crate::model::Resident;
use crate::source::PlanetSource;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Residents fetched and now visible
    Shown { count: usize },
    /// Residents hidden; stored records kept
    Hidden,
    /// A fetch failed; nothing changed
    Unchanged,
}

/// Visibility flag plus the last successfully fetched residents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentPanel {
    visible: bool,
    residents: Vec<Resident>,
}

impl ResidentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Residents from the last successful fetch, visible or not
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// Label for the toggle control
    pub fn button_label(&self) -> &'static str {
        if self.visible {
            "Hide Residents"
        } else {
            "Show Residents 🏠"
        }
    }

    /// Flip visibility. Showing re-fetches every URL each time.
    pub async fn toggle<S>(&mut self, source: &S, urls: &[String]) -> ToggleOutcome
    where
        S: PlanetSource + ?Sized,
    {
        if self.visible {
            self.visible = false;
            debug!("Residents hidden");
            return ToggleOutcome::Hidden;
        }

        match fetch_all(source, urls).await {
            Ok(residents) => {
                let count = residents.len();
                self.residents = residents;
                self.visible = true;
                debug!(count, "Residents shown");
                ToggleOutcome::Shown { count }
            }
            Err(e) => {
                error!(category = %e.category(), "Error fetching residents: {}", e);
                ToggleOutcome::Unchanged
            }
        }
    }
}

/// Fetch every resident concurrently; the first failure fails the batch.
pub async fn fetch_all<S>(source: &S, urls: &[String]) -> Result<Vec<Resident>>
where
    S: PlanetSource + ?Sized,
{
    try_join_all(urls.iter().map(|url| source.fetch_resident(url))).await
}
