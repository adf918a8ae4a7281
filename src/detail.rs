//! Planet detail view state
//!
//! A detail view resolves its planet from the list once, on entry, and keeps
//! its own copy. Later appends to the list cannot change what it shows.

use crate::error::Result;
use crate::model::Planet;
use crate::residents::{ResidentPanel, ToggleOutcome};
use crate::source::PlanetSource;
use crate::state::PlanetList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetDetail {
    index: usize,
    planet: Planet,
    residents: ResidentPanel,
}

impl PlanetDetail {
    /// Resolve the planet at `index`, failing with `PlanetNotFound` when out of range.
    pub fn resolve(list: &PlanetList, index: usize) -> Result<Self> {
        let planet = list.require(index)?.clone();
        Ok(Self {
            index,
            planet,
            residents: ResidentPanel::new(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn residents(&self) -> &ResidentPanel {
        &self.residents
    }

    /// The residents control is offered only when population is known
    pub fn residents_available(&self) -> bool {
        self.planet.population_known()
    }

    /// Toggle resident visibility. Does nothing when the control is not offered.
    pub async fn toggle_residents<S>(&mut self, source: &S) -> Option<ToggleOutcome>
    where
        S: PlanetSource + ?Sized,
    {
        if !self.residents_available() {
            return None;
        }
        Some(self.residents.toggle(source, &self.planet.residents).await)
    }
}
