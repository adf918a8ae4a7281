//! Client-held planet list
//!
//! The list only grows. A successful page fetch appends its results and
//! replaces the cursor in a single call, so the two never drift apart.

use crate::error::{DirectoryError, Result};
use crate::model::{Planet, PlanetPage};

/// Accumulated planets plus the cursor to the next page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetList {
    planets: Vec<Planet>,
    cursor: Option<String>,
}

impl PlanetList {
    /// Empty list with no cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's planets and take its `next` as the new cursor.
    ///
    /// Returns the number of planets appended.
    pub fn append_page(&mut self, page: PlanetPage) -> usize {
        let added = page.results.len();
        self.planets.extend(page.results);
        self.cursor = page.next;
        added
    }

    /// Planet at positional index
    pub fn get(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    /// Planet at positional index, or `PlanetNotFound`
    pub fn require(&self, index: usize) -> Result<&Planet> {
        self.get(index).ok_or(DirectoryError::PlanetNotFound {
            index,
            len: self.planets.len(),
        })
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// URL of the next page, if any
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Whether another page can be loaded
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}
