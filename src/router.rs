//! Navigation routes
//!
//! Two routes exist: the planet list at `/` and a planet detail at
//! `/planet/:index`, where `index` is the position in the loaded list.

use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Planet list
    #[default]
    Home,
    /// Detail view for the planet at this list position
    Planet(usize),
}

impl Route {
    /// Parse a navigation path. A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Result<Self, DirectoryError> {
        let trimmed = path.trim();
        let invalid = || DirectoryError::InvalidRoute(trimmed.to_string());

        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Route::Home);
        }
        let rest = trimmed.strip_prefix('/').ok_or_else(invalid)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        let segments: Vec<&str> = rest.split('/').collect();

        match segments.as_slice() {
            ["planet", index] if is_index(index) => {
                index.parse::<usize>().map(Route::Planet).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Route {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Planet(index) => write!(f, "/planet/{}", index),
        }
    }
}
