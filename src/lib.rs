/*!
 * Planet Directory
 *
 * Terminal client for a paged planets REST API:
 * - Page-by-page loading into an append-only planet list
 * - List view and per-planet detail view, addressed as `/` and `/planet/:index`
 * - Concurrent all-or-nothing resident fetching with show/hide
 * - Interactive navigation and one-shot commands
 */

pub mod app;
pub mod cli_style;
pub mod commands;
pub mod config;
pub mod detail;
pub mod error;
pub mod loader;
pub mod logging;
pub mod model;
pub mod residents;
pub mod router;
pub mod source;
pub mod state;

// Re-export commonly used types
pub use app::{Action, App, Flow};
pub use config::{DirectoryConfig, LogLevel};
pub use detail::PlanetDetail;
pub use error::{DirectoryError, Result};
pub use loader::{LoadOutcome, PlanetLoader};
pub use model::{Planet, PlanetPage, Resident};
pub use residents::{ResidentPanel, ToggleOutcome};
pub use router::Route;
pub use source::{HttpPlanetSource, PlanetSource};
pub use state::PlanetList;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
