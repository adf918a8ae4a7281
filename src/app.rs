//! Navigation between the list view and the detail view
//!
//! `App` owns the planet list and the current view. User input arrives as an
//! [`Action`]; the interactive loop turns menu selections into actions and
//! renders after each one.

use tracing::{debug, info, warn};

use crate::cli_style::{self, HOME_LABEL, LOAD_MORE_LABEL};
use crate::config::DirectoryConfig;
use crate::detail::PlanetDetail;
use crate::error::{DirectoryError, Result};
use crate::loader::{LoadOutcome, PlanetLoader};
use crate::residents::ToggleOutcome;
use crate::router::Route;
use crate::source::PlanetSource;
use crate::state::PlanetList;

/// A user-triggered control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Follow a planet link
    Open(usize),
    /// "Explore More": load the next page if there is one
    LoadMore,
    /// Show or hide residents on the detail view
    ToggleResidents,
    /// Back to the list
    Home,
    Quit,
}

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<S> {
    loader: PlanetLoader<S>,
    list: PlanetList,
    start_url: String,
    detail: Option<PlanetDetail>,
}

impl<S: PlanetSource> App<S> {
    pub fn new(source: S, config: &DirectoryConfig) -> Self {
        Self {
            loader: PlanetLoader::new(source, config.append_delay()),
            list: PlanetList::new(),
            start_url: config.api_url.clone(),
            detail: None,
        }
    }

    pub fn list(&self) -> &PlanetList {
        &self.list
    }

    pub fn detail(&self) -> Option<&PlanetDetail> {
        self.detail.as_ref()
    }

    pub fn loader(&self) -> &PlanetLoader<S> {
        &self.loader
    }

    /// Current route
    pub fn route(&self) -> Route {
        match &self.detail {
            Some(detail) => Route::Planet(detail.index()),
            None => Route::Home,
        }
    }

    /// Load the first page from the configured URL
    pub async fn start(&mut self) -> LoadOutcome {
        info!(url = %self.start_url, "Loading first page");
        self.loader.load_page(&mut self.list, &self.start_url).await
    }

    /// Load up to `pages` more pages
    pub async fn load_pages(&mut self, pages: usize) -> LoadOutcome {
        let mut outcome = LoadOutcome::Exhausted;
        for _ in 0..pages {
            outcome = self.loader.load_next_page(&mut self.list).await;
            if !outcome.is_appended() {
                break;
            }
        }
        outcome
    }

    /// Load pages until `index` is in range or pagination ends
    pub async fn load_through(&mut self, index: usize) -> LoadOutcome {
        self.loader
            .load_until(&mut self.list, index.saturating_add(1))
            .await
    }

    /// Load every remaining page
    pub async fn load_all(&mut self) -> LoadOutcome {
        self.loader.load_all(&mut self.list).await
    }

    /// Switch views. An index that does not resolve leaves the current view in place.
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        match route {
            Route::Home => {
                self.detail = None;
            }
            Route::Planet(index) => {
                let detail = PlanetDetail::resolve(&self.list, index)?;
                self.detail = Some(detail);
            }
        }
        debug!(route = %route, "Navigated");
        Ok(())
    }

    /// Apply one user action
    pub async fn dispatch(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::Open(index) => self.navigate(Route::Planet(index))?,
            Action::Home => self.navigate(Route::Home)?,
            Action::LoadMore => {
                if let LoadOutcome::Exhausted = self.loader.load_next_page(&mut self.list).await
                {
                    debug!("Load more ignored, no next page");
                }
            }
            Action::ToggleResidents => {
                let source = self.loader.source();
                match self.detail.as_mut() {
                    Some(detail) => {
                        if let Some(ToggleOutcome::Unchanged) =
                            detail.toggle_residents(source).await
                        {
                            debug!("Resident toggle had no effect");
                        }
                    }
                    None => warn!("Residents toggled outside a detail view"),
                }
            }
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Menu entries for the current view
    pub fn menu(&self) -> Vec<(String, Action)> {
        let mut items = Vec::new();
        match &self.detail {
            None => {
                for (index, planet) in self.list.planets().iter().enumerate() {
                    items.push((planet.name.clone(), Action::Open(index)));
                }
                items.push((LOAD_MORE_LABEL.to_string(), Action::LoadMore));
            }
            Some(detail) => {
                if detail.residents_available() {
                    items.push((
                        detail.residents().button_label().to_string(),
                        Action::ToggleResidents,
                    ));
                }
                items.push((HOME_LABEL.to_string(), Action::Home));
            }
        }
        items.push(("Quit".to_string(), Action::Quit));
        items
    }

    /// Print the current view
    pub fn render(&self) {
        match &self.detail {
            None => cli_style::render_home(&self.list),
            Some(detail) => cli_style::render_detail(detail),
        }
    }

    /// Prompt-driven loop until the user quits or closes the prompt
    pub async fn run_interactive(&mut self) -> Result<()> {
        cli_style::print_header();
        self.start().await;

        loop {
            self.render();

            let menu = self.menu();
            let labels: Vec<String> = menu.iter().map(|(label, _)| label.clone()).collect();
            let prompt = match &self.detail {
                None => "Choose a planet".to_string(),
                Some(detail) => format!("{} {}", detail.planet().name, self.route()),
            };

            let Some(choice) = prompt_select(prompt, labels).await? else {
                break;
            };

            match self.dispatch(menu[choice].1).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(DirectoryError::PlanetNotFound { index, len }) => {
                    cli_style::render_missing_planet(Route::Planet(index), len)
                }
                Err(e) => return Err(e),
            }
        }

        cli_style::print_footer();
        Ok(())
    }
}

/// Run a dialoguer selection off the async runtime. `None` when the user escapes.
async fn prompt_select(prompt: String, labels: Vec<String>) -> Result<Option<usize>> {
    use dialoguer::{theme::ColorfulTheme, Select};

    tokio::task::spawn_blocking(move || {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&labels[..])
            .default(0)
            .interact_opt()
    })
    .await
    .map_err(|e| DirectoryError::Io(std::io::Error::other(e)))?
    .map_err(DirectoryError::from)
}
