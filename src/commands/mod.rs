//! CLI command implementations
//!
//! Each command builds an [`App`] over the given source, loads what it needs
//! and renders one view. `browse` is the interactive mode.

pub mod init;

use anyhow::Result;

use crate::app::{Action, App};
use crate::cli_style::{self, print_info, print_warning};
use crate::config::DirectoryConfig;
use crate::loader::LoadOutcome;
use crate::router::Route;
use crate::source::PlanetSource;

/// How many pages `list` should load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    Pages(usize),
    All,
}

/// Interactive list/detail navigation
pub async fn browse<S: PlanetSource>(source: S, config: &DirectoryConfig) -> Result<()> {
    let mut app = App::new(source, config);
    app.run_interactive().await?;
    Ok(())
}

/// Print the planet list after loading `limit` pages
pub async fn list<S: PlanetSource>(
    source: S,
    config: &DirectoryConfig,
    limit: PageLimit,
) -> Result<()> {
    let mut app = App::new(source, config);
    let first = app.start().await;
    fail_if_nothing_loaded(&app, first)?;

    let outcome = match limit {
        PageLimit::Pages(n) => app.load_pages(n.saturating_sub(1)).await,
        PageLimit::All => app.load_all().await,
    };
    report_partial(&outcome);

    cli_style::render_home(app.list());
    if app.list().has_more() {
        print_info("More planets available; use --pages N or --all to load them");
    }
    Ok(())
}

/// Print one planet, optionally with its residents. `pages` preloads that
/// many pages before loading on until `index` is in range.
pub async fn show<S: PlanetSource>(
    source: S,
    config: &DirectoryConfig,
    index: usize,
    with_residents: bool,
    pages: Option<usize>,
) -> Result<()> {
    let mut app = App::new(source, config);
    let first = app.start().await;
    fail_if_nothing_loaded(&app, first)?;
    if let Some(n) = pages {
        report_partial(&app.load_pages(n.saturating_sub(1)).await);
    }
    report_partial(&app.load_through(index).await);

    app.navigate(Route::Planet(index))?;

    if with_residents {
        let available = app
            .detail()
            .map(|d| d.residents_available())
            .unwrap_or(false);
        if available {
            app.dispatch(Action::ToggleResidents).await?;
            if !app.detail().map(|d| d.residents().is_visible()).unwrap_or(false) {
                print_warning("Residents could not be loaded");
            }
        } else {
            print_info("Population unknown; residents are not listed for this planet");
        }
    }

    app.render();
    Ok(())
}

/// Resolve a route path and render it
pub async fn open<S: PlanetSource>(source: S, config: &DirectoryConfig, path: &str) -> Result<()> {
    let route = Route::parse(path)?;
    match route {
        Route::Home => list(source, config, PageLimit::Pages(1)).await,
        Route::Planet(index) => show(source, config, index, false, None).await,
    }
}

/// Print the effective configuration as TOML
pub fn show_config(config: &DirectoryConfig) -> Result<()> {
    cli_style::section_header("Configuration");
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn fail_if_nothing_loaded<S: PlanetSource>(app: &App<S>, outcome: LoadOutcome) -> Result<()> {
    if let LoadOutcome::Failed(e) = outcome {
        if app.list().is_empty() {
            return Err(e.into());
        }
    }
    Ok(())
}

fn report_partial(outcome: &LoadOutcome) {
    if let LoadOutcome::Failed(e) = outcome {
        print_warning(&format!("Stopped loading early: {}", e));
    }
}
