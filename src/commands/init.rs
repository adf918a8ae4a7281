/*!
 * Config Init Command
 *
 * Writes a default configuration to ~/.planet-directory/config.toml (or the
 * path given with --config), asking before overwriting an existing file.
 */

use crate::cli_style::{Icons, Theme};
use crate::config::{default_config_path, DirectoryConfig};
use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::{Path, PathBuf};

/// Write `config` to `path` (or the default location)
pub fn run_init(config: &DirectoryConfig, path: Option<&Path>, assume_yes: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path().context("Could not determine home directory")?,
    };

    if config_path.exists()
        && !assume_yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Existing configuration found. Overwrite?")
            .default(false)
            .interact()?
    {
        println!("\n{}", style("Configuration unchanged.").yellow());
        return Ok(config_path);
    }

    config
        .to_file(&config_path)
        .with_context(|| format!("Failed to save configuration to {}", config_path.display()))?;

    print_summary(&config_path, config);
    Ok(config_path)
}

fn print_summary(path: &Path, config: &DirectoryConfig) {
    println!(
        "\n  {} Configuration saved to {}",
        Theme::success(Icons::SUCCESS),
        style(path.display()).yellow()
    );
    println!("  API URL:      {}", style(&config.api_url).cyan());
    println!("  Append delay: {}ms", style(config.append_delay_ms).cyan());
    println!(
        "  Timeout:      {}",
        style(match config.request_timeout() {
            Some(t) => format!("{}s", t.as_secs()),
            None => "none".to_string(),
        })
        .cyan()
    );
}
