/*!
 * Planet Directory CLI - Command Line Interface
 */

use clap::{builder::RangedU64ValueParser, Parser, Subcommand, ValueEnum};
use planet_directory::{
    cli_style::print_error,
    commands::{self, init::run_init, PageLimit},
    config::{DirectoryConfig, LogLevel},
    error::{DirectoryError, EXIT_FATAL, EXIT_PARTIAL, EXIT_SUCCESS},
    logging, HttpPlanetSource,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planets")]
#[command(version, about = "Browse Star Wars planets and their residents from the terminal", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.planet-directory/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// URL of the first planets page
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Delay before a fetched page is shown, in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    append_delay_ms: Option<u64>,

    /// Request timeout in seconds (0 = none)
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Log level
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevelArg>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate planets interactively (default)
    Browse,

    /// Print the planet list
    List {
        /// Number of pages to load
        #[arg(long, default_value = "1", conflicts_with = "all", value_parser = page_count())]
        pages: usize,

        /// Load every page
        #[arg(long)]
        all: bool,
    },

    /// Print one planet by list position
    Show {
        /// Position in the planet list (0-based)
        index: usize,

        /// Also fetch and print residents
        #[arg(long)]
        residents: bool,

        /// Pages to load before looking up the index
        #[arg(long, value_parser = page_count())]
        pages: Option<usize>,
    },

    /// Render a route path: "/" or "/planet/<index>"
    Open {
        path: String,
    },

    /// Print the effective configuration, or write it with --init
    Config {
        /// Write the configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite without asking
        #[arg(short, long, requires = "init")]
        yes: bool,
    },
}

/// Page counts start at 1
fn page_count() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

#[derive(Copy, Clone, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

/// Config file first, then CLI flags on top
fn resolve_config(cli: &Cli) -> Result<DirectoryConfig, DirectoryError> {
    let mut config = DirectoryConfig::load(cli.config.as_deref())?;

    if let Some(ref url) = cli.api_url {
        config.api_url = url.clone();
    }
    if let Some(ms) = cli.append_delay_ms {
        config.append_delay_ms = ms;
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = secs;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file.clone();
    }
    if cli.verbose {
        config.verbose = true;
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli, config: DirectoryConfig) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse);

    if let Commands::Config { init, yes } = command {
        return if init {
            run_init(&config, cli.config.as_deref(), yes).map(|_| ())
        } else {
            commands::show_config(&config)
        };
    }

    let source = HttpPlanetSource::new(&config)?;
    match command {
        Commands::Browse => commands::browse(source, &config).await,
        Commands::List { pages, all } => {
            let limit = if all {
                PageLimit::All
            } else {
                PageLimit::Pages(pages)
            };
            commands::list(source, &config, limit).await
        }
        Commands::Show {
            index,
            residents,
            pages,
        } => commands::show(source, &config, index, residents, pages).await,
        Commands::Open { path } => commands::open(source, &config, &path).await,
        Commands::Config { .. } => Ok(()),
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DirectoryError>() {
        Some(e) => e.exit_code(),
        None => EXIT_PARTIAL,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e.to_string(), Some("Check --config or run `planets config --init`"));
            std::process::exit(EXIT_FATAL);
        }
    };

    if let Err(e) = logging::init_logging(&config) {
        print_error(&e.to_string(), None);
        std::process::exit(EXIT_FATAL);
    }

    match run(cli, config).await {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            let hint = e
                .downcast_ref::<DirectoryError>()
                .filter(|de| de.is_transient())
                .map(|_| "The API may be temporarily unavailable; try again shortly");
            print_error(&format!("{:#}", e), hint);
            std::process::exit(exit_code_for(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zero_pages_rejected() {
        assert!(Cli::try_parse_from(["planets", "list", "--pages", "0"]).is_err());
        assert!(Cli::try_parse_from(["planets", "show", "3", "--pages", "0"]).is_err());
    }

    #[test]
    fn test_show_pages_parsed() {
        let cli = Cli::try_parse_from(["planets", "show", "12", "--pages", "2", "--residents"])
            .unwrap();
        match cli.command {
            Some(Commands::Show {
                index,
                residents,
                pages,
            }) => {
                assert_eq!(index, 12);
                assert!(residents);
                assert_eq!(pages, Some(2));
            }
            _ => panic!("expected show command"),
        }
    }
}
