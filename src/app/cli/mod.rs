//! CLI Adapter.

mod countries;
mod download;
mod load;

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::app::api::CountrySelector;
use crate::app::config::load_settings;
use crate::app::telemetry::init_tracing;
use crate::domain::{AppError, Settings};

/// Country loaded when none is given on the command line.
pub const DEFAULT_ISO3: &str = "bgd";

#[derive(Parser)]
#[command(name = "codab")]
#[command(version)]
#[command(
    about = "Resolve country configurations and load administrative boundaries (CodAB) from HDX",
    long_about = None
)]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List embedded country configurations
    #[clap(visible_alias = "c")]
    Countries {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Download the raw CodAB archive for a country
    #[clap(visible_alias = "d")]
    Download {
        #[command(flatten)]
        country: CountryArgs,
        /// Download again even if the archive is cached
        #[arg(long)]
        clobber: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Load an administrative boundary layer
    #[clap(visible_alias = "l")]
    Load {
        #[command(flatten)]
        country: CountryArgs,
        /// Admin level (0 is the national outline)
        #[arg(short = 'a', long, default_value_t = 0, conflicts_with = "custom")]
        admin_level: u8,
        /// Load a custom layer by its position in the country config
        #[arg(long, value_name = "INDEX")]
        custom: Option<usize>,
        /// Fail instead of downloading a missing archive
        #[arg(long)]
        offline: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct CountryArgs {
    /// ISO3 country code
    #[arg(default_value = DEFAULT_ISO3, conflicts_with = "country_config")]
    iso3: String,
    /// Read the country configuration from a YAML file instead
    #[arg(long, value_name = "FILE")]
    country_config: Option<PathBuf>,
}

impl CountryArgs {
    fn selector(self) -> CountrySelector {
        match self.country_config {
            Some(path) => CountrySelector::File(path),
            None => CountrySelector::Iso3(self.iso3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Countries { format } => countries::run_countries(format),
        Commands::Download { country, clobber, format } => {
            let settings = settings(cli.config)?;
            download::run_download(&settings, country.selector(), clobber, format)
        }
        Commands::Load { country, admin_level, custom, offline, format } => {
            let settings = settings(cli.config)?;
            load::run_load(&settings, country.selector(), admin_level, custom, offline, format)
        }
    }
}

fn settings(path: Option<PathBuf>) -> Result<Settings, AppError> {
    load_settings(path.as_deref())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{rendered}");
    Ok(())
}
