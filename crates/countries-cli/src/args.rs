use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use countries_cli::logging::Verbosity;

/// CLI arguments for the countries directory
#[derive(Debug, Parser)]
#[command(
    name = "countries",
    version,
    about = "Browse a directory of countries: search, filter by region, inspect neighbours"
)]
pub struct CliArgs {
    /// Dataset location: a JSON file (optionally .gz) or an http(s) URL.
    /// Overrides `data.location` from the configuration.
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<String>,

    /// Configuration file (default: ./countries.toml)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Print view models as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries, optionally filtered
    List {
        /// Case-insensitive substring of the country name
        #[arg(short, long, default_value = "")]
        search: String,

        /// One of Africa, Americas, Asia, Europe, Oceania (case-insensitive)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Show the detail page of a country by name (case-insensitive)
    Country {
        /// Country name, e.g. "France" or "united states of america"
        name: String,
    },

    /// Render a navigational path, e.g. / or /country/Sweden
    Open {
        /// Path to resolve
        path: String,
    },

    /// Show record counts per region
    Regions,

    /// Interactive session reading commands from stdin
    Browse,
}
