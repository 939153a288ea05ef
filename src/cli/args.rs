//! Command-line argument definitions for the UFO processor
//!
//! This module defines the CLI interface using the clap derive API. Both
//! subcommands read one sighting CSV and share the flags that control
//! configuration, logging and output format.

use crate::config::AggregationConfig;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the UFO sighting processor
///
/// Reads a NUFORC sighting export and prints the yearly series, the top
/// reporting locations and the oldest and newest sightings.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ufo-processor",
    version,
    about = "Summarize NUFORC UFO sighting reports by year and location",
    long_about = "Reads the NUFORC UFO sighting CSV export and computes the aggregates a \
                  dashboard needs: sightings per year, the top reporting countries with \
                  their top cities, and the oldest and newest dated sightings."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the yearly series, top locations and extremal sightings
    Summary(SummaryArgs),
    /// Print only the oldest and newest sightings, formatted for display
    Extremes(ExtremesArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct SourceArgs {
    /// Path to the sighting CSV export
    #[arg(value_name = "CSV", help = "Path to the sighting CSV file")]
    pub input: PathBuf,

    /// Path to configuration file
    ///
    /// TOML configuration file for year bounds and ranking limits. If not
    /// specified, ~/.config/ufo-processor/config.toml is used when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Years must be strictly greater than this to count
    #[arg(long = "min-year", value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Years must be strictly less than this to enter the yearly series
    #[arg(long = "max-year", value_name = "YEAR")]
    pub max_year: Option<i32>,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of countries to keep in the location breakdown
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Number of cities to keep per country
    #[arg(long = "top-cities", value_name = "N")]
    pub top_cities: Option<usize>,
}

/// Arguments for the extremes command
#[derive(Debug, Clone, Parser)]
pub struct ExtremesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Commands {
    /// Flags shared by every subcommand
    pub fn source(&self) -> &SourceArgs {
        match self {
            Commands::Summary(args) => &args.source,
            Commands::Extremes(args) => &args.source,
        }
    }
}

impl SourceArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min_year, self.max_year) {
            if min >= max {
                return Err(Error::configuration(format!(
                    "--min-year ({}) must be less than --max-year ({})",
                    min, max
                )));
            }
        }

        Ok(())
    }

    /// Log level requested by the verbosity flags, if any
    ///
    /// `None` means no flag was given and the configured level applies.
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }

    /// Apply the year bound flags on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut AggregationConfig) {
        if let Some(min) = self.min_year {
            config.min_year_exclusive = min;
        }
        if let Some(max) = self.max_year {
            config.max_year_exclusive = max;
        }
    }
}

impl SummaryArgs {
    /// Validate the summary command arguments
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;

        if self.top == Some(0) {
            return Err(Error::configuration("--top must be at least 1"));
        }
        if self.top_cities == Some(0) {
            return Err(Error::configuration("--top-cities must be at least 1"));
        }

        Ok(())
    }

    /// Apply the ranking limit flags on top of a loaded configuration
    pub fn apply_ranking_overrides(&self, config: &mut AggregationConfig) {
        if let Some(top) = self.top {
            config.top_locations = top;
        }
        if let Some(top_cities) = self.top_cities {
            config.top_cities = top_cities;
        }
    }
}
