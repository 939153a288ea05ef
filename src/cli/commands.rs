//! Command implementations for the UFO processor CLI
//!
//! Each subcommand loads configuration, initializes logging, reads the CSV
//! once through the analyzer and renders the result as text or JSON.

use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::app::services::aggregator::{AnalysisSummary, SightingAnalyzer, TracingObserver};
use crate::app::services::csv_parser::ParseStats;
use crate::app::services::formatter::{FormattedSighting, format_location};
use crate::cli::args::{Commands, ExtremesArgs, OutputFormat, SourceArgs, SummaryArgs};
use crate::config::Config;
use crate::{Error, ExtremalSightings, Result};

/// Width of the longest bar in the yearly chart
const BAR_WIDTH: usize = 40;

/// Main command runner
pub async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Summary(args) => run_summary(args).await,
        Commands::Extremes(args) => run_extremes(args).await,
    }
}

/// Set up structured logging to stderr
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `level`.
pub fn setup_logging(level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ufo_processor={}", level)));

    let result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

/// Load layered configuration for a command
///
/// An explicit `--config` file is required to exist; the default location is
/// only read when present. Environment overrides apply on top of either.
pub fn load_configuration(source: &SourceArgs) -> Result<Config> {
    let config_file: Option<PathBuf> = match &source.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    };

    let mut config = Config::load_layered(config_file.as_deref())?;
    source.apply_overrides(&mut config.aggregation);
    Ok(config)
}

fn init_command(source: &SourceArgs, config: &Config) -> Result<()> {
    let level = source
        .log_level_override()
        .unwrap_or(config.logging.level.as_str());
    setup_logging(level, source.quiet)
}

async fn run_summary(args: SummaryArgs) -> anyhow::Result<()> {
    args.validate()?;
    let mut config = load_configuration(&args.source)?;
    args.apply_ranking_overrides(&mut config.aggregation);
    config.validate()?;
    init_command(&args.source, &config)?;

    info!("Summarizing sightings from {}", args.source.input.display());
    let analyzer = SightingAnalyzer::new(config.aggregation).with_observer(TracingObserver);
    let parsed = analyzer
        .load(&args.source.input)
        .await
        .with_context(|| format!("Failed to load sightings from '{}'", args.source.input.display()))?;

    let summary = analyzer.summarize(&parsed.records);
    match args.source.format {
        OutputFormat::Human => println!("{}", render_summary(&summary, &parsed.stats)),
        OutputFormat::Json => println!("{}", to_json(&summary)?),
    }
    Ok(())
}

async fn run_extremes(args: ExtremesArgs) -> anyhow::Result<()> {
    args.source.validate()?;
    let config = load_configuration(&args.source)?;
    config.validate()?;
    init_command(&args.source, &config)?;

    let analyzer = SightingAnalyzer::new(config.aggregation).with_observer(TracingObserver);
    let parsed = analyzer
        .load(&args.source.input)
        .await
        .with_context(|| format!("Failed to load sightings from '{}'", args.source.input.display()))?;

    let report = ExtremesReport::from(analyzer.extremal_sightings(&parsed.records));
    match args.source.format {
        OutputFormat::Human => println!("{}", render_extremes(&report)),
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to serialize report", e))
}

/// Oldest and newest sightings after display formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtremesReport {
    pub oldest: Option<FormattedSighting>,
    pub newest: Option<FormattedSighting>,
}

impl From<ExtremalSightings<'_>> for ExtremesReport {
    fn from(extremes: ExtremalSightings<'_>) -> Self {
        Self {
            oldest: extremes.oldest.map(FormattedSighting::from_record),
            newest: extremes.newest.map(FormattedSighting::from_record),
        }
    }
}

/// Human-readable summary report
pub fn render_summary(summary: &AnalysisSummary<'_>, stats: &ParseStats) -> String {
    let mut lines = vec![
        format!("{}", "UFO Sighting Summary".bright_green().bold()),
        format!("  {} {}", "Input:".bright_cyan(), stats.summary()),
        format!(
            "  {} {} of {}",
            "Dated sightings:".bright_cyan(),
            summary.dated_records.to_string().bright_white().bold(),
            summary.total_records
        ),
        String::new(),
        format!("{}", "Sightings per year".bright_green().bold()),
    ];

    let year_data = &summary.chart_data.year_data;
    if year_data.is_empty() {
        lines.push(format!("  {}", "no dated sightings".dimmed()));
    }
    let peak = year_data.iter().map(|b| b.sightings).max().unwrap_or(0);
    for bucket in year_data {
        lines.push(format!(
            "  {} {:>6} {}",
            bucket.year.to_string().bright_white(),
            bucket.sightings,
            bar(bucket.sightings, peak).bright_blue()
        ));
    }

    lines.push(String::new());
    lines.push(format!("{}", "Top locations".bright_green().bold()));
    if summary.chart_data.location_data.is_empty() {
        lines.push(format!("  {}", "no located sightings".dimmed()));
    }
    for (rank, location) in summary.chart_data.location_data.iter().enumerate() {
        lines.push(format!(
            "  {}. {} {}",
            rank + 1,
            location.location.bright_yellow().bold(),
            location.sightings
        ));
        for city in &location.cities {
            lines.push(format!(
                "       {} {}",
                format_location(&city.city),
                city.sightings.to_string().dimmed()
            ));
        }
    }

    lines.push(String::new());
    lines.extend(extremes_lines(&ExtremesReport::from(summary.extremes)));
    lines.join("\n")
}

/// Human-readable oldest and newest sightings
pub fn render_extremes(report: &ExtremesReport) -> String {
    extremes_lines(report).join("\n")
}

fn extremes_lines(report: &ExtremesReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (title, sighting) in [
        ("Oldest sighting", &report.oldest),
        ("Newest sighting", &report.newest),
    ] {
        lines.push(format!("{}", title.bright_green().bold()));
        match sighting {
            Some(sighting) => {
                lines.push(format!("  {} {}", "Date:".bright_cyan(), sighting.date));
                lines.push(format!("  {} {}", "Location:".bright_cyan(), sighting.location));
                lines.push(format!("  {} {}", "Shape:".bright_cyan(), sighting.shape));
                if !sighting.description.is_empty() {
                    lines.push(format!("  {}", sighting.description.italic()));
                }
            }
            None => lines.push(format!("  {}", "none found".dimmed())),
        }
    }
    lines
}

fn bar(count: usize, peak: usize) -> String {
    if peak == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(peak);
    "#".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawRecord;
    use crate::config::AggregationConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn scenario() -> Vec<RawRecord> {
        vec![
            RawRecord::from_pairs([
                ("timestamp", "1/1/1950 20:00"),
                ("city", "area51 us"),
                ("country", "us"),
                ("shape", "disk."),
                ("comments", "Bright light&#44 no sound"),
            ]),
            RawRecord::from_pairs([
                ("timestamp", "6/1/2020 22:00"),
                ("city", "roswell us"),
                ("country", "us"),
                ("shape", "light"),
                ("comments", ""),
            ]),
        ]
    }

    fn source_with_config(config_file: Option<PathBuf>) -> SourceArgs {
        SourceArgs {
            input: PathBuf::from("sightings.csv"),
            config_file,
            min_year: None,
            max_year: Some(2030),
            format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_load_configuration_layers_file_and_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[aggregation]\nmin_year_exclusive = 1940\ntop_cities = 2").unwrap();

        let config = load_configuration(&source_with_config(Some(file.path().to_path_buf())))
            .unwrap();

        assert_eq!(config.aggregation.min_year_exclusive, 1940);
        assert_eq!(config.aggregation.max_year_exclusive, 2030);
        assert_eq!(config.aggregation.top_cities, 2);
        assert_eq!(config.aggregation.top_locations, 5);
    }

    #[test]
    fn test_load_configuration_missing_explicit_file() {
        let result = load_configuration(&source_with_config(Some(PathBuf::from(
            "/nonexistent/ufo/config.toml",
        ))));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_extremes_report_formats_records() {
        let records = scenario();
        let analyzer = SightingAnalyzer::new(AggregationConfig::default());

        let report = ExtremesReport::from(analyzer.extremal_sightings(&records));
        let oldest = report.oldest.unwrap();
        let newest = report.newest.unwrap();

        assert_eq!(oldest.location, "Area51, Us");
        assert_eq!(oldest.shape, "Disk.");
        assert_eq!(oldest.description, "Bright light, no sound");
        assert_eq!(newest.date, "6/1/2020 22:00");
    }

    #[test]
    fn test_extremes_report_json_with_no_data() {
        let report = ExtremesReport::from(ExtremalSightings::default());
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["oldest"].is_null());
        assert!(value["newest"].is_null());
        assert!(render_extremes(&report).contains("none found"));
    }

    #[test]
    fn test_render_summary_mentions_every_section() {
        let records = scenario();
        let analyzer = SightingAnalyzer::new(AggregationConfig::default());
        let summary = analyzer.summarize(&records);
        let stats = ParseStats {
            total_rows: 2,
            records_parsed: 2,
            ..ParseStats::default()
        };

        let text = render_summary(&summary, &stats);
        assert!(text.contains("Sightings per year"));
        assert!(text.contains("1950"));
        assert!(text.contains("2020"));
        assert!(text.contains("Top locations"));
        assert!(text.contains("Roswell, Us"));
        assert!(text.contains("Bright light, no sound"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).len(), BAR_WIDTH);
        assert_eq!(bar(1, 10).len(), 4);
        assert_eq!(bar(1, 1000).len(), 1);
    }
}
