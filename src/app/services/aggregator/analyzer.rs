//! Sighting analyzer: the aggregation entry point
//!
//! Bundles the aggregation configuration with an optional observer and
//! exposes the operations the presentation layer calls. Every call
//! recomputes from the records it is given; nothing is cached between calls.

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use super::extremal::{find_extremal_sightings, find_newest_sighting, find_oldest_sighting};
use super::location::LocationCounts;
use super::observer::{AggregationObserver, Checkpoint};
use super::year::aggregate_by_year;
use crate::Result;
use crate::app::models::{ChartData, ExtremalSightings, RawRecord};
use crate::app::services::csv_parser::{CsvParser, ParseResult, load_csv_file};
use crate::config::AggregationConfig;

/// Everything the dashboard shows, computed from one record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary<'a> {
    /// Records handed to the analyzer
    pub total_records: usize,
    /// Records that made it into the yearly series
    pub dated_records: usize,
    #[serde(flatten)]
    pub chart_data: ChartData,
    #[serde(flatten)]
    pub extremes: ExtremalSightings<'a>,
}

/// Aggregation facade over a configuration and an optional observer
#[derive(Clone, Default)]
pub struct SightingAnalyzer {
    config: AggregationConfig,
    observer: Option<Arc<dyn AggregationObserver>>,
}

impl std::fmt::Debug for SightingAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SightingAnalyzer")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl SightingAnalyzer {
    /// Create an analyzer with the given configuration
    pub fn new(config: AggregationConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Attach an observer to receive pipeline checkpoints
    pub fn with_observer(mut self, observer: impl AggregationObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Active configuration
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    fn notify(&self, checkpoint: Checkpoint) {
        if let Some(observer) = &self.observer {
            observer.checkpoint(&checkpoint);
        }
    }

    /// Parse raw CSV text and report the row count
    pub fn parse(&self, content: &str) -> Result<ParseResult> {
        let result = CsvParser::new().parse_str(content)?;
        self.report_parsed(&result);
        Ok(result)
    }

    /// Parse raw CSV bytes and report the row count
    pub fn parse_bytes(&self, content: &[u8]) -> Result<ParseResult> {
        let result = CsvParser::new().parse_bytes(content)?;
        self.report_parsed(&result);
        Ok(result)
    }

    /// Load and parse a CSV file and report the row count
    pub async fn load(&self, path: &Path) -> Result<ParseResult> {
        let result = load_csv_file(path).await?;
        self.report_parsed(&result);
        Ok(result)
    }

    fn report_parsed(&self, result: &ParseResult) {
        self.notify(Checkpoint::RowsParsed {
            records: result.records.len(),
            blank_rows_skipped: result.stats.blank_rows_skipped,
            ragged_rows: result.stats.ragged_rows,
        });
    }

    /// Yearly series and location breakdown in one result
    pub fn process_for_charts(&self, records: &[RawRecord]) -> ChartData {
        let year_data = aggregate_by_year(records, &self.config);
        self.notify(Checkpoint::YearBucketsComputed {
            buckets: year_data.len(),
            dated_records: year_data.iter().map(|bucket| bucket.sightings).sum(),
        });

        let location_counts = LocationCounts::from_records(records);
        let distinct_countries = location_counts.country_count();
        let located_records = location_counts.contributing_records();
        let location_data = location_counts.into_ranked(&self.config);
        self.notify(Checkpoint::LocationBucketsComputed {
            buckets: location_data.len(),
            distinct_countries,
            located_records,
        });

        ChartData {
            year_data,
            location_data,
        }
    }

    /// Record with the earliest valid sighting date
    pub fn oldest_sighting<'a>(&self, records: &'a [RawRecord]) -> Option<&'a RawRecord> {
        find_oldest_sighting(records, &self.config)
    }

    /// Record with the latest valid sighting date
    pub fn newest_sighting<'a>(&self, records: &'a [RawRecord]) -> Option<&'a RawRecord> {
        find_newest_sighting(records, &self.config)
    }

    /// Earliest and latest sightings together
    pub fn extremal_sightings<'a>(&self, records: &'a [RawRecord]) -> ExtremalSightings<'a> {
        let extremes = find_extremal_sightings(records, &self.config);
        self.notify(Checkpoint::ExtremalResolved {
            oldest_found: extremes.oldest.is_some(),
            newest_found: extremes.newest.is_some(),
        });
        extremes
    }

    /// Charts and extremes for one record set
    pub fn summarize<'a>(&self, records: &'a [RawRecord]) -> AnalysisSummary<'a> {
        let chart_data = self.process_for_charts(records);
        let extremes = self.extremal_sightings(records);

        AnalysisSummary {
            total_records: records.len(),
            dated_records: chart_data.total_year_sightings(),
            chart_data,
            extremes,
        }
    }
}
