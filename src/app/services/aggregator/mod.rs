//! Aggregation of parsed sighting records
//!
//! Pure transformations from a slice of [`RawRecord`] to the structures the
//! dashboard draws. Nothing here mutates its input or keeps state between
//! calls, so the same records always give the same output.
//!
//! # Architecture
//!
//! - [`field_resolver`] - Named-then-positional field lookup shared by all aggregators
//! - [`date_parser`] - Locale-independent timestamp parsing
//! - [`year`] - Sightings per year, ascending
//! - [`location`] - Top countries with their top cities
//! - [`ranking`] - Insertion-ordered counter with stable top-N ranking
//! - [`extremal`] - Earliest and latest valid sightings
//! - [`observer`] - Checkpoint hook for callers that want visibility
//! - [`analyzer`] - Facade tying configuration, observer and aggregators together
//!
//! # Validity
//!
//! A record whose date cannot be parsed, or whose country is missing, is not
//! an error. It is simply absent from the aggregate that needs the missing
//! field. An input where every record is invalid produces the same output as
//! an empty input.
//!
//! # Example Usage
//!
//! ```rust
//! use ufo_processor::app::services::aggregator::SightingAnalyzer;
//! use ufo_processor::config::AggregationConfig;
//!
//! # fn example() -> ufo_processor::Result<()> {
//! let analyzer = SightingAnalyzer::new(AggregationConfig::default());
//! let parsed = analyzer.parse("timestamp,city,country\n1/1/1950 20:00,area51 us,us\n")?;
//!
//! let charts = analyzer.process_for_charts(&parsed.records);
//! assert_eq!(charts.year_data[0].year, 1950);
//! assert_eq!(charts.location_data[0].location, "US");
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod date_parser;
pub mod extremal;
pub mod field_resolver;
pub mod location;
pub mod observer;
pub mod ranking;
pub mod year;

#[cfg(test)]
pub mod tests;

use crate::app::models::{ChartData, RawRecord};
use crate::config::AggregationConfig;

// Re-export main types for easy access
pub use analyzer::{AnalysisSummary, SightingAnalyzer};
pub use extremal::{find_extremal_sightings, find_newest_sighting, find_oldest_sighting};
pub use location::aggregate_by_location;
pub use observer::{AggregationObserver, Checkpoint, TracingObserver};
pub use year::aggregate_by_year;

/// Yearly series and location breakdown with the given configuration
pub fn process_data_for_charts(records: &[RawRecord], config: &AggregationConfig) -> ChartData {
    ChartData {
        year_data: aggregate_by_year(records, config),
        location_data: aggregate_by_location(records, config),
    }
}
