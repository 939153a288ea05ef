//! Checkpoint notifications for the aggregation pipeline
//!
//! The aggregators never log on their own. A caller that wants visibility
//! injects an [`AggregationObserver`]; the analyzer reports to it when rows
//! have been parsed and when each aggregate has been computed.

use tracing::{debug, info};

/// A point in the pipeline the observer is told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkpoint {
    /// Raw text decoded into records
    RowsParsed {
        records: usize,
        blank_rows_skipped: usize,
        ragged_rows: usize,
    },
    /// Yearly series built
    YearBucketsComputed {
        buckets: usize,
        dated_records: usize,
    },
    /// Location breakdown built
    LocationBucketsComputed {
        buckets: usize,
        distinct_countries: usize,
        located_records: usize,
    },
    /// Earliest and latest sightings looked up
    ExtremalResolved { oldest_found: bool, newest_found: bool },
}

/// Receiver of pipeline checkpoints
pub trait AggregationObserver: Send + Sync {
    fn checkpoint(&self, checkpoint: &Checkpoint);
}

impl<F> AggregationObserver for F
where
    F: Fn(&Checkpoint) + Send + Sync,
{
    fn checkpoint(&self, checkpoint: &Checkpoint) {
        self(checkpoint)
    }
}

/// Observer that forwards checkpoints to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AggregationObserver for TracingObserver {
    fn checkpoint(&self, checkpoint: &Checkpoint) {
        match *checkpoint {
            Checkpoint::RowsParsed {
                records,
                blank_rows_skipped,
                ragged_rows,
            } => info!(records, blank_rows_skipped, ragged_rows, "Rows parsed"),
            Checkpoint::YearBucketsComputed {
                buckets,
                dated_records,
            } => info!(buckets, dated_records, "Year buckets computed"),
            Checkpoint::LocationBucketsComputed {
                buckets,
                distinct_countries,
                located_records,
            } => info!(
                buckets,
                distinct_countries,
                located_records,
                "Location buckets computed"
            ),
            Checkpoint::ExtremalResolved {
                oldest_found,
                newest_found,
            } => debug!(oldest_found, newest_found, "Extremal sightings resolved"),
        }
    }
}
