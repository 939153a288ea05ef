//! Parsing statistics and result structures for CSV ingestion
//!
//! Tracks how much of the raw text became records and how much of it had
//! to be tolerated (blank rows, ragged rows).

use crate::app::models::RawRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Records in input order
    pub records: Vec<RawRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Take ownership of the records, discarding the statistics
    pub fn into_records(self) -> Vec<RawRecord> {
        self.records
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Data rows seen after the header, including skipped ones
    pub total_rows: usize,

    /// Rows turned into records
    pub records_parsed: usize,

    /// Rows with no non-whitespace cell
    pub blank_rows_skipped: usize,

    /// Records whose cell count differed from the header width
    pub ragged_rows: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            records_parsed: 0,
            blank_rows_skipped: 0,
            ragged_rows: 0,
        }
    }

    /// Share of parsed records whose width drifted from the header, as a percentage
    pub fn ragged_rate(&self) -> f64 {
        if self.records_parsed == 0 {
            0.0
        } else {
            (self.ragged_rows as f64 / self.records_parsed as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows -> {} records ({} blank skipped, {} ragged)",
            self.total_rows, self.records_parsed, self.blank_rows_skipped, self.ragged_rows
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
