//! Yearly sighting series
//!
//! Counts records per calendar year of their resolved sighting date. Records
//! without a parseable date, or dated outside the configured open interval,
//! are left out without complaint.

use chrono::Datelike;
use std::collections::BTreeMap;

use super::field_resolver::resolve_sighting_datetime;
use crate::app::models::{RawRecord, YearBucket};
use crate::config::AggregationConfig;

/// Year of a record if it belongs in the yearly series
pub fn series_year(record: &RawRecord, config: &AggregationConfig) -> Option<i32> {
    let year = resolve_sighting_datetime(record)?.year();
    config.accepts_series_year(year).then_some(year)
}

/// Count valid records per year, ascending by year
pub fn aggregate_by_year(records: &[RawRecord], config: &AggregationConfig) -> Vec<YearBucket> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();

    for year in records.iter().filter_map(|record| series_year(record, config)) {
        *counts.entry(year).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(year, sightings)| YearBucket { year, sightings })
        .collect()
}
