//! Earliest and latest sighting lookup
//!
//! Two independent scans over the same records, each keeping the first
//! record that strictly beats the current best. Only the lower year bound
//! applies here; the yearly series' upper bound does not.

use chrono::{Datelike, NaiveDateTime};

use super::field_resolver::resolve_sighting_datetime;
use crate::app::models::{ExtremalSightings, RawRecord};
use crate::config::AggregationConfig;

/// Record with the earliest valid sighting date
pub fn find_oldest_sighting<'a>(
    records: &'a [RawRecord],
    config: &AggregationConfig,
) -> Option<&'a RawRecord> {
    scan_extremal(records, config, |candidate, best| candidate < best)
}

/// Record with the latest valid sighting date
pub fn find_newest_sighting<'a>(
    records: &'a [RawRecord],
    config: &AggregationConfig,
) -> Option<&'a RawRecord> {
    scan_extremal(records, config, |candidate, best| candidate > best)
}

/// Both ends of the dated range
pub fn find_extremal_sightings<'a>(
    records: &'a [RawRecord],
    config: &AggregationConfig,
) -> ExtremalSightings<'a> {
    ExtremalSightings {
        oldest: find_oldest_sighting(records, config),
        newest: find_newest_sighting(records, config),
    }
}

fn scan_extremal<'a, F>(
    records: &'a [RawRecord],
    config: &AggregationConfig,
    beats: F,
) -> Option<&'a RawRecord>
where
    F: Fn(NaiveDateTime, NaiveDateTime) -> bool,
{
    let mut best: Option<(NaiveDateTime, &'a RawRecord)> = None;

    for record in records {
        let Some(when) = resolve_sighting_datetime(record) else {
            continue;
        };
        if !config.accepts_extremal_year(when.year()) {
            continue;
        }

        match best {
            Some((current, _)) if !beats(when, current) => {}
            _ => best = Some((when, record)),
        }
    }

    best.map(|(_, record)| record)
}
