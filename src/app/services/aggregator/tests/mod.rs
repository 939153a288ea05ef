//! Test utilities for aggregator testing
//!
//! Record builders shared by the aggregator test modules.

use crate::app::models::RawRecord;


/// Record with the three fields the aggregators read
pub fn sighting(timestamp: &str, city: &str, country: &str) -> RawRecord {
    RawRecord::from_pairs([
        ("timestamp", timestamp),
        ("city", city),
        ("country", country),
    ])
}

/// Record with only a date
pub fn dated(timestamp: &str) -> RawRecord {
    RawRecord::from_pairs([("timestamp", timestamp)])
}

/// Record with only a location
pub fn located(city: &str, country: &str) -> RawRecord {
    RawRecord::from_pairs([("city", city), ("country", country)])
}

/// The three-row scenario: two valid US sightings and one undated French one
pub fn scenario_records() -> Vec<RawRecord> {
    vec![
        sighting("1/1/1950 20:00", "area51 us", "us"),
        sighting("6/1/2020 22:00", "roswell us", "us"),
        sighting("not-a-date", "x", "fr"),
    ]
}
