//! Country and city breakdown
//!
//! A record joins the breakdown when it resolves to a non-empty country code
//! that is not the header token. Date validity plays no part here. Each
//! contributing record also counts toward its city, when it has one, scoped
//! to that country.

use std::collections::HashMap;

use super::field_resolver::{resolve_city, resolve_country_code};
use super::ranking::RankedCounter;
use crate::app::models::{CityBucket, LocationBucket, RawRecord};
use crate::config::AggregationConfig;

/// Per-country and per-country-per-city counts in first-seen order
#[derive(Debug, Clone, Default)]
pub struct LocationCounts {
    countries: RankedCounter,
    cities: HashMap<String, RankedCounter>,
}

impl LocationCounts {
    /// Count every contributing record
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.add(record);
        }
        counts
    }

    /// Count one record; returns false when it does not contribute
    pub fn add(&mut self, record: &RawRecord) -> bool {
        let Some(country) = resolve_country_code(record) else {
            return false;
        };

        self.countries.increment(&country);
        let cities = self.cities.entry(country).or_default();
        if let Some(city) = resolve_city(record) {
            cities.increment(city);
        }
        true
    }

    /// Number of distinct countries seen
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Records that contributed a country
    pub fn contributing_records(&self) -> usize {
        self.countries.total()
    }

    /// Rank countries and their cities, keeping the configured number of each
    pub fn into_ranked(mut self, config: &AggregationConfig) -> Vec<LocationBucket> {
        self.countries
            .into_ranked(config.top_locations)
            .into_iter()
            .map(|(location, sightings)| {
                let cities = self
                    .cities
                    .remove(&location)
                    .map(|counter| {
                        counter
                            .into_ranked(config.top_cities)
                            .into_iter()
                            .map(|(city, sightings)| CityBucket { city, sightings })
                            .collect()
                    })
                    .unwrap_or_default();

                LocationBucket {
                    location,
                    sightings,
                    cities,
                }
            })
            .collect()
    }
}

/// Top countries by sighting count, each with its top cities
pub fn aggregate_by_location(
    records: &[RawRecord],
    config: &AggregationConfig,
) -> Vec<LocationBucket> {
    LocationCounts::from_records(records).into_ranked(config)
}
