//! Core data models for UFO sighting aggregation
//!
//! Defines the raw record produced by the CSV parser and the aggregate
//! structures handed to the presentation layer. Aggregates serialize with the
//! camelCase field names the dashboard consumes (`yearData`, `locationData`).

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// One row of the sighting dataset as field name to raw text
///
/// Fields keep the order in which the header declared them, so positional
/// lookups stay meaningful when a header is missing or reordered. Values are
/// stored exactly as decoded; trimming and case folding happen in the
/// aggregators that need them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create a record with room for `capacity` fields
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Build a record from (name, value) pairs in declaration order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Append a field
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Value of the first field with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value at a 0-based declaration position
    pub fn get_at(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(_, value)| value.as_str())
    }

    /// Whether a field with this name exists (even if empty)
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| field == name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// (name, value) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Serialize for RawRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Sighting count for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearBucket {
    pub year: i32,
    pub sightings: usize,
}

/// Sighting count for one city inside a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityBucket {
    pub city: String,
    pub sightings: usize,
}

/// Sighting count for one normalized country code with its top cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationBucket {
    /// Trimmed, upper-cased country code
    pub location: String,
    pub sightings: usize,
    /// Highest-count cities for this country, descending
    pub cities: Vec<CityBucket>,
}

/// Combined yearly and location aggregates for the charts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Ascending by year, one entry per distinct valid year
    pub year_data: Vec<YearBucket>,
    /// At most the configured number of countries, descending by count
    pub location_data: Vec<LocationBucket>,
}

impl ChartData {
    /// Total sightings represented in the yearly series
    pub fn total_year_sightings(&self) -> usize {
        self.year_data.iter().map(|bucket| bucket.sightings).sum()
    }

    /// True when neither series has any entry
    pub fn is_empty(&self) -> bool {
        self.year_data.is_empty() && self.location_data.is_empty()
    }
}

/// Earliest and latest validly dated records, borrowed from the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtremalSightings<'a> {
    #[serde(rename = "oldestSighting")]
    pub oldest: Option<&'a RawRecord>,
    #[serde(rename = "newestSighting")]
    pub newest: Option<&'a RawRecord>,
}

impl ExtremalSightings<'_> {
    /// True when no valid record was found
    pub fn is_empty(&self) -> bool {
        self.oldest.is_none() && self.newest.is_none()
    }
}
