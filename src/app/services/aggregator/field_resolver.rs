//! Named-then-positional field resolution
//!
//! The export's header is not always trustworthy: columns get renamed,
//! reordered or dropped, and occasionally the header row itself shows up as
//! data. Every aggregator reads fields through a [`FieldChain`] so the
//! fallback order lives in exactly one place.

use chrono::NaiveDateTime;

use super::date_parser::parse_sighting_datetime;
use crate::app::models::RawRecord;
use crate::constants::{
    CITY_FIELD_NAME, COUNTRY_FIELD_NAME, COUNTRY_HEADER_TOKEN, DATE_FIELD_NAMES, positions,
};

/// Lookup order for one logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChain {
    /// Field names tried first, in order
    pub names: &'static [&'static str],
    /// Declaration position used when no name yields a value
    pub position: usize,
}

/// Sighting date: `timestamp`, `datetime`, then the first column
pub const DATE_CHAIN: FieldChain = FieldChain {
    names: DATE_FIELD_NAMES,
    position: positions::DATE,
};

/// Country code: `country`, then the fourth column
pub const COUNTRY_CHAIN: FieldChain = FieldChain {
    names: &[COUNTRY_FIELD_NAME],
    position: positions::COUNTRY,
};

/// City: `city`, then the second column
pub const CITY_CHAIN: FieldChain = FieldChain {
    names: &[CITY_FIELD_NAME],
    position: positions::CITY,
};

impl FieldChain {
    /// Resolve the trimmed, non-empty value for this field
    pub fn resolve<'a>(&self, record: &'a RawRecord) -> Option<&'a str> {
        self.names
            .iter()
            .filter_map(|name| record.get(name))
            .chain(record.get_at(self.position))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// Resolved and parsed sighting date of a record
pub fn resolve_sighting_datetime(record: &RawRecord) -> Option<NaiveDateTime> {
    DATE_CHAIN.resolve(record).and_then(parse_sighting_datetime)
}

/// Normalized country code, or `None` when the record cannot be located
///
/// The code is trimmed and upper-cased. Because the comparison with the
/// header token happens after upper-casing, `country`, `Country` and
/// `COUNTRY` are all rejected.
pub fn resolve_country_code(record: &RawRecord) -> Option<String> {
    let code = COUNTRY_CHAIN.resolve(record)?.to_uppercase();
    (code != COUNTRY_HEADER_TOKEN).then_some(code)
}

/// Trimmed city value, case preserved
///
/// Records without a usable `city` field take whatever sits in the second
/// column instead, even when that column holds another field. A record
/// shaped `timestamp, country` therefore reports its country as the city.
pub fn resolve_city(record: &RawRecord) -> Option<&str> {
    CITY_CHAIN.resolve(record)
}
