//! Application constants for the UFO processor
//!
//! Field names, positional fallbacks, default bounds and display limits
//! used throughout the ingestion and aggregation pipeline.

// =============================================================================
// Field Names and Positional Fallbacks
// =============================================================================

/// Field names tried, in order, when resolving a record's sighting date.
///
/// `datetime` is the column name used by the NUFORC export.
pub const DATE_FIELD_NAMES: &[&str] = &["timestamp", "datetime"];

/// Field name holding the two-letter country code
pub const COUNTRY_FIELD_NAME: &str = "country";

/// Field name holding the free-text city, usually "<city> <country-code>"
pub const CITY_FIELD_NAME: &str = "city";

/// Field name holding the reported object shape
pub const SHAPE_FIELD_NAME: &str = "shape";

/// Field name holding the witness description
pub const COMMENTS_FIELD_NAME: &str = "comments";

/// Positional fallbacks for data whose header does not name the field
pub mod positions {
    /// Date is the first column of the export
    pub const DATE: usize = 0;

    /// City is the second column of the export
    pub const CITY: usize = 1;

    /// Country is the fourth column (after datetime, city, state)
    pub const COUNTRY: usize = 3;
}

/// Header token that marks a header row misread as data
pub const COUNTRY_HEADER_TOKEN: &str = "COUNTRY";

// =============================================================================
// Validity Bounds
// =============================================================================

/// Years at or below this value are rejected
pub const DEFAULT_MIN_YEAR_EXCLUSIVE: i32 = 1900;

/// Years at or above this value are rejected by the yearly series
pub const DEFAULT_MAX_YEAR_EXCLUSIVE: i32 = 2025;

// =============================================================================
// Ranking Limits
// =============================================================================

/// Number of countries kept in the location breakdown
pub const DEFAULT_TOP_LOCATIONS: usize = 5;

/// Number of cities kept under each country
pub const DEFAULT_TOP_CITIES: usize = 5;

// =============================================================================
// Configuration
// =============================================================================

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "UFO_";

/// Directory name used under the user's config directory
pub const CONFIG_DIR_NAME: &str = "ufo-processor";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
