//! UFO Processor Library
//!
//! A Rust library for turning the NUFORC UFO sighting export into the small
//! aggregates a dashboard needs.
//!
//! This library provides tools for:
//! - Parsing the raw sighting CSV into ordered field records
//! - Counting sightings per year over a validated date range
//! - Ranking countries and their cities by number of reports
//! - Finding the earliest and latest dated sightings
//! - Normalizing location, shape and comment text for display

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod csv_parser;
        pub mod formatter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    ChartData, CityBucket, ExtremalSightings, LocationBucket, RawRecord, YearBucket,
};
pub use app::services::aggregator::SightingAnalyzer;
pub use config::Config;

/// Result type alias for the UFO processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for UFO processing operations
///
/// Only whole-call failures live here. A record with a bad date or a missing
/// country is never an error; it is left out of the aggregate it cannot join.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Raw text could not be decoded into records
    #[error("CSV parse error in '{origin}': {message}")]
    Parse {
        origin: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parse error with context
    pub fn parse(origin: impl Into<String>, message: impl Into<String>, source: csv::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a parse error for structurally broken input the decoder accepted
    pub fn malformed(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// True when the error came from decoding the raw dataset
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Parse {
            origin: "unknown".to_string(),
            message: "CSV decoding failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
