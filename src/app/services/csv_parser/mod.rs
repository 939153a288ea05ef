//! CSV parser for the NUFORC sighting export
//!
//! Turns the raw delimited text into [`RawRecord`](crate::app::models::RawRecord)
//! values keyed by the header row. The parser is tolerant of the things the
//! export gets wrong (blank lines, rows with too few or too many cells) and
//! strict about the things it cannot recover from: a decoding failure aborts
//! the whole call with [`Error::Parse`](crate::Error::Parse).
//!
//! ## Architecture
//!
//! - [`parser`] - Reader setup, header handling and record construction
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ufo_processor::app::services::csv_parser::CsvParser;
//!
//! # fn example() -> ufo_processor::Result<()> {
//! let text = "datetime,city,state,country\n10/10/1949 20:30,san marcos,tx,us\n";
//! let result = CsvParser::new().parse_str(text)?;
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].get("city"), Some("san marcos"));
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{CsvParser, load_csv_file};
pub use stats::{ParseResult, ParseStats};
