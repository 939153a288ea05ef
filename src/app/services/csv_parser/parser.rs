//! Core CSV parser implementation
//!
//! Handles reader configuration, header normalization and the conversion of
//! each data row into an ordered [`RawRecord`].

use std::io::Read;
use std::path::Path;

use super::stats::{ParseResult, ParseStats};
use crate::app::models::RawRecord;
use crate::{Error, Result};

/// Origin label used for in-memory input
const MEMORY_ORIGIN: &str = "<memory>";

/// Parser for header-first delimited sighting data
///
/// - Header row required; its cells become the record keys
/// - Row lengths may drift from the header width
/// - Blank and whitespace-only rows are skipped
/// - Decoder failures and unterminated quotes propagate as [`Error::Parse`]
#[derive(Debug, Clone)]
pub struct CsvParser {
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvParser {
    /// Create a comma-delimited parser
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a different single-byte delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse text already held in memory
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_labelled(content.as_bytes(), MEMORY_ORIGIN)
    }

    /// Parse raw bytes; invalid UTF-8 is a decode failure
    pub fn parse_bytes(&self, content: &[u8]) -> Result<ParseResult> {
        self.parse_labelled(content, MEMORY_ORIGIN)
    }

    /// Drain a reader and parse its contents, labelling errors with `origin`
    pub fn parse_reader<R: Read>(&self, mut reader: R, origin: &str) -> Result<ParseResult> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| Error::parse(origin, "Failed to read input", csv::Error::from(e)))?;

        self.parse_labelled(&content, origin)
    }

    /// Parse bytes, labelling errors with `origin`
    pub fn parse_labelled(&self, content: &[u8], origin: &str) -> Result<ParseResult> {
        if let Some(offset) = unterminated_quote(content, self.delimiter) {
            return Err(Error::malformed(
                origin,
                format!("Unterminated quoted field starting at byte {}", offset),
            ));
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(content);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| Error::parse(origin, "Failed to read CSV header row", e))?
            .iter()
            .map(normalize_header)
            .collect();

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            stats.total_rows += 1;

            let row = result.map_err(|e| {
                Error::parse(
                    origin,
                    format!("Failed to decode data row {}", stats.total_rows),
                    e,
                )
            })?;

            if row.iter().all(|cell| cell.trim().is_empty()) {
                stats.blank_rows_skipped += 1;
                continue;
            }

            if row.len() != headers.len() {
                stats.ragged_rows += 1;
            }

            let mut record = RawRecord::with_capacity(headers.len());
            for (name, value) in headers.iter().zip(row.iter()) {
                record.push(name.as_str(), value);
            }

            records.push(record);
            stats.records_parsed += 1;
        }

        Ok(ParseResult { records, stats })
    }
}

/// Byte offset of a quoted field that is still open at end of input
///
/// Follows the reader's quoting rules: a quote opens a field only at field
/// start, `""` inside a quoted field is an escaped quote, and a quote in the
/// middle of an unquoted field is literal text.
fn unterminated_quote(content: &[u8], delimiter: u8) -> Option<usize> {
    let mut field_start = true;
    let mut open_at = None;
    let mut i = if content.starts_with(b"\xef\xbb\xbf") { 3 } else { 0 };

    while i < content.len() {
        let byte = content[i];
        match open_at {
            Some(_) if byte == b'"' => {
                if content.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    open_at = None;
                    field_start = false;
                }
            }
            Some(_) => {}
            None if byte == delimiter || byte == b'\n' || byte == b'\r' => field_start = true,
            None if byte == b'"' && field_start => open_at = Some(i),
            None => field_start = false,
        }
        i += 1;
    }

    open_at
}

/// Trim header cells and drop a leading byte-order mark
fn normalize_header(cell: &str) -> String {
    cell.trim_start_matches('\u{feff}').trim().to_string()
}

/// Read a sighting CSV from disk and parse it
///
/// The file read is the only suspension point; parsing and everything
/// downstream of it run synchronously on the loaded bytes.
pub async fn load_csv_file(path: &Path) -> Result<ParseResult> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

    CsvParser::new().parse_labelled(&bytes, &path.display().to_string())
}
