//! Display normalization for sighting text fields
//!
//! These helpers are for whoever renders a sighting, not for the
//! aggregators: they turn the export's lower-case, entity-escaped text into
//! something readable. Each one is a pure string transform.

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;

use crate::app::models::RawRecord;
use crate::app::services::aggregator::field_resolver::{DATE_CHAIN, resolve_city};
use crate::constants::{COMMENTS_FIELD_NAME, SHAPE_FIELD_NAME};

static PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()]").expect("parentheses pattern is valid"));

static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)(.*)$").expect("leading word pattern is valid"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9A-Fa-f]+|#[0-9]+|[A-Za-z]+);?").expect("entity pattern is valid")
});

/// Strip parentheses, trim, upper-case the first letter and lower-case the rest
pub fn clean_and_capitalize(value: &str) -> String {
    let cleaned = PARENTHESES.replace_all(value, "");
    let mut chars = cleaned.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Format a raw city value such as `"phoenix (az)"` or `"area51 us"`
///
/// Exactly two space-separated tokens become `"Token1, Token2"`; anything
/// else is cleaned and capitalized as a whole.
pub fn format_location(value: &str) -> String {
    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        [city, country] => format!(
            "{}, {}",
            clean_and_capitalize(city),
            clean_and_capitalize(country)
        ),
        _ => clean_and_capitalize(value),
    }
}

/// Capitalize the leading alphabetic run of a shape, keeping what follows
///
/// `"light."` becomes `"Light."`. Values that do not start with a letter are
/// returned trimmed but otherwise untouched.
pub fn format_shape(value: &str) -> String {
    let trimmed = value.trim();
    match LEADING_WORD.captures(trimmed) {
        Some(caps) => format!("{}{}", clean_and_capitalize(&caps[1]), &caps[2]),
        None => trimmed.to_string(),
    }
}

/// Decode HTML character references in a description
///
/// Handles decimal (`&#44;`), hexadecimal (`&#x2C;`) and the common named
/// references. The trailing semicolon is optional because the export often
/// drops it (`&#44`). Unknown or invalid references are left as written.
pub fn decode_entities(value: &str) -> String {
    ENTITY
        .replace_all(value, |caps: &Captures| {
            decode_reference(&caps[1]).map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn decode_reference(reference: &str) -> Option<char> {
    if let Some(hex) = reference
        .strip_prefix("#x")
        .or_else(|| reference.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = reference.strip_prefix('#') {
        return decimal.parse::<u32>().ok().and_then(char::from_u32);
    }

    let decoded = match reference {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        _ => return None,
    };
    Some(decoded)
}

/// A sighting record prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSighting {
    /// Date text as written in the export
    pub date: String,
    pub location: String,
    pub shape: String,
    pub description: String,
}

impl FormattedSighting {
    /// Apply every display transform to a record
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            date: DATE_CHAIN.resolve(record).unwrap_or_default().to_string(),
            location: resolve_city(record)
                .map(format_location)
                .unwrap_or_default(),
            shape: record
                .get(SHAPE_FIELD_NAME)
                .map(format_shape)
                .unwrap_or_default(),
            description: record
                .get(COMMENTS_FIELD_NAME)
                .map(|comments| decode_entities(comments.trim()))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_location_two_tokens() {
        assert_eq!(format_location("area51 us"), "Area51, Us");
        assert_eq!(format_location("san marcos"), "San, Marcos");
        assert_eq!(format_location("LONDON (uk/england)"), "London, Uk/england");
        assert_eq!(format_location("london (uk)"), "London, Uk");
    }

    #[test]
    fn test_format_location_other_token_counts() {
        assert_eq!(format_location("roswell"), "Roswell");
        assert_eq!(
            format_location("new york city (ny)"),
            "New york city ny"
        );
        assert_eq!(format_location("  (phoenix)  "), "Phoenix");
        assert_eq!(format_location(""), "");
    }

    #[test]
    fn test_clean_and_capitalize() {
        assert_eq!(clean_and_capitalize("(AZ)"), "Az");
        assert_eq!(clean_and_capitalize("  ()  "), "");
        assert_eq!(clean_and_capitalize("éCLAIR"), "Éclair");
    }

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape("cylinder"), "Cylinder");
        assert_eq!(format_shape("light."), "Light.");
        assert_eq!(format_shape("FIREBALL!!"), "Fireball!!");
        assert_eq!(format_shape(" disk "), "Disk");
        assert_eq!(format_shape("?unknown"), "?unknown");
        assert_eq!(format_shape(""), "");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(
            decode_entities("Baptist Church&#44 then it left&#33"),
            "Baptist Church, then it left!"
        );
        assert_eq!(decode_entities("it&#39;s &#x41;&#X42;"), "it's AB");
    }

    #[test]
    fn test_decode_named_entities() {
        assert_eq!(
            decode_entities("&quot;bright&quot; &amp; fast &lt;3"),
            "\"bright\" & fast <3"
        );
        assert_eq!(decode_entities("wait&hellip;"), "wait\u{2026}");
    }

    #[test]
    fn test_decode_leaves_unknown_references() {
        assert_eq!(decode_entities("AT&T crew"), "AT&T crew");
        assert_eq!(decode_entities("&bogus; &#xZZ"), "&bogus; &#xZZ");
        assert_eq!(decode_entities("&#1114112;"), "&#1114112;");
        assert_eq!(decode_entities("no entities"), "no entities");
    }

    #[test]
    fn test_formatted_sighting_from_record() {
        let record = RawRecord::from_pairs([
            ("datetime", "10/10/1949 20:30"),
            ("city", "san marcos"),
            ("state", "tx"),
            ("country", "us"),
            ("shape", "cylinder"),
            ("comments", " Boy Scout meeting in the Baptist Church&#44 "),
        ]);

        let formatted = FormattedSighting::from_record(&record);
        assert_eq!(formatted.date, "10/10/1949 20:30");
        assert_eq!(formatted.location, "San, Marcos");
        assert_eq!(formatted.shape, "Cylinder");
        assert_eq!(
            formatted.description,
            "Boy Scout meeting in the Baptist Church,"
        );
    }

    #[test]
    fn test_formatted_sighting_missing_fields() {
        let formatted = FormattedSighting::from_record(&RawRecord::new());
        assert_eq!(formatted.date, "");
        assert_eq!(formatted.location, "");
        assert_eq!(formatted.shape, "");
        assert_eq!(formatted.description, "");
    }
}
