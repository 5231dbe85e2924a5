//! Transcript splitter — locates message boundaries in the raw export text.
//!
//! A boundary is a timestamp-shaped substring (`1/2/23, 09:41` with an
//! optional meridiem marker) followed by the literal ` - ` separator. The
//! pattern is searched anywhere in the text, not only at line starts, because
//! consecutive messages are newline-concatenated without a reliable
//! line-start guarantee across export variants.

use crate::types::RawSegment;
use regex::Regex;
use std::sync::OnceLock;

/// `D{1,2}/D{1,2}/D{2,4}, H{1,2}:MM`, an optional case-insensitive `AM`/`PM`
/// (with or without a leading space), then ` - `.
const BOUNDARY_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?:\s?(?i:[AP]M))?\s-\s";

fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| {
        Regex::new(BOUNDARY_PATTERN).unwrap_or_else(|e| panic!("boundary pattern is valid: {e}"))
    })
}

/// Split a raw transcript into (timestamp-text, body-text) segments.
///
/// All non-overlapping boundary matches anchor the segments in document
/// order. The body of segment *i* runs from the end of match *i* to the start
/// of match *i+1* (or end of document). Any preamble before the first
/// boundary is not a message and is dropped. Input with no boundary matches
/// yields an empty `Vec`, never an error.
pub fn split(raw: &str) -> Vec<RawSegment> {
    let matches: Vec<regex::Match<'_>> = boundary_regex().find_iter(raw).collect();

    let timestamps = matches.iter().map(|m| m.as_str());
    let bodies = matches.iter().enumerate().map(|(i, m)| {
        let end = matches.get(i + 1).map_or(raw.len(), |next| next.start());
        &raw[m.end()..end]
    });

    // zip truncates to the shorter side should the two lists ever diverge —
    // a lenient policy, never an error.
    timestamps
        .zip(bodies)
        .map(|(timestamp_text, body_text)| RawSegment {
            timestamp_text: timestamp_text.to_string(),
            body_text: body_text.to_string(),
        })
        .collect()
}
