//! Record normalizer — turns raw segments into [`MessageRecord`] values.
//!
//! Timestamp parsing tries an ordered list of candidate datetime formats and
//! takes the first success; sender detection splits on the first `": "` in
//! the body and falls back to the system sentinel. Both rules are total:
//! malformed content degrades the single record, never the whole parse.

use crate::splitter;
use crate::types::{MessageRecord, RawSegment, Sender};
use chrono::NaiveDateTime;
use thiserror::Error;

/// Candidate datetime formats, tried in order against each trimmed timestamp.
///
/// The month-first/day-first ordering is a fallback heuristic, not a
/// guarantee: a date where both components are ≤ 12 (`03/04/23`) always
/// resolves month-first even if the source export was day-first. That
/// ambiguity is a known accuracy limitation of the export format itself.
pub const DEFAULT_FORMATS: [&str; 4] = [
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%y, %H:%M",
    "%d/%m/%y, %H:%M",
    "%d/%m/%y, %I:%M %p",
];

/// Rejected format-list configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatListError {
    #[error("datetime format list must contain at least one chrono format string")]
    Empty,
}

/// An ordered, non-empty list of chrono format strings.
///
/// Data-driven so future export conventions extend the list instead of
/// growing a conditional chain. An empty list is a configuration error and
/// is rejected here at the boundary — content never errors mid-parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatList(Vec<String>);

impl FormatList {
    pub fn new(formats: Vec<String>) -> Result<Self, FormatListError> {
        if formats.is_empty() {
            return Err(FormatListError::Empty);
        }
        Ok(Self(formats))
    }

    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for FormatList {
    fn default() -> Self {
        Self(DEFAULT_FORMATS.iter().map(ToString::to_string).collect())
    }
}

/// Try each candidate format in order against the trimmed timestamp text.
/// `None` means no format matched — the unparsed state, not an error.
fn parse_timestamp(text: &str, formats: &FormatList) -> Option<NaiveDateTime> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '-');
    formats
        .formats()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Split a raw body into sender and text on the first `": "` occurrence.
/// A body without the delimiter is a system/notification entry.
fn split_sender(body: &str) -> (Sender, String) {
    match body.split_once(": ") {
        Some((sender, text)) => (
            Sender::Participant(sender.to_string()),
            text.trim().to_string(),
        ),
        None => (Sender::System, body.trim().to_string()),
    }
}

/// Normalize one segment into a [`MessageRecord`].
///
/// Pure function of the segment and format list: applying it twice to the
/// same segment yields structurally identical records.
pub fn normalize(segment: &RawSegment, formats: &FormatList) -> MessageRecord {
    let timestamp = parse_timestamp(&segment.timestamp_text, formats);
    let (sender, text) = split_sender(&segment.body_text);
    MessageRecord {
        timestamp,
        sender,
        text,
    }
}

/// Run the full pipeline: split the raw transcript, then normalize every
/// segment in order. Exactly one record per segment; conversation order is
/// preserved and is load-bearing for downstream time-series grouping.
pub fn parse(raw: &str, formats: &FormatList) -> Vec<MessageRecord> {
    let segments = splitter::split(raw);
    tracing::debug!(segments = segments.len(), "split transcript");

    let records: Vec<MessageRecord> = segments
        .iter()
        .map(|segment| normalize(segment, formats))
        .collect();

    let unparsed = records.iter().filter(|r| r.timestamp.is_none()).count();
    if unparsed > 0 {
        tracing::debug!(unparsed, "records kept with unrecognized timestamps");
    }
    records
}
