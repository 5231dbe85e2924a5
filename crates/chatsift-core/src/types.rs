//! Core types for chatsift-core.
//!
//! This module defines the fundamental data structures shared across the
//! pipeline: the transient [`RawSegment`] produced by the splitter, the
//! normalized [`MessageRecord`], its [`Sender`] discriminant, and the
//! serialized [`FlatRecord`] row handed to downstream consumers.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Sentinel string emitted at the output boundary wherever a record has no
/// human sender. Downstream aggregation filters on this exact value.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Full English month names, indexed by zero-based month number.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English weekday names, indexed by days since Monday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// An unparsed (timestamp-text, body-text) pair cut out of the raw transcript
/// by the splitter.
///
/// Transient: consumed immediately by the normalizer, one [`MessageRecord`]
/// per segment, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    /// The boundary match text, trailing separator noise included. The
    /// normalizer is responsible for trimming it.
    pub timestamp_text: String,
    /// Everything between this boundary match and the next one.
    pub body_text: String,
}

/// Who authored a message.
///
/// Join/leave/group-rename notifications and other non-authored lines carry
/// the [`Sender::System`] sentinel rather than a magic string; the exact
/// string [`GROUP_NOTIFICATION`] only appears at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    Participant(String),
    System,
}

impl Sender {
    /// The output-boundary spelling: the participant name, or the
    /// [`GROUP_NOTIFICATION`] sentinel for system entries.
    pub fn as_output_str(&self) -> &str {
        match self {
            Sender::Participant(name) => name,
            Sender::System => GROUP_NOTIFICATION,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }

    /// The participant name, if this is a human sender.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::Participant(name) => Some(name),
            Sender::System => None,
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_output_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_output_str())
    }
}

/// The normalized representation of one chat message or system notification.
///
/// `timestamp` is `None` when the timestamp text matched no known format;
/// such records are retained in sequence position with all calendar
/// accessors returning `None`. Timestamps are naive local time — the source
/// exports carry no timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    pub timestamp: Option<NaiveDateTime>,
    pub sender: Sender,
    /// Message body with the sender prefix stripped and whitespace trimmed.
    pub text: String,
}

impl MessageRecord {
    /// Date-only component of the timestamp.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    pub fn year(&self) -> Option<i32> {
        self.timestamp.map(|ts| ts.year())
    }

    /// Month number, 1–12.
    pub fn month_num(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.month())
    }

    /// Full English month name ("January" … "December").
    pub fn month(&self) -> Option<&'static str> {
        self.timestamp.map(|ts| MONTH_NAMES[ts.month0() as usize])
    }

    /// Day of month.
    pub fn day(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.day())
    }

    pub fn hour(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.minute())
    }

    /// Full English weekday name ("Monday" … "Sunday").
    pub fn weekday(&self) -> Option<&'static str> {
        self.timestamp
            .map(|ts| WEEKDAY_NAMES[ts.weekday().num_days_from_monday() as usize])
    }
}

/// One serialized output row, under the exact field names downstream
/// consumers group on. Calendar fields are `null` for records whose
/// timestamp never parsed — consumers must not coerce those into dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    pub user: String,
    pub message: String,
    pub date: Option<NaiveDateTime>,
    pub only_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub month_num: Option<u32>,
    pub month: Option<&'static str>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl From<&MessageRecord> for FlatRecord {
    fn from(record: &MessageRecord) -> Self {
        Self {
            user: record.sender.as_output_str().to_string(),
            message: record.text.clone(),
            date: record.timestamp,
            only_date: record.calendar_date(),
            year: record.year(),
            month_num: record.month_num(),
            month: record.month(),
            day: record.day(),
            hour: record.hour(),
            minute: record.minute(),
        }
    }
}
