//! Test builders — ergonomic constructors for records and raw transcripts.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chatsift_core::{MessageRecord, Sender};
use chrono::{NaiveDate, NaiveDateTime};

// ---------------------------------------------------------------------------
// Record constructors
// ---------------------------------------------------------------------------

/// A participant record without a timestamp.
pub fn participant_record(sender: &str, text: &str) -> MessageRecord {
    MessageRecord {
        timestamp: None,
        sender: Sender::Participant(sender.to_string()),
        text: text.to_string(),
    }
}

/// A system/notification record without a timestamp.
pub fn system_record(text: &str) -> MessageRecord {
    MessageRecord {
        timestamp: None,
        sender: Sender::System,
        text: text.to_string(),
    }
}

/// A participant record stamped at the given local time.
pub fn record_at(
    sender: &str,
    text: &str,
    y: i32,
    m: u32,
    d: u32,
    h: u32,
    min: u32,
) -> MessageRecord {
    MessageRecord {
        timestamp: Some(at(y, m, d, h, min)),
        sender: Sender::Participant(sender.to_string()),
        text: text.to_string(),
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid test date")
        .and_hms_opt(h, min, 0)
        .expect("valid test time")
}

// ---------------------------------------------------------------------------
// TranscriptBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw transcript text in the export format.
///
/// # Example
///
/// ```rust
/// let raw = TranscriptBuilder::new()
///     .message("1/1/23, 09:00", "Bob", "hi")
///     .system("1/1/23, 09:01", "Alice joined using this group's invite link")
///     .build();
/// ```
#[derive(Default)]
pub struct TranscriptBuilder {
    lines: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text before the first boundary (export headers, import junk).
    pub fn preamble(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// One authored message. `stamp` is the raw timestamp text without the
    /// ` - ` separator, e.g. `"1/1/23, 09:00"` or `"12/31/23, 11:59 PM"`.
    pub fn message(mut self, stamp: &str, sender: &str, text: &str) -> Self {
        self.lines.push(format!("{stamp} - {sender}: {text}"));
        self
    }

    /// One system/notification line (no `sender: ` prefix).
    pub fn system(mut self, stamp: &str, text: &str) -> Self {
        self.lines.push(format!("{stamp} - {text}"));
        self
    }

    /// A continuation line belonging to the previous message body.
    pub fn continuation(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}
