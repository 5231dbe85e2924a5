//! Domain-specific assertion macros for chatsift harnesses.
//!
//! These wrap `pretty_assertions` semantics with context-rich failure
//! messages naming the pipeline invariant that was violated.

use chatsift_core::MessageRecord;

// ---------------------------------------------------------------------------
// Sender assertions
// ---------------------------------------------------------------------------

/// Assert that a record was authored by the expected participant.
///
/// ```rust
/// assert_sender!(record, "Alice");
/// ```
#[macro_export]
macro_rules! assert_sender {
    ($record:expr, $name:expr) => {{
        let record: &chatsift_core::MessageRecord = &$record;
        let expected: &str = $name;
        match record.sender.name() {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_sender! failed:\n  expected: {:?}\n  actual:   {:?}\n  text: {:?}",
                expected, actual, record.text
            ),
            None => panic!(
                "assert_sender! failed: record is a system entry.\n  text: {:?}",
                record.text
            ),
        }
    }};
}

/// Assert that a record carries the system sentinel.
#[macro_export]
macro_rules! assert_system {
    ($record:expr) => {{
        let record: &chatsift_core::MessageRecord = &$record;
        if !record.sender.is_system() {
            panic!(
                "assert_system! failed: record has sender {:?}.\n  text: {:?}",
                record.sender.as_output_str(),
                record.text
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Timestamp assertions
// ---------------------------------------------------------------------------

/// Assert that a record's timestamp never parsed (the unparsed state) and
/// that every derived calendar field is absent with it.
#[macro_export]
macro_rules! assert_unparsed {
    ($record:expr) => {{
        let record: &chatsift_core::MessageRecord = &$record;
        if let Some(ts) = record.timestamp {
            panic!(
                "assert_unparsed! failed: timestamp parsed as {ts}.\n  text: {:?}",
                record.text
            );
        }
        assert!(record.calendar_date().is_none(), "calendar_date must be absent");
        assert!(record.year().is_none(), "year must be absent");
        assert!(record.month().is_none(), "month must be absent");
        assert!(record.weekday().is_none(), "weekday must be absent");
    }};
}

// ---------------------------------------------------------------------------
// Pipeline invariant helpers
// ---------------------------------------------------------------------------

/// Every record produced from `raw` corresponds to exactly one splitter
/// segment, in the same order (no silent drops in the normalizer).
pub fn assert_record_segment_parity(raw: &str) {
    let segments = chatsift_core::split(raw);
    let records = chatsift_core::parse(raw, &chatsift_core::FormatList::default());
    assert_eq!(
        records.len(),
        segments.len(),
        "record count must equal segment count for input {raw:?}"
    );
}

/// The sequence of senders in `records`, for order assertions.
pub fn sender_names(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.sender.as_output_str().to_string())
        .collect()
}
