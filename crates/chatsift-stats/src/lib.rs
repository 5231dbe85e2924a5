//! chatsift-stats — descriptive aggregations over normalized records.
//!
//! Every function here is straightforward grouping and counting over the
//! ordered [`MessageRecord`] sequence the core produces: counts, time-series,
//! word and emoji frequency tables, and a weekday × hour activity grid.
//!
//! Conventions shared across the module:
//!
//! - `participant: Option<&str>` restricts an aggregation to one sender;
//!   `None` means the whole chat.
//! - Records carrying the `group_notification` sentinel are excluded wherever
//!   a per-sender view would be distorted by them (sender shares, word and
//!   emoji frequency).
//! - Records whose timestamp never parsed are skipped by every time-keyed
//!   aggregation and still counted by the count-only ones.

pub mod activity;
pub mod frequency;
pub mod summary;
pub mod timeline;

pub use activity::{activity_heatmap, month_activity, weekday_activity, ActivityCount, ActivityGrid};
pub use frequency::{emoji_counts, word_counts, EmojiCount, WordCount};
pub use summary::{busiest_senders, summary, ChatSummary, SenderShare};
pub use timeline::{daily_timeline, monthly_timeline, DailyBucket, MonthlyBucket};

use chatsift_core::MessageRecord;

/// Iterate the records visible to one participant selection.
pub(crate) fn selected<'a>(
    records: &'a [MessageRecord],
    participant: Option<&'a str>,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    records
        .iter()
        .filter(move |r| participant.map_or(true, |p| r.sender.as_output_str() == p))
}

/// Like [`selected`], with system/notification records excluded as well.
pub(crate) fn selected_participants<'a>(
    records: &'a [MessageRecord],
    participant: Option<&'a str>,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    selected(records, participant).filter(|r| !r.sender.is_system())
}
