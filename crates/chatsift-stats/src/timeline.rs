//! Message-count time-series: per calendar month and per calendar day.
//!
//! Records whose timestamp never parsed carry no calendar position and are
//! skipped here; they still count in [`crate::summary`].

use crate::selected;
use chatsift_core::types::MONTH_NAMES;
use chatsift_core::MessageRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One month of activity, in chronological order within the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    /// Display label, `"January-2023"` style.
    pub label: String,
    pub messages: u64,
}

/// Message counts grouped by (year, month), chronological.
pub fn monthly_timeline(records: &[MessageRecord], participant: Option<&str>) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for record in selected(records, participant) {
        if let (Some(year), Some(month_num)) = (record.year(), record.month_num()) {
            *buckets.entry((year, month_num)).or_default() += 1;
        }
    }

    buckets
        .into_iter()
        .map(|((year, month_num), messages)| {
            let month = MONTH_NAMES[(month_num - 1) as usize];
            MonthlyBucket {
                year,
                month_num,
                month,
                label: format!("{month}-{year}"),
                messages,
            }
        })
        .collect()
}

/// One calendar day of activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub messages: u64,
}

/// Message counts per calendar date, chronological.
pub fn daily_timeline(records: &[MessageRecord], participant: Option<&str>) -> Vec<DailyBucket> {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in selected(records, participant) {
        if let Some(date) = record.calendar_date() {
            *buckets.entry(date).or_default() += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(date, messages)| DailyBucket { date, messages })
        .collect()
}
