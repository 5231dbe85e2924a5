//! Activity aggregations: busiest weekdays, busiest months, and the
//! weekday × hour heatmap grid.

use crate::selected;
use chatsift_core::types::WEEKDAY_NAMES;
use chatsift_core::MessageRecord;
use chrono::{Datelike, Timelike};
use serde::Serialize;

/// A labelled message count (weekday or month name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub label: &'static str,
    pub messages: u64,
}

/// Message counts per weekday, descending. Weekdays with no messages are
/// omitted.
pub fn weekday_activity(records: &[MessageRecord], participant: Option<&str>) -> Vec<ActivityCount> {
    let mut counts = [0u64; 7];
    for record in selected(records, participant) {
        if let Some(ts) = record.timestamp {
            counts[ts.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    ranked(WEEKDAY_NAMES.iter().copied().zip(counts))
}

/// Message counts per month name, descending. Months with no messages are
/// omitted. Month years are collapsed — all Januaries count together.
pub fn month_activity(records: &[MessageRecord], participant: Option<&str>) -> Vec<ActivityCount> {
    let mut counts = [0u64; 12];
    for record in selected(records, participant) {
        if let Some(ts) = record.timestamp {
            counts[ts.month0() as usize] += 1;
        }
    }
    ranked(chatsift_core::types::MONTH_NAMES.iter().copied().zip(counts))
}

fn ranked(pairs: impl Iterator<Item = (&'static str, u64)>) -> Vec<ActivityCount> {
    let mut out: Vec<ActivityCount> = pairs
        .filter(|(_, messages)| *messages > 0)
        .map(|(label, messages)| ActivityCount { label, messages })
        .collect();
    out.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.label.cmp(b.label)));
    out
}

/// Weekday × hour message-count grid: 7 rows (Monday … Sunday) by 24 hour
/// columns, every cell present, absent activity as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityGrid {
    cells: [[u64; 24]; 7],
}

impl ActivityGrid {
    /// Count for one (weekday row, hour column) cell. Rows are indexed from
    /// Monday = 0.
    pub fn cell(&self, weekday: usize, hour: usize) -> u64 {
        self.cells[weekday][hour]
    }

    /// Iterate rows as (weekday name, hourly counts), Monday first.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[u64; 24])> {
        WEEKDAY_NAMES.iter().copied().zip(self.cells.iter())
    }

    /// Total messages across the grid.
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }
}

/// Build the weekday × hour activity grid for one participant selection.
pub fn activity_heatmap(records: &[MessageRecord], participant: Option<&str>) -> ActivityGrid {
    let mut cells = [[0u64; 24]; 7];
    for record in selected(records, participant) {
        if let Some(ts) = record.timestamp {
            let row = ts.weekday().num_days_from_monday() as usize;
            let col = ts.hour() as usize;
            cells[row][col] += 1;
        }
    }
    ActivityGrid { cells }
}
