//! Headline counts: messages, words, media placeholders, links, and the
//! per-sender message share table.

use crate::{selected, selected_participants};
use chatsift_core::config::StatsConfig;
use chatsift_core::MessageRecord;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// `http(s)://…` and `www.…` tokens. A heuristic, not a full URI grammar —
/// bare domains without a scheme or `www.` prefix are not counted.
const URL_PATTERN: &str = r"(?i)\b(?:https?://|www\.)\S+";

fn url_regex() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| {
        Regex::new(URL_PATTERN).unwrap_or_else(|e| panic!("url pattern is valid: {e}"))
    })
}

/// Headline counts for one participant selection.
///
/// `messages` counts every record in the selection, notification rows
/// included; `media_messages` counts bodies containing a media placeholder
/// marker (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatSummary {
    pub messages: u64,
    pub words: u64,
    pub media_messages: u64,
    pub links: u64,
}

pub fn summary(
    records: &[MessageRecord],
    participant: Option<&str>,
    cfg: &StatsConfig,
) -> ChatSummary {
    let mut out = ChatSummary {
        messages: 0,
        words: 0,
        media_messages: 0,
        links: 0,
    };

    for record in selected(records, participant) {
        out.messages += 1;
        out.words += record.text.split_whitespace().count() as u64;

        let lowered = record.text.to_lowercase();
        if cfg.media_markers.iter().any(|m| lowered.contains(m.as_str())) {
            out.media_messages += 1;
        }
        out.links += url_regex().find_iter(&record.text).count() as u64;
    }
    out
}

/// One row of the sender share table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    pub messages: u64,
    /// Share of all participant messages, in percent, rounded to two decimals.
    pub percent: f64,
}

/// Per-sender message counts with percentage share, descending. System
/// records are excluded: notification rows are nobody's messages.
pub fn busiest_senders(records: &[MessageRecord]) -> Vec<SenderShare> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in selected_participants(records, None) {
        *counts.entry(record.sender.as_output_str()).or_default() += 1;
    }

    let total: u64 = counts.values().sum();
    let mut shares: Vec<SenderShare> = counts
        .into_iter()
        .map(|(sender, messages)| SenderShare {
            sender: sender.to_string(),
            messages,
            percent: round2(messages as f64 * 100.0 / total as f64),
        })
        .collect();

    shares.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.sender.cmp(&b.sender)));
    shares
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
