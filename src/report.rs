//! Report rendering — the CLI's plain-text summary and JSON payload.
//!
//! The text report is a stable, line-oriented format (snapshot-tested); the
//! JSON payload carries the full record rows under the output-contract field
//! names plus every aggregation table.

use chatsift_core::config::Config;
use chatsift_core::{FlatRecord, MessageRecord};
use chatsift_stats as stats;

/// How many sender/word/emoji rows the text report shows. The underlying
/// tables are complete; this cut is presentation only.
const REPORT_TOP_N: usize = 5;

/// Render the plain-text report for one participant selection.
///
/// An empty record sequence renders the distinct "no messages" state —
/// parsing nothing is not a failure.
pub fn render_summary(
    records: &[MessageRecord],
    participant: Option<&str>,
    config: &Config,
) -> String {
    if records.is_empty() {
        return "no messages recognized in this transcript\n".to_string();
    }

    let who = participant.unwrap_or("Overall");
    let summary = stats::summary(records, participant, &config.stats);

    let mut out = String::new();
    out.push_str(&format!("chatsift report: {who}\n\n"));
    out.push_str(&format!("messages: {}\n", summary.messages));
    out.push_str(&format!("words: {}\n", summary.words));
    out.push_str(&format!("media messages: {}\n", summary.media_messages));
    out.push_str(&format!("links: {}\n", summary.links));

    if participant.is_none() {
        let shares = stats::busiest_senders(records);
        if !shares.is_empty() {
            out.push_str("\nbusiest senders:\n");
            for share in shares.iter().take(REPORT_TOP_N) {
                out.push_str(&format!(
                    "- {}: {} ({:.2}%)\n",
                    share.sender, share.messages, share.percent
                ));
            }
        }
    }

    let monthly = stats::monthly_timeline(records, participant);
    if !monthly.is_empty() {
        out.push_str("\nmonthly timeline:\n");
        for bucket in &monthly {
            out.push_str(&format!("- {}: {}\n", bucket.label, bucket.messages));
        }
    }

    let weekdays = stats::weekday_activity(records, participant);
    if let Some(top) = weekdays.first() {
        out.push_str(&format!("\nbusiest weekday: {} ({})\n", top.label, top.messages));
    }
    let months = stats::month_activity(records, participant);
    if let Some(top) = months.first() {
        out.push_str(&format!("busiest month: {} ({})\n", top.label, top.messages));
    }

    let emoji = stats::emoji_counts(records, participant);
    if !emoji.is_empty() {
        out.push_str("\ntop emoji:\n");
        for row in emoji.iter().take(REPORT_TOP_N) {
            out.push_str(&format!("- {}: {}\n", row.emoji, row.count));
        }
    }

    out
}

/// Assemble the full JSON payload: flattened record rows plus every
/// aggregation table.
pub fn render_json(
    records: &[MessageRecord],
    participant: Option<&str>,
    config: &Config,
) -> serde_json::Value {
    let rows: Vec<FlatRecord> = records.iter().map(FlatRecord::from).collect();

    serde_json::json!({
        "records": rows,
        "stats": {
            "summary": stats::summary(records, participant, &config.stats),
            "busiest_senders": stats::busiest_senders(records),
            "monthly_timeline": stats::monthly_timeline(records, participant),
            "daily_timeline": stats::daily_timeline(records, participant),
            "weekday_activity": stats::weekday_activity(records, participant),
            "month_activity": stats::month_activity(records, participant),
            "activity_heatmap": stats::activity_heatmap(records, participant),
            "word_counts": stats::word_counts(records, participant, &config.stats),
            "emoji_counts": stats::emoji_counts(records, participant),
        },
    })
}
