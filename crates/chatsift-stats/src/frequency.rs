//! Word and emoji frequency tables.
//!
//! Both tables are complete — top-N selection and stopword filtering are the
//! display layer's concern, applied downstream over the full table.

use crate::selected_participants;
use chatsift_core::config::StatsConfig;
use chatsift_core::MessageRecord;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

fn non_letters() -> &'static Regex {
    static NON_LETTERS: OnceLock<Regex> = OnceLock::new();
    NON_LETTERS.get_or_init(|| {
        Regex::new("[^A-Za-z]+").unwrap_or_else(|e| panic!("letter pattern is valid: {e}"))
    })
}

/// One row of the word-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Full word-frequency table over participant messages, descending.
///
/// Tokenization is ASCII-letter only: every non-letter run becomes a space,
/// words are lowercased, and single letters are dropped. System records and
/// media/deleted placeholder messages contribute nothing.
pub fn word_counts(
    records: &[MessageRecord],
    participant: Option<&str>,
    cfg: &StatsConfig,
) -> Vec<WordCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for record in selected_participants(records, participant) {
        let lowered = record.text.to_lowercase();
        if cfg.excluded_markers.iter().any(|m| lowered.contains(m.as_str())) {
            continue;
        }
        let letters_only = non_letters().replace_all(&lowered, " ");
        for word in letters_only.split_whitespace() {
            if word.len() > 1 {
                *counts.entry(word.to_string()).or_default() += 1;
            }
        }
    }

    into_ranked(counts)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// One row of the emoji-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: u64,
}

/// Emoji frequency over participant messages, descending.
///
/// Counted per character against the emoji lookup table, matching a
/// per-character scan: components of multi-codepoint ZWJ sequences count
/// individually, joiners and variation selectors not at all.
pub fn emoji_counts(records: &[MessageRecord], participant: Option<&str>) -> Vec<EmojiCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut buf = [0u8; 4];

    for record in selected_participants(records, participant) {
        for ch in record.text.chars() {
            if emojis::get(ch.encode_utf8(&mut buf)).is_some() {
                *counts.entry(ch.to_string()).or_default() += 1;
            }
        }
    }

    into_ranked(counts)
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}

/// Descending by count, ties broken lexicographically for determinism.
fn into_ranked(counts: HashMap<String, u64>) -> impl Iterator<Item = (String, u64)> {
    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter()
}
