//! Static transcript corpora used across harnesses.
//!
//! Each corpus is a raw export-format transcript string covering one family
//! of export quirks. The high-volume corpus is generated.

use fake::faker::name::en::FirstName;
use fake::Fake;

/// A 12-hour-clock export with a system notice and a media placeholder.
pub const CORPUS_TWELVE_HOUR: &str = "\
1/1/23, 9:00 AM - Messages and calls are end-to-end encrypted.
1/1/23, 9:00 AM - Bob: good morning
1/1/23, 9:05 AM - Alice: morning! how was the trip?
1/1/23, 12:30 PM - Bob: <Media omitted>
1/2/23, 11:59 PM - Alice: late reply, sorry
";

/// A 24-hour-clock export, day-first dates where unambiguous.
pub const CORPUS_TWENTY_FOUR_HOUR: &str = "\
13/1/23, 14:30 - Carol: lunch?
13/1/23, 14:32 - Dave: sure
14/1/23, 09:00 - Carol: on my way
";

/// Notification-heavy transcript: group churn plus one authored message.
pub const CORPUS_SYSTEM_HEAVY: &str = "\
3/15/23, 10:00 - You created group \"weekend plans\"
3/15/23, 10:01 - Alice joined using this group's invite link
3/15/23, 10:02 - Bob was added
3/15/23, 10:05 - Alice: hi everyone
";

/// Messages with multi-line bodies and a body containing the delimiter again.
pub const CORPUS_MULTILINE: &str = "\
1/1/23, 09:00 - Bob: first line
second line
third line
1/1/23, 09:05 - Alice: note: the plan changed
";

/// No boundary pattern anywhere.
pub const CORPUS_NO_BOUNDARIES: &str = "\
This file was exported without timestamps.
Nothing here looks like a message boundary.
";

/// Mixed parseability: the middle boundary carries a 4-digit year, which the
/// splitter accepts but the default format list cannot parse.
pub const CORPUS_MIXED_PARSEABILITY: &str = "\
1/1/23, 09:00 - Bob: parseable
1/1/2023, 09:05 - Alice: splitter yes, normalizer no
1/1/23, 09:10 - Bob: parseable again
";

/// Generate a transcript of `n` messages across alternating days, hours, and
/// fake sender names.
pub fn corpus_high_volume(n: usize) -> String {
    let senders: Vec<String> = (0..4).map(|_| FirstName().fake::<String>()).collect();
    let mut out = String::new();
    for i in 0..n {
        let day = 1 + (i / 96) % 28;
        let hour = (i / 4) % 24;
        let minute = (i % 4) * 15;
        let sender = &senders[i % senders.len()];
        out.push_str(&format!(
            "{}/{}/23, {:02}:{:02} - {}: message number {}\n",
            1 + (i / 2688) % 12,
            day,
            hour,
            minute,
            sender,
            i
        ));
    }
    out
}
