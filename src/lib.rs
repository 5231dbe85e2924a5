//! chatsift — sift exported chat transcripts.
//!
//! Turns a WhatsApp-style exported transcript into an ordered sequence of
//! normalized message records plus descriptive aggregations over them. This
//! crate re-exports the pipeline layers so integration tests and external
//! consumers can import them directly.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Splitter ──► Normalizer ──► MessageRecord* ──► Stats ──► Report
//! ```
//!
//! The whole pipeline is a pure, synchronous function of the input string;
//! the CLI in `main.rs` only adds file reading, config loading, and output
//! formatting around it.

pub mod report;

pub use chatsift_core::{
    config::Config, normalize, parse, split, FlatRecord, FormatList, FormatListError,
    MessageRecord, RawSegment, Sender,
};
pub use chatsift_stats as stats;
