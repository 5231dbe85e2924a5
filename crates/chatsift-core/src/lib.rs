//! chatsift-core — transcript parsing and normalization.
//!
//! This crate turns a raw exported chat transcript (one loosely-delimited
//! text blob with inline timestamps) into an ordered sequence of structured
//! [`MessageRecord`] values. It is the only part of the system with real
//! parsing complexity; everything downstream is grouping and counting.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Splitter ──► RawSegment* ──► Normalizer ──► MessageRecord*
//! ```
//!
//! The pipeline is a pure function of the input string: single-threaded,
//! synchronous, no I/O, no state retained across calls. Malformed *content*
//! never raises — an unrecognized timestamp degrades that one record to the
//! unparsed state and parsing continues.

pub mod config;
pub mod normalizer;
pub mod splitter;
pub mod types;

pub use normalizer::{normalize, parse, FormatList, FormatListError};
pub use splitter::split;
pub use types::{FlatRecord, MessageRecord, RawSegment, Sender};
