//! Core BPE data structures.
//!
//! This module contains the token sequence, the merge history and the
//! candidate ordering used to pick each merge.

pub mod merges;
pub mod priority;
pub mod sequence;

pub use merges::{MergeHistory, MergeRecord, Pair};
pub use priority::MergeCandidate;
pub use sequence::TokenSequence;

/// Number of token ids reserved for raw bytes.
pub const BYTE_VOCAB_SIZE: usize = 256;

/// Id assigned to the first accepted merge.
pub const FIRST_MERGE_ID: u32 = BYTE_VOCAB_SIZE as u32;
