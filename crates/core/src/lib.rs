//! Bytepair-core - data structures for byte-level BPE
//!
//! This crate holds the state that a training run evolves and the pieces
//! needed to turn trained tokens back into bytes.
//!
//! # Features
//!
//! - `TokenSequence`: the token ids being compressed, rebuilt once per merge
//! - `MergeHistory`: the append-only list of accepted merges, indexed by id
//! - `MergeCandidate`: a total order over `(pair, count)` for reproducible selection
//! - `Decoder`: recursive expansion of any trained token into raw bytes
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{Decoder, MergeHistory, TokenSequence};
//!
//! let mut history = MergeHistory::new();
//! let sequence = TokenSequence::from_bytes(b"abab");
//! let record = history.push(b'a' as u32, b'b' as u32);
//! let sequence = sequence.merge_pair(record.pair(), record.produced);
//!
//! assert_eq!(sequence.as_slice(), &[256, 256]);
//! let bytes = Decoder::new(&history).decode(sequence.as_slice())?;
//! assert_eq!(bytes, b"abab");
//! # Ok::<(), bytepair_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use core::{
    MergeCandidate, MergeHistory, MergeRecord, Pair, TokenSequence, BYTE_VOCAB_SIZE,
    FIRST_MERGE_ID,
};

// Token -> bytes expansion
pub mod decoder;
pub use decoder::Decoder;

// Merge history persistence
pub mod io;
pub use io::SerializedHistory;
