//! Bytepair-training - greedy BPE training over raw bytes
//!
//! This crate learns merge rules from a byte stream by repeatedly merging
//! the most frequent adjacent token pair until no pair repeats.
//!
//! # Features
//!
//! - Full recount every pass; no incremental bookkeeping to drift
//! - Reproducible tie-breaking (smallest pair wins among equal counts)
//! - Step-by-step control through `BpeTrainer::step`
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::{BpeTrainer, TrainingConfig};
//!
//! let config = TrainingConfig::builder().min_frequency(2).build()?;
//! let outcome = BpeTrainer::new(config, b"ababab")?.into_outcome();
//!
//! assert_eq!(outcome.merge_count(), 2);
//! assert_eq!(outcome.decode()?, b"ababab");
//! # Ok::<(), bytepair_training::TokenizerError>(())
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    train, BpeTrainer, PairCounter, TrainerState, TrainingConfig, TrainingConfigBuilder,
    TrainingOutcome,
};
