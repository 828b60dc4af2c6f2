//! Training infrastructure for byte-level BPE.
//!
//! This module provides the per-pass pair counter and the trainer that
//! drives the merge loop.

pub mod counter;
pub mod trainer;

pub use counter::PairCounter;
pub use trainer::{
    train, BpeTrainer, TrainerState, TrainingConfig, TrainingConfigBuilder, TrainingOutcome,
};
