//! BPE trainer implementation.
//!
//! Training is a two-state machine. While `Running`, each step counts every
//! adjacent pair of the current sequence, takes the most frequent one and
//! rewrites the sequence with a fresh merge id. Once no pair reaches the
//! configured minimum frequency the trainer is `Stopped` for good.

use super::counter::PairCounter;
use bytepair_core::{
    Decoder, MergeHistory, MergeRecord, Result, TokenSequence, TokenizerError,
};
use log::{debug, info};

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Minimum count a pair needs to be merged (at least 2)
    pub min_frequency: u64,
    /// Emit a debug log line every this many merges (0 disables)
    pub log_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            log_interval: 1000,
        }
    }
}

impl TrainingConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::default()
    }

    /// Check that the configuration can drive a terminating run.
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency < 2 {
            return Err(TokenizerError::InvalidConfig(format!(
                "min_frequency must be at least 2, got {}",
                self.min_frequency
            )));
        }
        Ok(())
    }
}

/// Builder for [`TrainingConfig`].
#[derive(Debug, Clone, Default)]
pub struct TrainingConfigBuilder {
    config: TrainingConfig,
}

impl TrainingConfigBuilder {
    /// Set the minimum pair frequency.
    pub fn min_frequency(mut self, min_frequency: u64) -> Self {
        self.config.min_frequency = min_frequency;
        self
    }

    /// Set how often progress is logged.
    pub fn log_interval(mut self, log_interval: usize) -> Self {
        self.config.log_interval = log_interval;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<TrainingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Trainer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerState {
    /// More merges may be accepted
    Running,
    /// No pair is frequent enough; sequence and history are final
    Stopped,
}

/// Result of a finished training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingOutcome {
    /// The fully merged token sequence
    pub sequence: TokenSequence,
    /// Every accepted merge in order
    pub history: MergeHistory,
}

impl TrainingOutcome {
    /// Number of tokens left after training.
    pub fn token_count(&self) -> usize {
        self.sequence.len()
    }

    /// Number of accepted merges.
    pub fn merge_count(&self) -> usize {
        self.history.len()
    }

    /// Raw bytes plus accepted merges.
    pub fn vocab_size(&self) -> usize {
        self.history.vocab_size()
    }

    /// Expand the final sequence back into the original bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Decoder::new(&self.history).decode(self.sequence.as_slice())
    }
}

/// Greedy most-frequent-pair BPE trainer.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
    /// Current token sequence
    sequence: TokenSequence,
    /// Merges accepted so far
    history: MergeHistory,
    /// Current state
    state: TrainerState,
}

impl BpeTrainer {
    /// Create a trainer over `bytes`, one token per byte.
    pub fn new(config: TrainingConfig, bytes: &[u8]) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            sequence: TokenSequence::from_bytes(bytes),
            history: MergeHistory::new(),
            state: TrainerState::Running,
        })
    }

    /// Create a trainer with the default configuration.
    pub fn with_defaults(bytes: &[u8]) -> Self {
        Self {
            config: TrainingConfig::default(),
            sequence: TokenSequence::from_bytes(bytes),
            history: MergeHistory::new(),
            state: TrainerState::Running,
        }
    }

    /// Current state.
    pub fn state(&self) -> TrainerState {
        self.state
    }

    /// The configuration in use.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// The current token sequence.
    pub fn sequence(&self) -> &TokenSequence {
        &self.sequence
    }

    /// Merges accepted so far.
    pub fn history(&self) -> &MergeHistory {
        &self.history
    }

    /// Perform one transition.
    ///
    /// Returns the accepted merge, or None once the trainer has stopped.
    pub fn step(&mut self) -> Option<MergeRecord> {
        if self.state == TrainerState::Stopped {
            return None;
        }

        let counter = PairCounter::from_sequence(&self.sequence);
        let best = match counter.best() {
            Some(best) if best.count >= self.config.min_frequency => best,
            _ => {
                self.state = TrainerState::Stopped;
                info!(
                    "training stopped: merges={} tokens={} vocab={}",
                    self.history.len(),
                    self.sequence.len(),
                    self.history.vocab_size()
                );
                return None;
            }
        };

        let (left, right) = best.pair;
        let record = self.history.push(left, right);
        self.sequence = self.sequence.merge_pair(best.pair, record.produced);

        if self.config.log_interval > 0 && self.history.len() % self.config.log_interval == 0 {
            debug!(
                "merge {:>8} pair ({}, {}) -> {} freq {:>8} distinct_pairs {:>8} tokens {:>10}",
                self.history.len(),
                left,
                right,
                record.produced,
                best.count,
                counter.len(),
                self.sequence.len()
            );
        }

        Some(record)
    }

    /// Step until the trainer stops.
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }

    /// Run to completion and hand over the final sequence and history.
    pub fn into_outcome(mut self) -> TrainingOutcome {
        self.run();
        TrainingOutcome {
            sequence: self.sequence,
            history: self.history,
        }
    }
}

/// Train over `bytes` with the default configuration.
pub fn train(bytes: &[u8]) -> TrainingOutcome {
    BpeTrainer::with_defaults(bytes).into_outcome()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_training() {
        let outcome = train(b"aaabdaaabac");

        assert!(outcome.merge_count() > 0);
        assert_eq!(outcome.vocab_size(), 256 + outcome.merge_count());
        assert_eq!(outcome.decode().unwrap(), b"aaabdaaabac");
    }

    #[test]
    fn test_aaaa() {
        let mut trainer = BpeTrainer::with_defaults(b"aaaa");

        let first = trainer.step().unwrap();
        assert_eq!(first, MergeRecord::new(97, 97, 256));
        assert_eq!(trainer.sequence().as_slice(), &[256, 256]);

        // (256, 256) occurs once, so training stops
        assert_eq!(trainer.step(), None);
        assert_eq!(trainer.state(), TrainerState::Stopped);
        assert_eq!(trainer.history().len(), 1);
    }

    #[test]
    fn test_aaaaa_leaves_trailing_byte() {
        let outcome = train(b"aaaaa");

        assert_eq!(outcome.sequence.as_slice(), &[256, 256, 97]);
        assert_eq!(outcome.merge_count(), 1);
        assert_eq!(outcome.decode().unwrap(), b"aaaaa");
    }

    #[test]
    fn test_no_repeated_pair() {
        let outcome = train(b"abcdef");

        assert_eq!(outcome.token_count(), 6);
        assert_eq!(outcome.merge_count(), 0);
        assert_eq!(outcome.vocab_size(), 256);
    }

    #[test]
    fn test_empty_input() {
        let mut trainer = BpeTrainer::with_defaults(b"");
        assert_eq!(trainer.state(), TrainerState::Running);
        assert_eq!(trainer.step(), None);
        assert_eq!(trainer.state(), TrainerState::Stopped);

        let outcome = trainer.into_outcome();
        assert_eq!(outcome.token_count(), 0);
        assert_eq!(outcome.merge_count(), 0);
        assert!(outcome.decode().unwrap().is_empty());
    }

    #[test]
    fn test_ababab() {
        let mut trainer = BpeTrainer::with_defaults(b"ababab");

        let first = trainer.step().unwrap();
        assert_eq!(first.pair(), (97, 98));
        assert_eq!(first.produced, 256);
        assert_eq!(trainer.sequence().as_slice(), &[256, 256, 256]);

        let second = trainer.step().unwrap();
        assert_eq!(second, MergeRecord::new(256, 256, 257));
        assert_eq!(trainer.sequence().as_slice(), &[257, 256]);

        assert_eq!(trainer.step(), None);

        let decoder = Decoder::new(trainer.history());
        assert_eq!(decoder.decode_token(256).unwrap(), b"ab");
    }

    #[test]
    fn test_stopped_trainer_stays_stopped() {
        let mut trainer = BpeTrainer::with_defaults(b"xy");
        assert_eq!(trainer.config(), &TrainingConfig::default());
        trainer.run();
        assert_eq!(trainer.state(), TrainerState::Stopped);
        assert_eq!(trainer.step(), None);
        assert_eq!(trainer.state(), TrainerState::Stopped);
    }

    #[test]
    fn test_min_frequency_filter() {
        let config = TrainingConfig::builder().min_frequency(4).build().unwrap();
        // (a,b) occurs three times, below the threshold
        let trainer = BpeTrainer::new(config, b"ababab").unwrap();
        assert_eq!(trainer.config().min_frequency, 4);

        let outcome = trainer.into_outcome();
        assert_eq!(outcome.merge_count(), 0);
        assert_eq!(outcome.token_count(), 6);
    }

    #[test]
    fn test_invalid_config() {
        let result = TrainingConfig::builder().min_frequency(1).build();
        assert!(matches!(result, Err(TokenizerError::InvalidConfig(_))));

        let config = TrainingConfig {
            min_frequency: 0,
            ..Default::default()
        };
        assert!(BpeTrainer::new(config, b"aaaa").is_err());
    }
}
