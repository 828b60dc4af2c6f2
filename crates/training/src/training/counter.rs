//! Pair counting for BPE training.
//!
//! A `PairCounter` is built fresh for every training pass from a single
//! left-to-right scan of the current token sequence and dropped once the
//! pass has picked its merge.

use ahash::AHashMap;
use bytepair_core::{MergeCandidate, Pair, TokenSequence};

/// Counter for adjacent pair frequencies in one token sequence.
#[derive(Debug, Clone, Default)]
pub struct PairCounter {
    /// Pair -> frequency count
    pair_counts: AHashMap<Pair, u64>,
}

impl PairCounter {
    /// Create a new empty pair counter.
    pub fn new() -> Self {
        Self {
            pair_counts: AHashMap::new(),
        }
    }

    /// Count every adjacent pair of `sequence`, overlapping pairs included.
    pub fn from_sequence(sequence: &TokenSequence) -> Self {
        let mut counter = Self {
            pair_counts: AHashMap::with_capacity(sequence.len().saturating_sub(1)),
        };

        for pair in sequence.pairs() {
            counter.add_pair(pair);
        }

        counter
    }

    /// Record one more occurrence of `pair`.
    #[inline]
    pub fn add_pair(&mut self, pair: Pair) {
        *self.pair_counts.entry(pair).or_insert(0) += 1;
    }

    /// Get the count for a pair.
    #[inline]
    pub fn get(&self, pair: Pair) -> u64 {
        self.pair_counts.get(&pair).copied().unwrap_or(0)
    }

    /// Pick the most frequent pair.
    ///
    /// Ties go to the lexicographically smallest pair. Returns None when no
    /// pair was counted.
    pub fn best(&self) -> Option<MergeCandidate> {
        self.pair_counts
            .iter()
            .map(|(&pair, &count)| MergeCandidate::new(pair, count))
            .max()
    }

    /// Number of distinct pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pair_counts.len()
    }

    /// Check if no pair was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pair_counts.is_empty()
    }

    /// Total pair occurrences counted.
    pub fn total(&self) -> u64 {
        self.pair_counts.values().sum()
    }

    /// Iterate over `(pair, count)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, u64)> + '_ {
        self.pair_counts.iter().map(|(&pair, &count)| (pair, count))
    }
}
