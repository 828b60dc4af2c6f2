//! Selection order for BPE merge candidates.
//!
//! Every training pass picks the maximum candidate under the order defined
//! here, so the choice never depends on hash map iteration order.

use crate::core::merges::Pair;
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of token IDs to merge
    pub pair: Pair,
    /// The frequency/count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

// Higher count wins; on equal counts the lexicographically smaller pair wins.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_count_wins() {
        let low = MergeCandidate::new((0, 1), 10);
        let high = MergeCandidate::new((5, 5), 20);

        assert!(high > low);
    }

    #[test]
    fn test_tie_prefers_smaller_pair() {
        let candidates = [
            MergeCandidate::new((2, 3), 15),
            MergeCandidate::new((1, 9), 15),
            MergeCandidate::new((1, 2), 15),
            MergeCandidate::new((0, 1), 4),
        ];

        let best = candidates.iter().max().unwrap();
        assert_eq!(best.pair, (1, 2));
    }

    #[test]
    fn test_max_is_order_independent() {
        let mut candidates = vec![
            MergeCandidate::new((300, 1), 7),
            MergeCandidate::new((299, 400), 7),
            MergeCandidate::new((97, 98), 3),
        ];

        let forward = *candidates.iter().max().unwrap();
        candidates.reverse();
        let backward = *candidates.iter().max().unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward.pair, (299, 400));
    }
}
