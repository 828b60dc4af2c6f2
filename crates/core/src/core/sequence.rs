//! Token sequences evolved by training.
//!
//! A `TokenSequence` is treated as a versioned snapshot: applying a merge
//! builds a fresh sequence instead of compacting the old one in place.

use crate::core::merges::Pair;

/// Ordered token ids, one per raw byte before any merge is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<u32>,
}

impl TokenSequence {
    /// Create a sequence with one token per input byte.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            tokens: bytes.iter().map(|&b| u32::from(b)).collect(),
        }
    }

    /// Wrap an existing list of token ids.
    pub fn from_tokens(tokens: Vec<u32>) -> Self {
        Self { tokens }
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token ids as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.tokens
    }

    /// Iterate over token ids.
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.tokens.iter()
    }

    /// Iterate over every adjacent `(seq[i], seq[i + 1])` pair, overlaps included.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.tokens.windows(2).map(|w| (w[0], w[1]))
    }

    /// Replace every non-overlapping occurrence of `pair` with `new_token_id`.
    ///
    /// Scans left to right: a match emits the new id and skips both halves,
    /// anything else is copied through. Returns a new sequence.
    pub fn merge_pair(&self, pair: Pair, new_token_id: u32) -> TokenSequence {
        let mut merged = Vec::with_capacity(self.tokens.len());
        let mut i = 0;

        while i < self.tokens.len() {
            if i + 1 < self.tokens.len()
                && self.tokens[i] == pair.0
                && self.tokens[i + 1] == pair.1
            {
                merged.push(new_token_id);
                i += 2;
            } else {
                merged.push(self.tokens[i]);
                i += 1;
            }
        }

        TokenSequence { tokens: merged }
    }

    /// Consume the sequence and return the raw ids.
    pub fn into_tokens(self) -> Vec<u32> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
