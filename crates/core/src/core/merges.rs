//! Merge history for BPE.
//!
//! Merges are stored as a flat, append-only list. Because the k-th merge
//! always produces id `256 + k`, the list doubles as a direct index from a
//! produced token id to the record that created it.

use super::{BYTE_VOCAB_SIZE, FIRST_MERGE_ID};
use crate::error::{Result, TokenizerError};
use serde::{Deserialize, Serialize};

/// A pair of adjacent token IDs `(left, right)`.
pub type Pair = (u32, u32);

/// A single accepted merge: every adjacent `(left, right)` became `produced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeRecord {
    /// Left token of the merged pair
    pub left: u32,
    /// Right token of the merged pair
    pub right: u32,
    /// Token ID that replaced the pair
    pub produced: u32,
}

impl MergeRecord {
    /// Create a new merge record.
    pub fn new(left: u32, right: u32, produced: u32) -> Self {
        Self {
            left,
            right,
            produced,
        }
    }

    /// The merged pair as a tuple.
    #[inline]
    pub fn pair(&self) -> Pair {
        (self.left, self.right)
    }
}

/// Ordered, append-only record of accepted merges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeHistory {
    records: Vec<MergeRecord>,
}

impl MergeHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Rebuild a history from previously recorded merges.
    ///
    /// Produced ids must be exactly `256, 257, ...` in order, and each side
    /// of a pair must be a raw byte or the product of an earlier record.
    pub fn from_records(records: Vec<MergeRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            let expected = FIRST_MERGE_ID + index as u32;
            if record.produced != expected {
                return Err(TokenizerError::InvalidMerge(format!(
                    "record {} produces {} but {} was expected",
                    index, record.produced, expected
                )));
            }

            for side in [record.left, record.right] {
                if side >= record.produced {
                    return Err(TokenizerError::InvalidMerge(format!(
                        "record {} merges token {} which is not produced before {}",
                        index, side, record.produced
                    )));
                }
            }
        }

        Ok(Self { records })
    }

    /// Append a merge of `(left, right)` and return the new record.
    ///
    /// The produced id is always the next free id, so produced ids stay
    /// unique and strictly increasing.
    pub fn push(&mut self, left: u32, right: u32) -> MergeRecord {
        let record = MergeRecord::new(left, right, self.next_token_id());
        self.records.push(record);
        record
    }

    /// The id the next accepted merge will receive.
    #[inline]
    pub fn next_token_id(&self) -> u32 {
        FIRST_MERGE_ID + self.records.len() as u32
    }

    /// Get the record at a position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&MergeRecord> {
        self.records.get(index)
    }

    /// Get the record that produced a token id.
    ///
    /// Returns None for raw bytes and for ids no merge has produced yet.
    #[inline]
    pub fn get_by_id(&self, token_id: u32) -> Option<&MergeRecord> {
        let index = token_id.checked_sub(FIRST_MERGE_ID)?;
        self.records.get(index as usize)
    }

    /// Number of accepted merges.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no merge has been accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total distinct token ids in use: raw bytes plus merges.
    #[inline]
    pub fn vocab_size(&self) -> usize {
        BYTE_VOCAB_SIZE + self.records.len()
    }

    /// All records in acceptance order.
    pub fn records(&self) -> &[MergeRecord] {
        &self.records
    }

    /// Iterate over records in acceptance order.
    pub fn iter(&self) -> std::slice::Iter<'_, MergeRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a MergeHistory {
    type Item = &'a MergeRecord;
    type IntoIter = std::slice::Iter<'a, MergeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
