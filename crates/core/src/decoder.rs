//! Expansion of trained tokens back into raw bytes.
//!
//! Decoding walks the merge DAG recursively: a raw byte id is emitted as-is,
//! a merge id expands its left half and then its right half. Produced ids
//! strictly exceed the ids they are built from, so recursion always bottoms
//! out at raw bytes.

use crate::core::{MergeHistory, FIRST_MERGE_ID};
use crate::error::{Result, TokenizerError};

/// Decoder over a finished (or in-progress) merge history.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    history: &'a MergeHistory,
}

impl<'a> Decoder<'a> {
    /// Create a decoder backed by `history`.
    pub fn new(history: &'a MergeHistory) -> Self {
        Self { history }
    }

    /// Decode a single token id into the bytes it stands for.
    pub fn decode_token(&self, token_id: u32) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.decode_token_into(token_id, &mut out)?;
        Ok(out)
    }

    /// Append the bytes of `token_id` to `out`.
    ///
    /// On error `out` may hold a partial expansion; callers should discard it.
    pub fn decode_token_into(&self, token_id: u32, out: &mut Vec<u8>) -> Result<()> {
        if token_id < FIRST_MERGE_ID {
            // Ids below 256 are raw bytes, so the cast is lossless
            out.push(token_id as u8);
            return Ok(());
        }

        let record = self
            .history
            .get_by_id(token_id)
            .ok_or(TokenizerError::UnknownTokenId(token_id))?;

        self.decode_token_into(record.left, out)?;
        self.decode_token_into(record.right, out)
    }

    /// Decode a sequence of token ids, concatenated in order.
    pub fn decode(&self, token_ids: &[u32]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(token_ids.len());
        for &token_id in token_ids {
            self.decode_token_into(token_id, &mut out)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MergeRecord;

    fn sample_history() -> MergeHistory {
        // 256 = "ab", 257 = "abc", 258 = "abab"
        MergeHistory::from_records(vec![
            MergeRecord::new(97, 98, 256),
            MergeRecord::new(256, 99, 257),
            MergeRecord::new(256, 256, 258),
        ])
        .unwrap()
    }

    #[test]
    fn test_decode_raw_byte() {
        let history = MergeHistory::new();
        let decoder = Decoder::new(&history);

        assert_eq!(decoder.decode_token(0).unwrap(), vec![0]);
        assert_eq!(decoder.decode_token(255).unwrap(), vec![255]);
    }

    #[test]
    fn test_decode_nested_merges() {
        let history = sample_history();
        let decoder = Decoder::new(&history);

        assert_eq!(decoder.decode_token(256).unwrap(), b"ab");
        assert_eq!(decoder.decode_token(257).unwrap(), b"abc");
        assert_eq!(decoder.decode_token(258).unwrap(), b"abab");
    }

    #[test]
    fn test_decode_sequence() {
        let history = sample_history();
        let decoder = Decoder::new(&history);

        let bytes = decoder.decode(&[258, 32, 257]).unwrap();
        assert_eq!(bytes, b"abab abc");
        assert!(decoder.decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_unknown_id_fails() {
        let history = sample_history();
        let decoder = Decoder::new(&history);

        let err = decoder.decode_token(259).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownTokenId(259)));

        // One bad id poisons the whole sequence
        assert!(decoder.decode(&[97, 1000, 98]).is_err());
    }
}
