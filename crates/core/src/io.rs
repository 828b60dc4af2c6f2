//! Saving and loading merge histories.
//!
//! A history is written as a single JSON document holding a format version
//! and the merge records in acceptance order. Loading re-validates the
//! records, so a hand-edited file cannot introduce a cycle.

use crate::core::{MergeHistory, MergeRecord};
use crate::error::{Result, TokenizerError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Current on-disk format version.
pub const FORMAT_VERSION: &str = "1.0.0";

/// Serialized form of a merge history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedHistory {
    /// Format version
    pub version: String,
    /// Merge records in acceptance order
    pub merges: Vec<MergeRecord>,
}

impl From<&MergeHistory> for SerializedHistory {
    fn from(history: &MergeHistory) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            merges: history.records().to_vec(),
        }
    }
}

impl TryFrom<SerializedHistory> for MergeHistory {
    type Error = TokenizerError;

    fn try_from(serialized: SerializedHistory) -> Result<Self> {
        MergeHistory::from_records(serialized.merges)
    }
}

impl MergeHistory {
    /// Write the history to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &SerializedHistory::from(self))?;
        Ok(())
    }

    /// Read a history previously written by [`MergeHistory::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedHistory = serde_json::from_reader(reader)?;
        serialized.try_into()
    }
}
