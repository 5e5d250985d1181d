//! Reference table: the name-indexed historical dataset
//!
//! Loaded once at startup and shared read-only for the life of the
//! process. Any problem with the source CSV is fatal; nothing here is
//! recoverable per request.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use crate::models::PlayerRecord;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed dataset {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// Immutable name-keyed store of historical player stat lines.
#[derive(Debug)]
pub struct ReferenceTable {
    players: HashMap<String, PlayerRecord>,
}

impl ReferenceTable {
    /// Build the table from the source CSV.
    ///
    /// Rows are restricted to the known column set (extra columns such
    /// as the 3P stats are ignored; a missing known column is an
    /// error). Exact duplicate rows are dropped first, then rows
    /// sharing a name are collapsed to the last occurrence in source
    /// order.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let mut seen = HashSet::new();
        let mut players = HashMap::new();
        for row in reader.deserialize::<PlayerRecord>() {
            let record = row.map_err(|source| DatasetError::Csv {
                path: path.display().to_string(),
                source,
            })?;
            // Repeats of an already-seen full row don't count as a
            // later occurrence of the name.
            if !seen.insert(record.dedup_key()) {
                continue;
            }
            players.insert(record.name.clone(), record);
        }

        Ok(Self { players })
    }

    pub fn get(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.get(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
