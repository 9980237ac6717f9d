use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use super::error::{DatasetError, DatasetResult};
use super::model::{CandidateRow, Dataset, RawWordEntry, ReferenceSet};

/// Map key designating the foreign reference entry.
pub const REFERENCE_KEY: &str = "foreignword";

impl Dataset {
    /// Parses and validates a dataset from a JSON string.
    ///
    /// The input maps word labels to `{ files, vectors }`; the entry keyed
    /// `"foreignword"` is the reference set and fixes the column count. Native
    /// rows are ordered by label so row indices are deterministic regardless
    /// of map iteration order.
    pub fn from_json_str(input: &str) -> DatasetResult<Self> {
        let mut entries: HashMap<String, RawWordEntry> = serde_json::from_str(input)?;

        let raw_reference =
            entries
                .remove(REFERENCE_KEY)
                .ok_or(DatasetError::MissingReference {
                    key: REFERENCE_KEY,
                })?;

        check_shape(REFERENCE_KEY, &raw_reference)?;
        if raw_reference.vectors.is_empty() {
            return Err(DatasetError::EmptyReference);
        }

        let num_cols = raw_reference.vectors.len();
        let reference = ReferenceSet {
            word: raw_reference
                .word
                .clone()
                .unwrap_or_else(|| REFERENCE_KEY.to_string()),
            files: raw_reference.files.clone(),
            vectors: raw_reference.dense_vectors(),
        };

        let mut labels: Vec<String> = entries.keys().cloned().collect();
        labels.sort();

        let mut rows = Vec::with_capacity(labels.len());
        for label in labels {
            let entry = &entries[&label];
            check_shape(&label, entry)?;

            // Tolerated: the scanner's loop bounds follow the row's actual
            // length. It usually means broken input, so say something.
            if entry.vectors.len() != num_cols {
                warn!(
                    label = %label,
                    expected = num_cols,
                    actual = entry.vectors.len(),
                    "Candidate row column count differs from reference"
                );
            }

            rows.push(CandidateRow {
                label: label.clone(),
                files: entry.files.clone(),
                vectors: entry.dense_vectors(),
            });
        }

        debug!(
            word = %reference.word,
            num_cols = num_cols,
            num_rows = rows.len(),
            "Dataset loaded"
        );

        Ok(Self {
            reference,
            rows,
            num_cols,
        })
    }

    /// Reads and parses a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json_str(&input)
    }
}

fn check_shape(label: &str, entry: &RawWordEntry) -> DatasetResult<()> {
    if entry.files.len() != entry.vectors.len() {
        return Err(DatasetError::ShapeMismatch {
            label: label.to_string(),
            files: entry.files.len(),
            vectors: entry.vectors.len(),
        });
    }
    Ok(())
}
