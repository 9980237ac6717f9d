use serde::Deserialize;

/// JSON wire format for one word's images.
///
/// `vectors` entries may be `null` where an extraction failed; those become
/// NaN and are excluded from similarity math downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWordEntry {
    /// Display label override (the reference entry carries the foreign word
    /// here, since its map key is the fixed reference key).
    #[serde(default)]
    pub word: Option<String>,
    /// Image identifiers, one per column.
    pub files: Vec<String>,
    /// Feature vectors, one per file.
    pub vectors: Vec<Vec<Option<f32>>>,
}

impl RawWordEntry {
    /// Converts wire vectors to dense `f32` rows, mapping `null` to NaN.
    pub fn dense_vectors(&self) -> Vec<Vec<f32>> {
        self.vectors
            .iter()
            .map(|v| v.iter().map(|e| e.unwrap_or(f32::NAN)).collect())
            .collect()
    }
}

/// The foreign word's images: the fixed query set every row is scored against.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    /// The foreign word being matched.
    pub word: String,
    /// Image identifiers, indexed by column.
    pub files: Vec<String>,
    /// Feature vectors, indexed by column.
    pub vectors: Vec<Vec<f32>>,
}

/// One native word's images: a row of candidates competing to match the
/// reference set. The row index is stable for the row's lifetime.
#[derive(Debug, Clone)]
pub struct CandidateRow {
    /// The native word labeling this row.
    pub label: String,
    /// Image identifiers, indexed by column.
    pub files: Vec<String>,
    /// Feature vectors, indexed by column.
    pub vectors: Vec<Vec<f32>>,
}

/// A validated input set, ready for animation.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The foreign reference images.
    pub reference: ReferenceSet,
    /// Native candidate rows, ordered by label.
    pub rows: Vec<CandidateRow>,
    /// Column count, derived from the reference entry.
    pub num_cols: usize,
}

impl Dataset {
    /// Number of candidate rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row labels in row-index order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }
}
