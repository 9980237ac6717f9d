use tracing::debug;

use super::strategy::{MatchMethod, RowAccumulator};
use super::types::RowAssignment;

/// Scans one candidate row against the reference set.
///
/// For each reference index, finds the best-matching candidate in the row and
/// folds its contribution into the row's aggregate score per `method`. The
/// accumulator is fresh per call, so repeated scans of the same row are
/// independent.
///
/// Never fails: invalid vector entries surface as NaN similarities, which
/// lose every comparison, and a short row simply covers fewer candidates.
pub fn scan_row(references: &[Vec<f32>], row: &[Vec<f32>], method: MatchMethod) -> RowAssignment {
    let num_cols = references.len();
    let mut accumulator = RowAccumulator::new(method, num_cols);

    let matches: Vec<usize> = references
        .iter()
        .map(|reference| accumulator.best_match(reference, row))
        .collect();

    let score = accumulator.aggregate();

    debug!(
        num_cols = num_cols,
        row_len = row.len(),
        method = %method,
        score = score,
        "Row scan complete"
    );

    RowAssignment::new(matches, score)
}
