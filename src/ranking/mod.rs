//! Final ranking of candidate rows by recorded similarity.

use std::cmp::Ordering;


/// Ranks row indices by descending score.
///
/// The sort is stable: equal scores (and NaN, which compares as equal here)
/// preserve the original row order. The output is always a permutation of
/// `0..records.len()`.
pub fn rank(records: &[f32]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..records.len()).collect();

    indices.sort_by(|&a, &b| {
        records[b]
            .partial_cmp(&records[a])
            .unwrap_or(Ordering::Equal)
    });

    indices
}
