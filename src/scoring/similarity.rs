//! Cosine similarity tolerant of ragged and partially invalid vectors.

/// Cosine similarity over the overlapping prefix of two vectors.
///
/// Indices where either element is NaN are excluded from the dot product and
/// from both magnitude sums (not treated as zero). If either magnitude comes
/// out zero the result is NaN; callers must treat NaN as "no valid match" —
/// any comparison against it is false, so it can never win an argmax.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dim = a.len().min(b.len());

    let mut dot = 0.0f32;
    let mut norm_a_sq = 0.0f32;
    let mut norm_b_sq = 0.0f32;

    for i in 0..dim {
        let (av, bv) = (a[i], b[i]);
        if av.is_nan() || bv.is_nan() {
            continue;
        }
        dot += av * bv;
        norm_a_sq += av * av;
        norm_b_sq += bv * bv;
    }

    dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt())
}
