/// Phase of the animation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Not started (or reset after cancellation).
    #[default]
    Idle,
    /// Scanning candidate rows, one per tick.
    Scanning {
        /// Row currently being processed.
        row: usize,
    },
    /// All rows scanned; producing the final ranking.
    Ranking,
    /// Terminal; the sequence may be restarted.
    Done,
}

/// The highest aggregate score seen so far and the row that produced it.
///
/// Updated monotonically: only replaced on a strictly greater score, so NaN
/// scores never take it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BestSoFar {
    /// Row index of the current best (None until a row beats the 0 baseline).
    pub row: Option<usize>,
    /// Best aggregate score.
    pub score: f32,
}

/// Outcome of one completed animation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Aggregate score per row, indexed by row.
    pub records: Vec<f32>,
    /// Row indices ranked by descending score (stable on ties).
    pub order: Vec<usize>,
    /// Best row and score across the run.
    pub best: BestSoFar,
}
