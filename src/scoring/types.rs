/// Result of scanning one candidate row against the reference set.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAssignment {
    /// Per reference index, the best-matching candidate index in the row.
    pub matches: Vec<usize>,
    /// Aggregate row similarity under the active match method.
    pub score: f32,
}

impl RowAssignment {
    pub fn new(matches: Vec<usize>, score: f32) -> Self {
        Self { matches, score }
    }

    /// Returns `true` if the score is a usable number (not NaN).
    pub fn has_valid_score(&self) -> bool {
        !self.score.is_nan()
    }
}
