//! Match strategies: how one row's candidates are matched against the
//! reference vectors, and how the row's aggregate score is accumulated.

use std::str::FromStr;

use super::similarity::cosine_similarity;

/// Strategy used to score a candidate row against the reference set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMethod {
    /// Per reference: average similarity over the row; aggregate is the
    /// maximum per-reference average.
    #[default]
    MaxAvg,
    /// Aggregate is the single highest similarity found anywhere in the row.
    MaxMax,
    /// Aggregate is the double average: every similarity in the row summed,
    /// divided by `num_cols` squared.
    AvgAvg,
}

impl FromStr for MatchMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maxavg" => Ok(Self::MaxAvg),
            "maxmax" => Ok(Self::MaxMax),
            "avgavg" => Ok(Self::AvgAvg),
            _ => Err(format!("Unknown match method: {}", s)),
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MaxAvg => write!(f, "maxavg"),
            Self::MaxMax => write!(f, "maxmax"),
            Self::AvgAvg => write!(f, "avgavg"),
        }
    }
}

/// Aggregate-score accumulator for one row scan.
///
/// State is scoped to a single row; construct a fresh accumulator per row.
#[derive(Debug)]
pub struct RowAccumulator {
    method: MatchMethod,
    num_cols: usize,
    aggregate: f32,
    sum_all: f32,
}

impl RowAccumulator {
    pub fn new(method: MatchMethod, num_cols: usize) -> Self {
        Self {
            method,
            num_cols,
            aggregate: 0.0,
            sum_all: 0.0,
        }
    }

    /// Scores one reference vector against the row and folds the result into
    /// the aggregate. Returns the best-matching candidate index.
    ///
    /// Argmax baseline starts at 0.0 with a strict comparison, so an
    /// all-negative or all-NaN row yields index 0.
    pub fn best_match(&mut self, reference: &[f32], row: &[Vec<f32>]) -> usize {
        let mut best_sim = 0.0f32;
        let mut best_index = 0usize;
        let mut sim_sum = 0.0f32;

        for (i, candidate) in row.iter().enumerate() {
            let sim = cosine_similarity(reference, candidate);
            sim_sum += sim;
            self.sum_all += sim;
            if sim > best_sim {
                best_sim = sim;
                best_index = i;
            }
        }

        match self.method {
            MatchMethod::MaxMax => {
                if best_sim > self.aggregate {
                    self.aggregate = best_sim;
                }
            }
            MatchMethod::MaxAvg => {
                // Divides by the column count, not the row length: a short
                // row scores lower rather than renormalizing.
                let avg = sim_sum / self.num_cols as f32;
                if avg > self.aggregate {
                    self.aggregate = avg;
                }
            }
            MatchMethod::AvgAvg => {
                self.aggregate = self.sum_all / (self.num_cols * self.num_cols) as f32;
            }
        }

        best_index
    }

    /// The row's aggregate similarity so far.
    pub fn aggregate(&self) -> f32 {
        self.aggregate
    }
}
