//! Similarity scoring: cosine math, match strategies, and the row scanner.
//!
//! One row scan evaluates every reference vector against every candidate in
//! the row, assigns each reference its best-matching candidate column, and
//! produces a single aggregate score for the row under the configured
//! [`MatchMethod`].

pub mod scanner;
pub mod similarity;
pub mod strategy;
pub mod types;


pub use scanner::scan_row;
pub use similarity::cosine_similarity;
pub use strategy::{MatchMethod, RowAccumulator};
pub use types::RowAssignment;
