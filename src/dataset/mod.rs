//! Input data: word labels mapped to image files and feature vectors.
//!
//! The JSON input carries one entry per word; the `"foreignword"` entry is
//! the reference (query) set, every other entry becomes one candidate row.
//! `num_cols` is derived from the reference entry and assumed consistent
//! across rows (deviations are tolerated with a warning).

pub mod error;
pub mod loader;
pub mod model;


pub use error::{DatasetError, DatasetResult};
pub use loader::REFERENCE_KEY;
pub use model::{CandidateRow, Dataset, RawWordEntry, ReferenceSet};
