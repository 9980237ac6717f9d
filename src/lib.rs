//! Vismatch library crate (used by the binary and integration tests).
//!
//! Animates a comparison between a "foreign" reference image set and rows of
//! "native" candidate images, ranking the rows by vector similarity. The
//! crate is the animation core only: similarity math, match strategies, the
//! row scanner, the staged animation state machine, and the final ranking.
//! Actual display is delegated to a [`RenderSink`] collaborator.
//!
//! # Public API Surface
//!
//! ## Scoring
//! - [`cosine_similarity`] - NaN-tolerant cosine over the overlapping prefix
//! - [`MatchMethod`] - maxavg / maxmax / avgavg strategy selection
//! - [`scan_row`], [`RowAssignment`] - one row evaluated against the references
//!
//! ## Animation
//! - [`AnimationController`] - `Idle → Scanning → Ranking → Done` sequencing
//! - [`AnimationConfig`] - stage pacing (tick, reset, collapse, rank, restart)
//! - [`Scheduler`], [`TokioScheduler`] - timer seam
//! - [`RenderSink`], [`LogRenderer`], [`NullRenderer`] - display seam
//!
//! ## Data & Config
//! - [`Dataset`], [`ReferenceSet`], [`CandidateRow`] - validated JSON input
//! - [`Config`], [`ConfigError`] - environment-backed settings
//!
//! ## Ranking
//! - [`rank`] - stable descending order of row indices by score
//!
//! ## Test/Mock Support
//! Mock implementations (`InstantScheduler`, `RecordingRenderer`) are
//! available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod animation;
pub mod config;
pub mod dataset;
pub mod ranking;
pub mod scoring;

pub use animation::{
    AnimationConfig, AnimationController, AnimationError, AnimationResult, AnimationState,
    BestSoFar, DEFAULT_COLLAPSE_DELAY_MS, DEFAULT_RANK_DELAY_MS, DEFAULT_RESET_DELAY_MS,
    DEFAULT_RESTART_DELAY_MS, DEFAULT_TICK_INTERVAL_MS, LogRenderer, NullRenderer, RenderSink,
    RunSummary, Scheduler, TokioScheduler,
};
#[cfg(any(test, feature = "mock"))]
pub use animation::{InstantScheduler, RecordingRenderer, RenderEvent};

pub use config::{Config, ConfigError};
pub use dataset::{
    CandidateRow, Dataset, DatasetError, DatasetResult, REFERENCE_KEY, RawWordEntry, ReferenceSet,
};
pub use ranking::rank;
pub use scoring::{MatchMethod, RowAccumulator, RowAssignment, cosine_similarity, scan_row};
