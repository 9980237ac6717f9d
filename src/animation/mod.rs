//! The staged animation state machine.
//!
//! `Idle → Scanning(row) → Ranking → Done`, one row per tick, paced by a
//! [`Scheduler`] and narrated to a [`RenderSink`]. The controller owns all
//! tracked state (score records, best-so-far, current row); nothing here is
//! module-level or global.

pub mod config;
pub mod controller;
pub mod error;
pub mod renderer;
pub mod scheduler;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{
    AnimationConfig, DEFAULT_COLLAPSE_DELAY_MS, DEFAULT_RANK_DELAY_MS, DEFAULT_RESET_DELAY_MS,
    DEFAULT_RESTART_DELAY_MS, DEFAULT_TICK_INTERVAL_MS,
};
pub use controller::AnimationController;
pub use error::{AnimationError, AnimationResult};
pub use renderer::{LogRenderer, NullRenderer, RenderSink};
#[cfg(any(test, feature = "mock"))]
pub use renderer::{RecordingRenderer, RenderEvent};
#[cfg(any(test, feature = "mock"))]
pub use scheduler::InstantScheduler;
pub use scheduler::{Scheduler, TokioScheduler};
pub use types::{AnimationState, BestSoFar, RunSummary};
