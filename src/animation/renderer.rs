//! Renderer collaborator: the animation core computes, the sink displays.
//!
//! The core never renders anything itself. Each state change is pushed to a
//! [`RenderSink`]; implementations may move DOM nodes, draw to a canvas, or
//! just log. All methods default to no-ops so sinks only implement what they
//! care about.

use tracing::{debug, info};

/// Notification surface for animation state changes.
pub trait RenderSink: Send + Sync {
    /// A reference image (`column`) was matched to `target_column` in `row`.
    fn on_row_assignment(&self, row: usize, column: usize, target_column: usize) {
        let _ = (row, column, target_column);
    }

    /// The just-scanned row's aggregate score.
    fn on_score_update(&self, score: f32) {
        let _ = score;
    }

    /// A new best-so-far score was found at `row`.
    fn on_new_best_score(&self, row: usize, score: f32) {
        let _ = (row, score);
    }

    /// The reference images returned to their original slots.
    fn on_reference_reset(&self) {}

    /// `row` was visually retired.
    fn on_row_collapsed(&self, row: usize) {
        let _ = row;
    }

    /// All rows processed; `order` is the final ranking (best first).
    fn on_animation_complete(&self, order: &[usize], best_score: f32) {
        let _ = (order, best_score);
    }

    /// The sequence is idle again and may be restarted.
    fn on_ready_to_restart(&self) {}
}

/// Sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {}

/// Sink that logs notifications through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl RenderSink for LogRenderer {
    fn on_row_assignment(&self, row: usize, column: usize, target_column: usize) {
        debug!(row, column, target_column, "Image moved to best match");
    }

    fn on_score_update(&self, score: f32) {
        debug!(score, "Row score updated");
    }

    fn on_new_best_score(&self, row: usize, score: f32) {
        info!(row, score, "New best match");
    }

    fn on_reference_reset(&self) {
        debug!("Reference images reset");
    }

    fn on_row_collapsed(&self, row: usize) {
        debug!(row, "Row collapsed");
    }

    fn on_animation_complete(&self, order: &[usize], best_score: f32) {
        info!(?order, best_score, "Animation complete");
    }

    fn on_ready_to_restart(&self) {
        info!("Ready to restart");
    }
}

/// One recorded notification (mock sink).
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    RowAssignment {
        row: usize,
        column: usize,
        target_column: usize,
    },
    ScoreUpdate {
        score: f32,
    },
    NewBestScore {
        row: usize,
        score: f32,
    },
    ReferenceReset,
    RowCollapsed {
        row: usize,
    },
    AnimationComplete {
        order: Vec<usize>,
        best_score: f32,
    },
    ReadyToRestart,
}

/// Sink that records every notification, for assertions in tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: parking_lot::Mutex<Vec<RenderEvent>>,
}

#[cfg(any(test, feature = "mock"))]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events, in notification order.
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn push(&self, event: RenderEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(any(test, feature = "mock"))]
impl RenderSink for RecordingRenderer {
    fn on_row_assignment(&self, row: usize, column: usize, target_column: usize) {
        self.push(RenderEvent::RowAssignment {
            row,
            column,
            target_column,
        });
    }

    fn on_score_update(&self, score: f32) {
        self.push(RenderEvent::ScoreUpdate { score });
    }

    fn on_new_best_score(&self, row: usize, score: f32) {
        self.push(RenderEvent::NewBestScore { row, score });
    }

    fn on_reference_reset(&self) {
        self.push(RenderEvent::ReferenceReset);
    }

    fn on_row_collapsed(&self, row: usize) {
        self.push(RenderEvent::RowCollapsed { row });
    }

    fn on_animation_complete(&self, order: &[usize], best_score: f32) {
        self.push(RenderEvent::AnimationComplete {
            order: order.to_vec(),
            best_score,
        });
    }

    fn on_ready_to_restart(&self) {
        self.push(RenderEvent::ReadyToRestart);
    }
}
