use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::ranking::rank;
use crate::scoring::{MatchMethod, scan_row};

use super::config::AnimationConfig;
use super::renderer::RenderSink;
use super::scheduler::Scheduler;
use super::types::{AnimationState, BestSoFar, RunSummary};

/// Sequences row-by-row scanning across the whole dataset.
///
/// One logical thread of control: rows are scanned one per tick, tracked
/// state is mutated only from within [`run`](Self::run), and the scheduler
/// provides the suspension points between stages. The renderer is notified
/// at every step; it never calls back into the controller.
pub struct AnimationController {
    dataset: Dataset,
    method: MatchMethod,
    config: AnimationConfig,
    renderer: Arc<dyn RenderSink>,
    scheduler: Arc<dyn Scheduler>,
    state: Mutex<AnimationState>,
    records: Mutex<Vec<f32>>,
    best: Mutex<BestSoFar>,
    cancel_requested: AtomicBool,
    running: AtomicBool,
}

impl AnimationController {
    pub fn new(
        dataset: Dataset,
        method: MatchMethod,
        config: AnimationConfig,
        renderer: Arc<dyn RenderSink>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            dataset,
            method,
            config,
            renderer,
            scheduler,
            state: Mutex::new(AnimationState::Idle),
            records: Mutex::new(Vec::new()),
            best: Mutex::new(BestSoFar::default()),
            cancel_requested: AtomicBool::new(false),
            running: AtomicBool::new(false),
        }
    }

    /// Current phase of the sequence.
    pub fn state(&self) -> AnimationState {
        *self.state.lock()
    }

    /// Per-row scores recorded so far (unscanned rows hold 0).
    pub fn records(&self) -> Vec<f32> {
        self.records.lock().clone()
    }

    /// Best row and score seen so far.
    pub fn best(&self) -> BestSoFar {
        *self.best.lock()
    }

    /// The dataset being animated.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Requests cancellation; takes effect between ticks, never mid-row.
    pub fn cancel(&self) {
        self.cancel_requested.store(true, Ordering::Release);
    }

    /// Runs the full sequence: scan every row, then rank.
    ///
    /// Returns `None` if cancelled before ranking. Restartable: every call
    /// resets all tracked state first, so a controller that reached `Done`
    /// (or was cancelled) replays the whole sequence from scratch.
    pub async fn run(&self) -> Option<RunSummary> {
        self.reset();
        let num_rows = self.dataset.num_rows();

        info!(
            word = %self.dataset.reference.word,
            num_rows = num_rows,
            num_cols = self.dataset.num_cols,
            method = %self.method,
            "Animation starting"
        );

        for row in 0..num_rows {
            if self.cancel_requested.load(Ordering::Acquire) {
                info!(row, "Animation cancelled between ticks");
                *self.state.lock() = AnimationState::Idle;
                return None;
            }

            *self.state.lock() = AnimationState::Scanning { row };
            self.process_row(row);

            self.scheduler.sleep(self.config.reset_delay).await;
            self.renderer.on_reference_reset();

            let to_collapse = self
                .config
                .collapse_delay
                .saturating_sub(self.config.reset_delay);
            self.scheduler.sleep(to_collapse).await;
            self.renderer.on_row_collapsed(row);

            if row + 1 < num_rows {
                let to_next_tick = self
                    .config
                    .tick_interval
                    .saturating_sub(self.config.collapse_delay);
                self.scheduler.sleep(to_next_tick).await;
            } else {
                self.scheduler.sleep(self.config.rank_delay).await;
            }
        }

        *self.state.lock() = AnimationState::Ranking;
        let records = self.records.lock().clone();
        let order = rank(&records);
        let best = *self.best.lock();

        self.renderer.on_animation_complete(&order, best.score);

        self.scheduler.sleep(self.config.restart_delay).await;
        self.renderer.on_ready_to_restart();
        *self.state.lock() = AnimationState::Done;

        info!(
            best_row = ?best.row,
            best_score = best.score,
            "Animation complete"
        );

        Some(RunSummary {
            records,
            order,
            best,
        })
    }

    /// Spawns [`run`](Self::run) as a background task.
    ///
    /// No-op (immediately resolving to `None`) if a run is already active.
    pub fn start(self: &Arc<Self>) -> tokio::task::JoinHandle<Option<RunSummary>> {
        if self.running.swap(true, Ordering::AcqRel) {
            return tokio::spawn(async { None });
        }

        let controller = Arc::clone(self);
        tokio::spawn(async move {
            let summary = controller.run().await;
            controller.running.store(false, Ordering::Release);
            summary
        })
    }

    /// Scans one row and pushes the results to the renderer.
    ///
    /// Synchronous and atomic: once a scan starts it always completes, and
    /// the row always receives exactly one recorded score (NaN included), so
    /// the sequence reaches ranking after exactly `num_rows` scans.
    fn process_row(&self, row: usize) {
        let candidate = &self.dataset.rows[row];
        let assignment = scan_row(&self.dataset.reference.vectors, &candidate.vectors, self.method);

        for (column, &target_column) in assignment.matches.iter().enumerate() {
            self.renderer.on_row_assignment(row, column, target_column);
        }
        self.renderer.on_score_update(assignment.score);

        {
            let mut best = self.best.lock();
            // Strict comparison: ties keep the earlier row, NaN never wins.
            if assignment.score > best.score {
                *best = BestSoFar {
                    row: Some(row),
                    score: assignment.score,
                };
                self.renderer.on_new_best_score(row, assignment.score);
            }
        }

        self.records.lock()[row] = assignment.score;

        debug!(
            row = row,
            label = %candidate.label,
            score = assignment.score,
            "Row processed"
        );
    }

    fn reset(&self) {
        *self.records.lock() = vec![0.0; self.dataset.num_rows()];
        *self.best.lock() = BestSoFar::default();
        self.cancel_requested.store(false, Ordering::Release);
        *self.state.lock() = AnimationState::Idle;
    }
}
