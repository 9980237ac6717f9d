use std::sync::Arc;

use super::*;
use crate::dataset::{CandidateRow, Dataset, ReferenceSet};
use crate::scoring::MatchMethod;

fn row(label: &str, vectors: Vec<Vec<f32>>) -> CandidateRow {
    let files = (0..vectors.len()).map(|i| format!("{label}_{i}.jpg")).collect();
    CandidateRow {
        label: label.to_string(),
        files,
        vectors,
    }
}

/// Dataset where row `i` has cosine similarity `alignments[i]` to the single
/// reference vector `[1, 0]`.
fn aligned_dataset(alignments: &[f32]) -> Dataset {
    let rows = alignments
        .iter()
        .enumerate()
        .map(|(i, &cos)| {
            let sin = (1.0 - cos * cos).max(0.0).sqrt();
            row(&format!("word{i}"), vec![vec![cos, sin]])
        })
        .collect();

    Dataset {
        reference: ReferenceSet {
            word: "fuglo".to_string(),
            files: vec!["f0.jpg".to_string()],
            vectors: vec![vec![1.0, 0.0]],
        },
        rows,
        num_cols: 1,
    }
}

fn identity_dataset(num_rows: usize, num_cols: usize) -> Dataset {
    let basis = |c: usize| -> Vec<f32> {
        (0..num_cols).map(|d| if d == c { 1.0 } else { 0.0 }).collect()
    };
    let vectors: Vec<Vec<f32>> = (0..num_cols).map(basis).collect();

    Dataset {
        reference: ReferenceSet {
            word: "fuglo".to_string(),
            files: (0..num_cols).map(|i| format!("f{i}.jpg")).collect(),
            vectors: vectors.clone(),
        },
        rows: (0..num_rows)
            .map(|i| row(&format!("word{i}"), vectors.clone()))
            .collect(),
        num_cols,
    }
}

fn controller(dataset: Dataset, method: MatchMethod) -> (AnimationController, Arc<RecordingRenderer>) {
    let renderer = Arc::new(RecordingRenderer::new());
    let controller = AnimationController::new(
        dataset,
        method,
        AnimationConfig::for_testing(),
        renderer.clone(),
        Arc::new(InstantScheduler::new()),
    );
    (controller, renderer)
}

#[tokio::test]
async fn test_full_run_scans_every_row_once() {
    let (controller, renderer) = controller(identity_dataset(10, 3), MatchMethod::MaxMax);

    let summary = controller.run().await.expect("run should complete");

    assert_eq!(summary.records.len(), 10);
    assert_eq!(summary.order.len(), 10);
    assert_eq!(controller.state(), AnimationState::Done);

    let score_updates = renderer
        .events()
        .iter()
        .filter(|e| matches!(e, RenderEvent::ScoreUpdate { .. }))
        .count();
    assert_eq!(score_updates, 10);
}

#[tokio::test]
async fn test_ranked_order_is_permutation() {
    let (controller, _renderer) = controller(
        aligned_dataset(&[0.3, 0.9, 0.1, 0.7, 0.5]),
        MatchMethod::MaxMax,
    );

    let summary = controller.run().await.expect("run should complete");
    let mut order = summary.order.clone();
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_ranking_is_descending() {
    let (controller, _renderer) = controller(
        aligned_dataset(&[0.3, 0.9, 0.1, 0.7, 0.5]),
        MatchMethod::MaxMax,
    );

    let summary = controller.run().await.expect("run should complete");
    assert_eq!(summary.order, vec![1, 3, 4, 0, 2]);
}

#[tokio::test]
async fn test_best_so_far_updates_only_on_strict_improvement() {
    let (controller, renderer) = controller(
        aligned_dataset(&[0.5, 0.9, 0.9, 0.2]),
        MatchMethod::MaxMax,
    );

    let summary = controller.run().await.expect("run should complete");

    // Row 2 ties row 1: no third best-score event.
    let best_events: Vec<_> = renderer
        .events()
        .into_iter()
        .filter_map(|e| match e {
            RenderEvent::NewBestScore { row, .. } => Some(row),
            _ => None,
        })
        .collect();
    assert_eq!(best_events, vec![0, 1]);
    assert_eq!(summary.best.row, Some(1));
    assert!((summary.best.score - 0.9).abs() < 1e-5);
}

#[tokio::test]
async fn test_event_order_within_one_row() {
    let (controller, renderer) = controller(identity_dataset(1, 2), MatchMethod::MaxMax);

    controller.run().await.expect("run should complete");

    let events = renderer.events();
    assert_eq!(
        events,
        vec![
            RenderEvent::RowAssignment {
                row: 0,
                column: 0,
                target_column: 0
            },
            RenderEvent::RowAssignment {
                row: 0,
                column: 1,
                target_column: 1
            },
            RenderEvent::ScoreUpdate { score: 1.0 },
            RenderEvent::NewBestScore { row: 0, score: 1.0 },
            RenderEvent::ReferenceReset,
            RenderEvent::RowCollapsed { row: 0 },
            RenderEvent::AnimationComplete {
                order: vec![0],
                best_score: 1.0
            },
            RenderEvent::ReadyToRestart,
        ]
    );
}

#[tokio::test]
async fn test_every_row_collapses_in_order() {
    let (controller, renderer) = controller(identity_dataset(4, 2), MatchMethod::MaxAvg);

    controller.run().await.expect("run should complete");

    let collapsed: Vec<_> = renderer
        .events()
        .into_iter()
        .filter_map(|e| match e {
            RenderEvent::RowCollapsed { row } => Some(row),
            _ => None,
        })
        .collect();
    assert_eq!(collapsed, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_malformed_row_still_gets_a_record() {
    // Middle row is all zero vectors: every similarity is NaN. Under MaxAvg
    // the NaN average loses to the 0 baseline, so the row records 0 and the
    // sequence still reaches ranking with one record per row.
    let mut dataset = aligned_dataset(&[0.9, 0.0, 0.4]);
    dataset.rows[1] = row("broken", vec![vec![0.0, 0.0]]);

    let (controller, _renderer) = controller(dataset, MatchMethod::MaxAvg);
    let summary = controller.run().await.expect("run should complete");

    assert_eq!(summary.records.len(), 3);
    assert_eq!(summary.records[1], 0.0);
    assert_eq!(summary.order.len(), 3);
}

#[tokio::test]
async fn test_nan_score_never_becomes_best() {
    // AvgAvg propagates NaN into the aggregate; best-so-far must ignore it.
    let mut dataset = aligned_dataset(&[0.4, 0.8]);
    dataset.rows[0] = row("broken", vec![vec![0.0, 0.0]]);

    let (controller, _renderer) = controller(dataset, MatchMethod::AvgAvg);
    let summary = controller.run().await.expect("run should complete");

    assert!(summary.records[0].is_nan());
    assert_eq!(summary.best.row, Some(1));
}

#[tokio::test]
async fn test_restart_resets_tracked_state() {
    let (controller, renderer) = controller(
        aligned_dataset(&[0.6, 0.2, 0.8]),
        MatchMethod::MaxMax,
    );

    let first = controller.run().await.expect("first run");
    renderer.clear();
    let second = controller.run().await.expect("second run");

    assert_eq!(first, second);

    // Best-score events replay from scratch, proving best-so-far was reset.
    let best_rows: Vec<_> = renderer
        .events()
        .into_iter()
        .filter_map(|e| match e {
            RenderEvent::NewBestScore { row, .. } => Some(row),
            _ => None,
        })
        .collect();
    assert_eq!(best_rows, vec![0, 2]);
}

/// Sink that requests cancellation when the first row collapses.
#[derive(Default)]
struct CancelOnFirstCollapse {
    target: std::sync::OnceLock<Arc<AnimationController>>,
    inner: RecordingRenderer,
}

impl RenderSink for CancelOnFirstCollapse {
    fn on_row_collapsed(&self, row: usize) {
        self.inner.on_row_collapsed(row);
        if row == 0 {
            if let Some(controller) = self.target.get() {
                controller.cancel();
            }
        }
    }

    fn on_animation_complete(&self, order: &[usize], best_score: f32) {
        self.inner.on_animation_complete(order, best_score);
    }
}

#[tokio::test]
async fn test_cancel_stops_between_ticks() {
    let sink = Arc::new(CancelOnFirstCollapse::default());
    let controller = Arc::new(AnimationController::new(
        identity_dataset(5, 2),
        MatchMethod::MaxMax,
        AnimationConfig::for_testing(),
        sink.clone(),
        Arc::new(InstantScheduler::new()),
    ));
    sink.target.set(controller.clone()).ok().expect("set once");

    let outcome = controller.run().await;

    // Row 0 completes atomically; the cancel lands before row 1's tick.
    assert!(outcome.is_none());
    assert_eq!(controller.state(), AnimationState::Idle);
    assert!((controller.records()[0] - 1.0).abs() < 1e-5);
    let completed = sink
        .inner
        .events()
        .iter()
        .any(|e| matches!(e, RenderEvent::AnimationComplete { .. }));
    assert!(!completed);
}

#[tokio::test]
async fn test_run_after_cancel_replays_from_scratch() {
    let sink = Arc::new(CancelOnFirstCollapse::default());
    let controller = Arc::new(AnimationController::new(
        identity_dataset(3, 2),
        MatchMethod::MaxMax,
        AnimationConfig::for_testing(),
        sink.clone(),
        Arc::new(InstantScheduler::new()),
    ));
    sink.target.set(controller.clone()).ok().expect("set once");

    assert!(controller.run().await.is_none());

    // Rerun: reset() clears the stale cancel flag, row 0 rescans, and the
    // sink cancels again at the same point.
    assert!(controller.run().await.is_none());
    assert!((controller.records()[0] - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn test_start_guard_rejects_second_concurrent_run() {
    let (controller, _renderer) = controller(identity_dataset(10, 2), MatchMethod::MaxMax);
    let controller = Arc::new(controller);

    // `running` flips synchronously in start(), so the second call takes the
    // no-op guard path regardless of task scheduling.
    let first = controller.start();
    let second = controller.start();

    let (first_out, second_out) = tokio::join!(first, second);
    assert!(first_out.expect("join").is_some());
    assert!(second_out.expect("join").is_none());
}

#[tokio::test]
async fn test_identity_row_scores_one_under_maxmax() {
    let (controller, _renderer) = controller(identity_dataset(1, 2), MatchMethod::MaxMax);
    let summary = controller.run().await.expect("run should complete");
    assert!((summary.records[0] - 1.0).abs() < 1e-5);
}

#[test]
fn test_animation_config_validate_rejects_bad_pacing() {
    let config = AnimationConfig {
        collapse_delay: std::time::Duration::from_millis(5000),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(AnimationError::InvalidPacing { .. })
    ));
}

#[test]
fn test_animation_config_defaults_are_valid() {
    assert!(AnimationConfig::default().validate().is_ok());
}
