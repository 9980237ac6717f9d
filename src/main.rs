//! Vismatch entrypoint: run one full animation over a dataset, logging every
//! stage, and print the final ranking.

use std::sync::Arc;

use vismatch::animation::{AnimationConfig, AnimationController, LogRenderer, TokioScheduler};
use vismatch::config::Config;
use vismatch::dataset::Dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let animation_config = AnimationConfig::from_env()?;

    let dataset = Dataset::from_json_file(&config.data_path)?;
    tracing::info!(
        word = %dataset.reference.word,
        num_rows = dataset.num_rows(),
        num_cols = dataset.num_cols,
        method = %config.match_method,
        "Dataset loaded"
    );

    let controller = AnimationController::new(
        dataset,
        config.match_method,
        animation_config,
        Arc::new(LogRenderer),
        Arc::new(TokioScheduler),
    );

    let summary = controller
        .run()
        .await
        .ok_or_else(|| anyhow::anyhow!("animation cancelled before completion"))?;

    println!("Ranking for '{}':", controller.dataset().reference.word);
    for (place, &row) in summary.order.iter().enumerate() {
        println!(
            "  {:>2}. {:<12} {:.3}",
            place + 1,
            controller.dataset().rows[row].label,
            summary.records[row]
        );
    }

    Ok(())
}
