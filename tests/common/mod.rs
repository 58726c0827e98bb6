//! Shared utilities for integration tests

use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test writer, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Sample the scores of a small class
pub fn class_scores(n: usize, seed: u64) -> Vec<f64> {
    econoscope::generate_scores_seeded(n, &econoscope::ScoreDistribution::default(), Some(seed))
        .unwrap_or_default()
}
