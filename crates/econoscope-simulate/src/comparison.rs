//! Estimator behaviour across sample sizes
//!
//! Each size n gets its own sample drawn with seed `n * 42`, so a
//! comparison is reproducible and adding a size never perturbs the others.

use crate::generator::{generate_scores, ScoreDistribution};
use econoscope_confidence::NormalApproxCI;
use econoscope_core::{Error, EstimationResult, MeanEstimator, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Sizes compared when the caller gives none
pub const DEFAULT_SAMPLE_SIZES: [usize; 5] = [10, 30, 100, 300, 1000];

/// Seed multiplier applied to each sample size
pub const SEED_MULTIPLIER: u64 = 42;

/// One row of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleComparison {
    /// `"n=<size>"`
    pub label: String,
    pub estimation: EstimationResult,
}

impl SampleComparison {
    pub fn sample_size(&self) -> usize {
        self.estimation.sample_size
    }
}

/// Compare the 95% normal-approximation estimate across `sizes`.
///
/// Results come back in input order. Any size below two fails the whole
/// call with `Error::InsufficientData` before a sample is drawn.
pub fn compare_sample_sizes(
    sizes: &[usize],
    distribution: &ScoreDistribution,
) -> Result<Vec<SampleComparison>> {
    compare_sample_sizes_with(sizes, distribution, &NormalApproxCI::default())
}

/// [`compare_sample_sizes`] with any mean estimator
#[instrument(skip(sizes, distribution, estimator), fields(sizes = sizes.len(), estimator = estimator.name()))]
pub fn compare_sample_sizes_with<E>(
    sizes: &[usize],
    distribution: &ScoreDistribution,
    estimator: &E,
) -> Result<Vec<SampleComparison>>
where
    E: MeanEstimator + ?Sized,
{
    let min = estimator.min_samples();
    if let Some(&n) = sizes.iter().find(|&&n| n < min) {
        return Err(Error::InsufficientData {
            expected: min,
            actual: n,
        });
    }

    sizes
        .iter()
        .map(|&n| {
            let mut rng = StdRng::seed_from_u64((n as u64).wrapping_mul(SEED_MULTIPLIER));
            let scores = generate_scores(n, distribution, &mut rng)?;
            let estimation = estimator.estimate(&scores)?;

            debug!(
                "n={}: mean {:.4}, interval width {:.4}",
                n,
                estimation.mean,
                estimation.interval_width()
            );

            Ok(SampleComparison {
                label: format!("n={n}"),
                estimation,
            })
        })
        .collect()
}
