//! Synthetic score data for exercising the mean estimators
//!
//! [`generate_scores`] draws clamped normal scores; [`compare_sample_sizes`]
//! runs the basic estimator over a ladder of sample sizes to show how the
//! interval narrows as n grows.
//!
//! ```rust
//! use econoscope_simulate::{compare_sample_sizes, ScoreDistribution, DEFAULT_SAMPLE_SIZES};
//!
//! let rows = compare_sample_sizes(&DEFAULT_SAMPLE_SIZES, &ScoreDistribution::default()).unwrap();
//! assert_eq!(rows[0].label, "n=10");
//! assert!(rows[4].estimation.interval_width() < rows[0].estimation.interval_width());
//! ```

mod comparison;
mod generator;

pub use comparison::{
    compare_sample_sizes, compare_sample_sizes_with, SampleComparison, DEFAULT_SAMPLE_SIZES,
    SEED_MULTIPLIER,
};
pub use generator::{
    generate_scores, generate_scores_seeded, ScoreDistribution, DEFAULT_TRUE_MEAN,
    DEFAULT_TRUE_STD,
};
