//! Confidence and credible intervals for the mean
//!
//! This crate provides the two interval constructions used by the
//! estimation engine:
//!
//! - **Normal approximation**: `mean ± z · SE` with a fixed z table
//!   (0.90 → 1.645, 0.95 → 1.96, 0.99 → 2.576). Levels outside the table
//!   silently use 1.96.
//! - **Percentile intervals**: nearest-rank order statistics of a set of
//!   draws, used for posterior credible intervals.
//!
//! # Examples
//!
//! ```rust
//! use econoscope_confidence::{IntervalEstimator, NormalApproxCI, PercentileInterval};
//!
//! let sample = vec![70.0, 75.0, 80.0];
//! let ci = NormalApproxCI::new(0.95).interval(&sample).unwrap();
//! assert!(ci.contains(75.0));
//!
//! let draws: Vec<f64> = (0..1000).map(|i| i as f64).collect();
//! let credible = PercentileInterval::default().interval(&draws).unwrap();
//! assert_eq!((credible.lower, credible.upper), (25.0, 975.0));
//! ```

pub mod api;
mod asymptotic;
mod percentile;
mod traits;
mod types;

// Re-exports
pub use api::{
    compute_basic_estimate, compute_basic_estimate_with_level, compute_basic_statistics,
    DEFAULT_CONFIDENCE_LEVEL,
};
pub use asymptotic::{z_interval, CriticalValue, NormalApproxCI};
pub use percentile::{sorted_copy, PercentileInterval};
pub use traits::IntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel, CredibleInterval, DEFAULT_Z};
