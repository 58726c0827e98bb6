//! Mean estimation with two flavours of uncertainty
//!
//! - A closed-form estimate: mean, unbiased variance and a normal-approximation
//!   confidence interval ([`compute_basic_estimate`]).
//! - A Bayesian estimate: a random-walk Metropolis-Hastings chain over the
//!   mean ([`run_mcmc`]) reduced to a percentile credible interval
//!   ([`summarize_posterior`]).
//!
//! Both produce the same [`EstimationResult`], so callers can put them side
//! by side. Each workspace crate is re-exported under a short name.
//!
//! ```rust
//! use econoscope::{compute_basic_estimate, run_mcmc, summarize_posterior};
//!
//! let scores = [70.0, 75.0, 80.0];
//! let basic = compute_basic_estimate(&scores).unwrap();
//! let posterior = summarize_posterior(&run_mcmc(&scores, 1000, 200, 1.0, Some(42)).samples).unwrap();
//!
//! assert_eq!(basic.mean, 75.0);
//! assert!((posterior.mean - basic.mean).abs() < 3.0 * 5.0 / 3f64.sqrt());
//! ```

pub use econoscope_confidence as confidence;
pub use econoscope_core as core;
pub use econoscope_mcmc as mcmc;
pub use econoscope_simulate as simulate;

pub use econoscope_confidence::{
    compute_basic_estimate, compute_basic_statistics, ConfidenceInterval, ConfidenceLevel,
    NormalApproxCI, PercentileInterval,
};
pub use econoscope_core::{BasicStatistics, Error, EstimationResult, MeanEstimator, Result};
pub use econoscope_mcmc::{
    estimate_from_mcmc, log_likelihood, log_prior, run_mcmc, summarize_posterior, McmcEstimate,
    McmcResult, MetropolisHastings, SamplerConfig,
};
pub use econoscope_simulate::{
    compare_sample_sizes, generate_scores, generate_scores_seeded, SampleComparison,
    ScoreDistribution,
};
