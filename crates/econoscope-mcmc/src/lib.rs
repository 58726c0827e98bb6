//! Metropolis-Hastings posterior for the mean of a sample
//!
//! The model treats observations as i.i.d. N(μ, σ²) with σ fixed at the
//! sample standard deviation and a wide N(50, 30²) prior on μ. A single
//! random-walk chain, warm-started at the sample mean, explores μ; the
//! retained draws are then summarized into a mean, a spread and a 95%
//! credible interval.
//!
//! # Overview
//!
//! - [`run_mcmc`]: draws and acceptance rate
//! - [`summarize_posterior`]: mean, variance and nearest-rank credible interval
//! - [`estimate_from_mcmc`]: both, driven by a validated [`SamplerConfig`]
//!
//! The generator is an explicit value created per call (seeded when a seed
//! is given), so concurrent invocations never share random state.
//!
//! # Example
//!
//! ```rust
//! use econoscope_mcmc::{run_mcmc, summarize_posterior};
//!
//! let data = vec![70.0, 75.0, 80.0];
//! let run = run_mcmc(&data, 1000, 200, 1.0, Some(42));
//! let summary = summarize_posterior(&run.samples).unwrap();
//!
//! assert!((summary.mean - 75.0).abs() < 3.0 * 5.0 / 3f64.sqrt());
//! assert!(summary.interval_lower <= summary.interval_upper);
//! ```

pub mod config;
mod estimate;
pub mod model;
mod sampler;
mod summary;

// Re-exports
pub use config::{SamplerConfig, DEFAULT_BURN_IN, DEFAULT_ITERATIONS, DEFAULT_PROPOSAL_STD};
pub use estimate::{estimate_from_mcmc, McmcEstimate};
pub use model::{
    log_likelihood, log_prior, LogDensity, NormalMeanModel, NormalPrior, DEFAULT_PRIOR_MEAN,
    DEFAULT_PRIOR_STD,
};
pub use sampler::{rng_from_seed, run_mcmc, McmcResult, MetropolisHastings};
pub use summary::{summarize_posterior, PosteriorSummarizer};
