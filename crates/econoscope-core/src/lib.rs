//! Core traits and types for mean estimation
//!
//! This crate holds the pieces shared by the closed-form estimator and the
//! Metropolis-Hastings sampler: the error type, descriptive statistics,
//! normal log-densities and the [`EstimationResult`] both paths produce.
//!
//! # Example
//!
//! ```rust
//! use econoscope_core::{math::descriptive, BasicStatistics};
//!
//! let data = vec![70.0, 75.0, 80.0];
//! assert_eq!(descriptive::mean(&data), 75.0);
//!
//! let stats = BasicStatistics::from_sample(&data).unwrap();
//! assert_eq!(stats.variance, 25.0);
//! ```

pub mod error;
pub mod math;
pub mod traits;
pub mod types;

// Re-export core types
pub use error::{Error, Result};
pub use traits::MeanEstimator;
pub use types::{BasicStatistics, EstimationResult};
