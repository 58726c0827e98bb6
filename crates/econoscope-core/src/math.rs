//! Mathematical utilities for mean estimation
//!
//! This module provides the descriptive statistics and normal log-densities
//! shared by the closed-form estimator and the MCMC sampler.

/// Descriptive statistics over a slice of observations
pub mod descriptive {
    use crate::{Error, Result};

    /// Arithmetic mean. NaN for an empty slice.
    #[inline]
    pub fn mean(data: &[f64]) -> f64 {
        data.iter().sum::<f64>() / data.len() as f64
    }

    /// Sum of squared deviations from `center`
    #[inline]
    pub fn sum_squared_deviations(data: &[f64], center: f64) -> f64 {
        data.iter().map(|&x| (x - center) * (x - center)).sum()
    }

    /// Bessel-corrected variance around a precomputed mean.
    ///
    /// No size check: a single observation gives NaN, which is what the
    /// sampler gets when a caller violates its precondition.
    #[inline]
    pub fn bessel_variance(data: &[f64], mean: f64) -> f64 {
        sum_squared_deviations(data, mean) / (data.len() as f64 - 1.0)
    }

    /// Unbiased sample variance (n - 1 denominator)
    pub fn sample_variance(data: &[f64]) -> Result<f64> {
        Error::require_samples(2, data.len())?;
        Ok(bessel_variance(data, mean(data)))
    }

    /// Sample standard deviation (square root of the unbiased variance)
    pub fn sample_std(data: &[f64]) -> Result<f64> {
        sample_variance(data).map(f64::sqrt)
    }

    /// Standard error of the mean: `std / sqrt(n)`
    #[inline]
    pub fn standard_error(std_dev: f64, n: usize) -> f64 {
        std_dev / (n as f64).sqrt()
    }
}

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        /// `ln(2π)`
        pub const LN_2PI: f64 = 1.837_877_066_409_345_5;

        /// Log-density of N(mu, sigma²) at `x`
        #[inline]
        pub fn ln_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
            let z = (x - mu) / sigma;
            -0.5 * LN_2PI - sigma.ln() - 0.5 * z * z
        }

        /// Joint log-density of i.i.d. N(mu, sigma²) observations.
        ///
        /// `-n/2 ln(2π) - n ln(sigma) - Σ(x - mu)² / (2 sigma²)`
        pub fn joint_ln_pdf(data: &[f64], mu: f64, sigma: f64) -> f64 {
            let n = data.len() as f64;
            let squared = crate::math::descriptive::sum_squared_deviations(data, mu);
            -0.5 * n * LN_2PI - n * sigma.ln() - squared / (2.0 * sigma * sigma)
        }

        /// Log-density of N(mean, std²) up to its additive normalising constant
        #[inline]
        pub fn ln_kernel(x: f64, mean: f64, std: f64) -> f64 {
            let z = (x - mean) / std;
            -0.5 * z * z
        }
    }
}
