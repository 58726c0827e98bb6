//! Error types for mean estimation
//!
//! Provides a unified error type for all econoscope crates.

use thiserror::Error;

/// Core error type for estimation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Too few observations (or posterior draws) for a variance or interval
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fail unless `actual >= expected`
    pub fn require_samples(expected: usize, actual: usize) -> Result<()> {
        if actual < expected {
            return Err(Self::InsufficientData { expected, actual });
        }
        Ok(())
    }

    /// Create an error for a parameter that must be finite and positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be finite and positive, got {value}"))
    }

    /// Create an error for a parameter outside an inclusive range
    pub fn out_of_range(name: &str, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidParameter(format!("{name} = {value} is outside [{min}, {max}]"))
    }

    /// Whether this is the insufficient-data error a boundary layer maps to a 4xx
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::InvalidParameter("proposal_std must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: proposal_std must be positive");

        let err = Error::Computation("bad distribution".to_string());
        assert_eq!(err.to_string(), "Computation error: bad distribution");
    }

    #[test]
    fn test_require_samples() {
        assert!(Error::require_samples(2, 2).is_ok());
        assert!(Error::require_samples(2, 100).is_ok());

        match Error::require_samples(2, 1) {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Wrong result: {other:?}"),
        }
    }

    #[test]
    fn test_helper_messages() {
        let err = Error::non_positive("proposal_std", -1.0);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: proposal_std must be finite and positive, got -1"
        );

        let err = Error::out_of_range("true_std", 60.0, 1.0, 50.0);
        assert_eq!(err.to_string(), "Invalid parameter: true_std = 60 is outside [1, 50]");
    }

    #[test]
    fn test_is_insufficient_data() {
        assert!(Error::InsufficientData { expected: 2, actual: 0 }.is_insufficient_data());
        assert!(!Error::InvalidParameter("x".into()).is_insufficient_data());
        assert!(!Error::Computation("x".into()).is_insufficient_data());
    }
}
