//! Error types for time-series analysis
//!
//! Provides a unified error type for all series-stats crates.

use thiserror::Error;

/// Core error type for time-series analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Batch execution was cancelled before this item started
    #[error("Execution cancelled")]
    ExecutionCancelled,

    /// An individual batch item's operation failed
    #[error("Item failed: {0}")]
    ItemFailure(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty input series
    pub fn empty_series() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a non-positive threshold or period
    pub fn invalid_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive and finite, got {value}"))
    }

    /// Create an error for a zero denominator in a relative change
    pub fn zero_baseline(context: &str) -> Self {
        Self::InvalidParameter(format!(
            "Cannot compute relative change in {context}: baseline value is zero"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("threshold must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: threshold must be positive");

        let err = Error::InsufficientData {
            expected: 24,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 24 samples, got 10"
        );

        let err = Error::ExecutionCancelled;
        assert_eq!(err.to_string(), "Execution cancelled");

        let err = Error::ItemFailure("zone 7 query failed".to_string());
        assert_eq!(err.to_string(), "Item failed: zone 7 query failed");

        let err = Error::Computation("t-distribution rejected df=0".to_string());
        assert_eq!(err.to_string(), "Computation error: t-distribution rejected df=0");

        let err = Error::Execution("thread pool build failed".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool build failed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_series();
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_positive("threshold", -1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: threshold must be positive and finite, got -1.5"
        );

        let err = Error::zero_baseline("percent change");
        assert!(err.to_string().contains("baseline value is zero"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_minimum_sample_guard_pattern() {
        fn check_sample_size(data: &[f64], min_size: usize) -> Result<()> {
            if data.len() < min_size {
                return Err(Error::InsufficientData {
                    expected: min_size,
                    actual: data.len(),
                });
            }
            Ok(())
        }

        assert!(check_sample_size(&[1.0, 2.0], 5).is_err());
        assert!(check_sample_size(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).is_ok());
    }
}
