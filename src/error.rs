//! Error types and result utilities for signal operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`SignalError`].
pub type SignalResult<T> = Result<T, SignalError>;

/// Error types that can occur while generating, transforming or rendering signals.
#[derive(Error, Debug)]
pub enum SignalError {
    /// Error that occurs when invalid parameters are provided to an operation.
    ///
    /// This includes non-positive durations or sampling rates, non-finite shifts
    /// and scale factors, and unsorted interpolation control points.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),

    /// Error that occurs when two sequences that must be paired differ in length.
    ///
    /// This happens when a signal is passed alongside a time base it was not
    /// sampled on.
    #[error("Length mismatch error: expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Length of the reference sequence (usually the time base).
        expected: usize,
        /// Length of the offending sequence.
        actual: usize,
    },

    /// Error reported by the rendering backend of a visualization sink.
    #[error("Plot error: {0}")]
    Plot(String),

    /// Error raised while preparing an output location.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SignalError {
    /// Builds an [`SignalError::InvalidParameter`] naming the parameter and the violated rule.
    pub fn invalid_parameter(name: &str, reason: impl AsRef<str>) -> Self {
        SignalError::InvalidParameter(format!("{name} {}", reason.as_ref()))
    }

    /// Checks that `actual` equals `expected`, reporting a [`SignalError::LengthMismatch`] otherwise.
    pub fn check_length(expected: usize, actual: usize) -> SignalResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(SignalError::LengthMismatch { expected, actual })
        }
    }
}
