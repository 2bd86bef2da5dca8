//! # UI Error Types

use thiserror::Error;

/// Errors raised by widget configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    /// Smoothing factor outside `(0, 1]`.
    #[error("invalid smoothing factor {0}: must be in (0, 1]")]
    InvalidSmoothing(f64),

    /// Hover scale not positive and finite.
    #[error("invalid hover scale {0}: must be a positive number")]
    InvalidScale(f32),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
