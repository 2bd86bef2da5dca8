//! # Tax Error Types
//!
//! All errors that can occur in the tax engine.

use thiserror::Error;

/// Errors that can occur in the tax engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaxError {
    /// Amount was negative, `NaN` or infinite.
    #[error("invalid amount: {0} (must be a finite, non-negative number)")]
    InvalidAmount(f64),

    /// Rate was outside 0..=100 or not finite.
    #[error("invalid rate: {0}% (must be between 0 and 100)")]
    InvalidRate(f64),

    /// Mode name not recognised.
    #[error("unknown tax mode: {0:?} (expected \"exclusive\" or \"inclusive\")")]
    UnknownMode(String),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for tax operations.
pub type TaxEngineResult<T> = Result<T, TaxError>;
