//! # Tax Engine
//!
//! Turns an amount, a rate and a mode into an (original, tax, total) triple.
//!
//! ```text
//! ADD_TAX     (amount excludes GST)      EXTRACT_TAX (amount includes GST)
//! ┌──────────────────────────────┐       ┌──────────────────────────────────┐
//! │ original = amount            │       │ original = amount*100/(100+rate) │
//! │ tax      = amount*rate/100   │       │ tax      = amount - original     │
//! │ total    = amount + tax      │       │ total    = amount                │
//! └──────────────────────────────┘       └──────────────────────────────────┘
//! ```
//!
//! Both branches keep `original + tax == total` up to rounding.

use serde::{Deserialize, Serialize};

use crate::error::{TaxEngineResult, TaxError};
use crate::mode::TaxMode;
use crate::rate::GstRate;

/// One calculation request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxQuery {
    /// Entered amount (base or tax-inclusive, depending on `mode`).
    pub amount: f64,
    /// Rate in percent.
    pub rate: f64,
    /// How `amount` relates to the tax.
    pub mode: TaxMode,
}

impl TaxQuery {
    /// Creates a query. Nothing is validated until [`TaxQuery::compute`].
    #[must_use]
    pub const fn new(amount: f64, rate: f64, mode: TaxMode) -> Self {
        Self { amount, rate, mode }
    }

    /// Computes the breakdown for this query.
    ///
    /// # Errors
    ///
    /// See [`compute`].
    pub fn compute(&self) -> TaxEngineResult<TaxResult> {
        compute(self.amount, self.rate, self.mode)
    }
}

/// Breakdown of an amount into its pre-tax part and its tax.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Amount excluding GST.
    pub original: f64,
    /// GST component.
    pub tax: f64,
    /// Amount including GST.
    pub total: f64,
}

impl TaxResult {
    /// All-zero breakdown.
    pub const ZERO: Self = Self {
        original: 0.0,
        tax: 0.0,
        total: 0.0,
    };

    /// Returns true if `original + tax` matches `total` within `tolerance`
    /// (relative to the total, absolute below 1).
    #[must_use]
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        let scale = self.total.abs().max(1.0);
        ((self.original + self.tax) - self.total).abs() <= tolerance * scale
    }

    /// Rounds every field to paise (two decimals) for display.
    #[must_use]
    pub fn rounded(&self) -> Self {
        let round = |v: f64| (v * 100.0).round() / 100.0;
        Self {
            original: round(self.original),
            tax: round(self.tax),
            total: round(self.total),
        }
    }
}

/// Computes the GST breakdown of `amount` at `rate` percent.
///
/// # Errors
///
/// - `TaxError::InvalidAmount` if `amount` is negative, `NaN` or infinite.
/// - `TaxError::InvalidRate` if `rate` is outside `0..=100` or not finite.
///   This also covers `-100`, where extraction would divide by zero.
pub fn compute(amount: f64, rate: f64, mode: TaxMode) -> TaxEngineResult<TaxResult> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(TaxError::InvalidAmount(amount));
    }
    let rate = GstRate::new(rate)?;

    let result = match mode {
        TaxMode::AddTax => {
            let tax = amount * rate.percent() / 100.0;
            TaxResult {
                original: amount,
                tax,
                total: amount + tax,
            }
        }
        TaxMode::ExtractTax => {
            let original = amount * 100.0 / (100.0 + rate.percent());
            TaxResult {
                original,
                tax: amount - original,
                total: amount,
            }
        }
    };

    // Huge finite amounts can still overflow to infinity.
    if result.total.is_finite() && result.tax.is_finite() && result.original.is_finite() {
        Ok(result)
    } else {
        Err(TaxError::InvalidAmount(amount))
    }
}
