//! # GST Rates
//!
//! A validated rate newtype and the table of preset slabs offered to the user.

use std::fmt;

use gst_shared::{DEFAULT_RATE, PRESET_RATES, RATE_MAX, RATE_MIN};
use serde::{Deserialize, Serialize};

use crate::error::{TaxEngineResult, TaxError};

/// Tolerance used when matching a rate against the preset table.
const RATE_EPSILON: f64 = 1e-9;

/// A GST rate in percent, guaranteed to lie in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct GstRate(f64);

impl GstRate {
    /// Validates a rate.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::InvalidRate` if `percent` is not finite or falls
    /// outside `0..=100`.
    pub fn new(percent: f64) -> TaxEngineResult<Self> {
        if percent.is_finite() && (RATE_MIN..=RATE_MAX).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(TaxError::InvalidRate(percent))
        }
    }

    /// Returns the rate in percent.
    #[inline]
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }
}

impl fmt::Display for GstRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Preset slabs and the rate selected by default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateTable {
    /// Rates shown as buttons, in display order.
    pub presets: Vec<f64>,
    /// Rate selected on load and after a reset.
    pub default_rate: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            presets: PRESET_RATES.to_vec(),
            default_rate: DEFAULT_RATE,
        }
    }
}

impl RateTable {
    /// Checks that every preset is a valid rate and the default is a preset.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> TaxEngineResult<()> {
        if self.presets.is_empty() {
            return Err(TaxError::InvalidConfig("no preset rates".into()));
        }
        for &preset in &self.presets {
            GstRate::new(preset)
                .map_err(|e| TaxError::InvalidConfig(format!("preset {preset}: {e}")))?;
        }
        if !self.contains(self.default_rate) {
            return Err(TaxError::InvalidConfig(format!(
                "default rate {}% is not one of the presets",
                self.default_rate
            )));
        }
        Ok(())
    }

    /// Returns true if `rate` is one of the presets.
    #[must_use]
    pub fn contains(&self, rate: f64) -> bool {
        self.find(rate).is_some()
    }

    /// Returns the preset matching `rate`, as stored in the table.
    #[must_use]
    pub fn find(&self, rate: f64) -> Option<f64> {
        self.presets
            .iter()
            .copied()
            .find(|&p| (p - rate).abs() < RATE_EPSILON)
    }
}
