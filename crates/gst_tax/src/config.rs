//! # Tax Configuration
//!
//! The `[calculator]` and `[currency]` tables of the page config.
//!
//! ```toml
//! [calculator]
//! presets = [5.0, 12.0, 18.0, 28.0]
//! default_rate = 18.0
//!
//! [currency]
//! symbol = "₹"
//! code = "INR"
//! fraction_digits = 2
//! grouping = "indian"
//! ```
//!
//! Every table and key is optional; missing values fall back to the
//! defaults above. Unknown tables and keys are rejected.

use serde::{Deserialize, Serialize};

use crate::error::{TaxEngineResult, TaxError};
use crate::money::CurrencyFormat;
use crate::rate::RateTable;

/// Tax-related configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxConfig {
    /// Preset slabs and default rate.
    pub calculator: RateTable,
    /// Amount display rules.
    pub currency: CurrencyFormat,
}

impl TaxConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::InvalidConfig` on malformed TOML or invalid values.
    pub fn from_toml_str(source: &str) -> TaxEngineResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| TaxError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every table.
    ///
    /// # Errors
    ///
    /// Returns the first `TaxError::InvalidConfig` found.
    pub fn validate(&self) -> TaxEngineResult<()> {
        self.calculator.validate()?;
        self.currency.validate()
    }
}
