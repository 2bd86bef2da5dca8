//! # Page Configuration
//!
//! One TOML file, loaded once at startup. Every table is optional; unknown
//! tables and keys are rejected:
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
//!
//! [follower]
//! smoothing = 0.15
//! hover_scale = 1.5
//! scale_duration_ms = 200
//!
//! [theme]
//! preference = "system"
//! ```

use std::path::Path;

use gst_tax::{CurrencyFormat, RateTable, TaxConfig};
use gst_ui::{FollowerConfig, ThemePreference};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, ConfigResult};

/// The `[theme]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Used until a stored preference is found.
    pub preference: ThemePreference,
}

/// Complete page configuration. Unknown tables and keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// `[calculator]`.
    pub calculator: RateTable,
    /// `[currency]`.
    pub currency: CurrencyFormat,
    /// `[follower]`.
    pub follower: FollowerConfig,
    /// `[theme]`.
    pub theme: ThemeConfig,
}

impl PageConfig {
    /// The calculator's share of the config.
    #[must_use]
    pub fn tax(&self) -> TaxConfig {
        TaxConfig {
            calculator: self.calculator.clone(),
            currency: self.currency.clone(),
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, otherwise the first
    /// validation error.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`PageConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(
            path = %path.display(),
            presets = config.calculator.presets.len(),
            "page config loaded"
        );
        Ok(config)
    }

    /// Validates every table.
    ///
    /// # Errors
    ///
    /// Returns the first invalid table's error.
    pub fn validate(&self) -> ConfigResult<()> {
        self.calculator.validate()?;
        self.currency.validate()?;
        self.follower.validate()?;
        Ok(())
    }
}
