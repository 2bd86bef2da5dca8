//! Calculation mode: does the entered amount include GST or not?

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxError;

/// How the entered amount relates to the tax.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxMode {
    /// Amount is the pre-tax base; GST is added on top (exclusive).
    #[default]
    #[serde(rename = "exclusive", alias = "add")]
    AddTax,
    /// Amount already contains GST; GST is extracted from it (inclusive).
    #[serde(rename = "inclusive", alias = "extract")]
    ExtractTax,
}

impl TaxMode {
    /// Both modes, in toggle order.
    pub const ALL: [Self; 2] = [Self::AddTax, Self::ExtractTax];

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::AddTax => Self::ExtractTax,
            Self::ExtractTax => Self::AddTax,
        }
    }

    /// Stable lowercase name, matching the config spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddTax => "exclusive",
            Self::ExtractTax => "inclusive",
        }
    }
}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxMode {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" | "add" => Ok(Self::AddTax),
            "inclusive" | "extract" => Ok(Self::ExtractTax),
            _ => Err(TaxError::UnknownMode(s.to_string())),
        }
    }
}
