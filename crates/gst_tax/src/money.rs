//! # Currency Formatting
//!
//! Renders amounts the way an `en-IN` currency formatter does:
//! symbol first, two decimals, and lakh/crore digit grouping.
//!
//! ```text
//! 1234567.891  ->  ₹12,34,567.89   (Indian grouping)
//! 1234567.891  ->  ₹1,234,567.89   (Western grouping)
//! ```

use gst_shared::{CURRENCY_CODE, CURRENCY_SYMBOL};
use serde::{Deserialize, Serialize};

use crate::error::{TaxEngineResult, TaxError};

/// Upper bound on displayed decimals.
const MAX_FRACTION_DIGITS: u8 = 6;

/// Shown in place of a value that cannot be formatted.
const NOT_A_NUMBER: &str = "—";

/// How the integer digits are separated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Last three digits, then pairs: `12,34,567`.
    #[default]
    Indian,
    /// Triples: `1,234,567`.
    Western,
}

impl Grouping {
    /// Inserts separators into a run of ASCII digits.
    fn apply(self, digits: &str) -> String {
        let len = digits.len();
        if len <= 3 {
            return digits.to_string();
        }

        let (head, last_three) = digits.split_at(len - 3);
        let step = match self {
            Self::Indian => 2,
            Self::Western => 3,
        };

        let mut groups = Vec::with_capacity(head.len() / step + 2);
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(step);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(last_three);
        groups.join(",")
    }
}

/// Display rules for money amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencyFormat {
    /// Symbol printed before the digits.
    pub symbol: String,
    /// ISO 4217 code.
    pub code: String,
    /// Number of decimals.
    pub fraction_digits: u8,
    /// Digit grouping style.
    pub grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: CURRENCY_SYMBOL.to_string(),
            code: CURRENCY_CODE.to_string(),
            fraction_digits: 2,
            grouping: Grouping::Indian,
        }
    }
}

impl CurrencyFormat {
    /// Checks the code and the number of decimals.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::InvalidConfig` if the code is not three ASCII
    /// uppercase letters or more than six decimals are requested.
    pub fn validate(&self) -> TaxEngineResult<()> {
        if self.code.len() != 3 || !self.code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(TaxError::InvalidConfig(format!(
                "currency code {:?} is not an ISO 4217 code",
                self.code
            )));
        }
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(TaxError::InvalidConfig(format!(
                "{} fraction digits requested, at most {MAX_FRACTION_DIGITS} supported",
                self.fraction_digits
            )));
        }
        Ok(())
    }

    /// Formats `value` with symbol, grouping and fixed decimals.
    ///
    /// Non-finite values render as an em dash instead of panicking.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return NOT_A_NUMBER.to_string();
        }

        let digits = usize::from(self.fraction_digits.min(MAX_FRACTION_DIGITS));
        let fixed = format!("{:.*}", digits, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        // -0.001 rounds to 0.00 and must not print as negative.
        let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

        let mut out = String::with_capacity(fixed.len() + self.symbol.len() + fixed.len() / 2 + 1);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&self.grouping.apply(int_part));
        if let Some(frac_part) = frac_part {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        let inr = CurrencyFormat::default();
        assert_eq!(inr.format(0.0), "₹0.00");
        assert_eq!(inr.format(999.0), "₹999.00");
        assert_eq!(inr.format(1180.0), "₹1,180.00");
        assert_eq!(inr.format(123_456.0), "₹1,23,456.00");
        assert_eq!(inr.format(12_345_678.5), "₹1,23,45,678.50");
    }

    #[test]
    fn test_western_grouping() {
        let usd = CurrencyFormat {
            symbol: "$".into(),
            code: "USD".into(),
            fraction_digits: 2,
            grouping: Grouping::Western,
        };
        assert_eq!(usd.format(12_345_678.5), "$12,345,678.50");
        assert_eq!(usd.format(100.0), "$100.00");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let inr = CurrencyFormat::default();
        assert_eq!(inr.format(179.999_999_999_999_97), "₹180.00");
        assert_eq!(inr.format(1000.000_000_000_1), "₹1,000.00");
    }

    #[test]
    fn test_negative_and_non_finite() {
        let inr = CurrencyFormat::default();
        assert_eq!(inr.format(-1234.5), "-₹1,234.50");
        assert_eq!(inr.format(-0.001), "₹0.00");
        assert_eq!(inr.format(f64::NAN), "—");
        assert_eq!(inr.format(f64::INFINITY), "—");
    }

    #[test]
    fn test_zero_fraction_digits() {
        let whole = CurrencyFormat {
            fraction_digits: 0,
            ..CurrencyFormat::default()
        };
        assert_eq!(whole.format(1_234_567.0), "₹12,34,567");
    }

    #[test]
    fn test_validate() {
        assert!(CurrencyFormat::default().validate().is_ok());
        let bad_code = CurrencyFormat {
            code: "rupee".into(),
            ..CurrencyFormat::default()
        };
        assert!(bad_code.validate().is_err());
        let too_precise = CurrencyFormat {
            fraction_digits: 9,
            ..CurrencyFormat::default()
        };
        assert!(too_precise.validate().is_err());
    }
}
