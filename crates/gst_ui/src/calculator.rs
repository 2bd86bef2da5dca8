//! # Calculator Form
//!
//! State behind the GST card: an amount field, a row of preset slabs, a
//! custom-rate field and the exclusive/inclusive switch.
//!
//! ```text
//! ┌──────────── form state ────────────┐      ┌──────── view ────────┐
//! │ amount_text       "1000"           │      │ mode options         │
//! │ preset_rate       18               │ ───▶ │ amount label         │
//! │ custom_rate_text  ""               │      │ preset buttons       │
//! │ mode              AddTax           │      │ results / rejection  │
//! └────────────────────────────────────┘      └──────────────────────┘
//! ```
//!
//! Text fields are stored as typed and coerced when read, so a half-typed
//! `"12."` never loses the user's keystrokes.

use gst_tax::{compute, CurrencyFormat, RateTable, TaxConfig, TaxEngineResult, TaxMode, TaxResult};
use tracing::debug;

use crate::input::parse_number;

/// Placeholder of the custom-rate field.
const CUSTOM_RATE_PLACEHOLDER: &str = "Custom rate (%)";

/// One choice in the mode switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeOption {
    /// Mode this option selects.
    pub mode: TaxMode,
    /// Button title.
    pub title: &'static str,
    /// One-line explanation under the title.
    pub hint: &'static str,
    /// Whether this is the active mode.
    pub selected: bool,
}

impl ModeOption {
    fn new(mode: TaxMode, current: TaxMode) -> Self {
        let (title, hint) = match mode {
            TaxMode::AddTax => ("GST Exclusive", "Add GST to amount"),
            TaxMode::ExtractTax => ("GST Inclusive", "Extract GST from amount"),
        };
        Self {
            mode,
            title,
            hint,
            selected: mode == current,
        }
    }
}

/// A preset slab button.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetButton {
    /// Text on the button, e.g. `"18%"`.
    pub label: String,
    /// Rate in percent.
    pub rate: f64,
    /// Highlighted when chosen and no custom rate overrides it.
    pub selected: bool,
}

/// Formatted breakdown rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// Label of the first row.
    pub original_label: &'static str,
    /// Formatted pre-tax amount.
    pub original: String,
    /// Label of the tax row, e.g. `"GST (18%)"`.
    pub tax_label: String,
    /// Formatted tax amount.
    pub tax: String,
    /// Label of the total row.
    pub total_label: &'static str,
    /// Formatted total.
    pub total: String,
    /// Unformatted numbers behind the rows.
    pub raw: TaxResult,
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsSection {
    /// No positive amount entered yet.
    Hidden,
    /// Breakdown of a valid calculation.
    Breakdown(ResultsView),
    /// The inputs were rejected; carries the message to display.
    Rejected(String),
}

impl ResultsSection {
    /// Returns true if the breakdown is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Breakdown(_))
    }
}

/// Everything a renderer needs to draw the card.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorView {
    /// The two mode choices, exclusive first.
    pub modes: [ModeOption; 2],
    /// Label above the amount field.
    pub amount_label: &'static str,
    /// Raw amount text.
    pub amount_text: String,
    /// Preset slab buttons in table order.
    pub presets: Vec<PresetButton>,
    /// Placeholder of the custom-rate field.
    pub custom_rate_placeholder: &'static str,
    /// Raw custom-rate text.
    pub custom_rate_text: String,
    /// Results area.
    pub results: ResultsSection,
}

/// The calculator card's state.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    rates: RateTable,
    currency: CurrencyFormat,
    amount_text: String,
    preset_rate: f64,
    custom_rate_text: String,
    mode: TaxMode,
}

impl CalculatorForm {
    /// Creates an empty form using the given slabs and currency.
    #[must_use]
    pub fn new(config: &TaxConfig) -> Self {
        Self {
            rates: config.calculator.clone(),
            currency: config.currency.clone(),
            amount_text: String::new(),
            preset_rate: config.calculator.default_rate,
            custom_rate_text: String::new(),
            mode: TaxMode::default(),
        }
    }

    /// Replaces the amount text.
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount_text = text.into();
    }

    /// Replaces the custom-rate text. Non-empty text overrides the preset.
    pub fn set_custom_rate(&mut self, text: impl Into<String>) {
        self.custom_rate_text = text.into();
    }

    /// Selects a preset slab and clears the custom rate.
    ///
    /// Returns `false` (and changes nothing) if `rate` is not a preset.
    pub fn select_preset(&mut self, rate: f64) -> bool {
        let Some(preset) = self.rates.find(rate) else {
            debug!(rate, "ignoring unknown preset");
            return false;
        };
        self.preset_rate = preset;
        self.custom_rate_text.clear();
        true
    }

    /// Sets the mode.
    pub fn set_mode(&mut self, mode: TaxMode) {
        self.mode = mode;
    }

    /// Switches between exclusive and inclusive.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Clears both fields and restores the default slab and mode.
    pub fn reset(&mut self) {
        self.amount_text.clear();
        self.custom_rate_text.clear();
        self.preset_rate = self.rates.default_rate;
        self.mode = TaxMode::default();
        debug!("calculator reset");
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> TaxMode {
        self.mode
    }

    /// Raw amount text.
    #[must_use]
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// Raw custom-rate text.
    #[must_use]
    pub fn custom_rate_text(&self) -> &str {
        &self.custom_rate_text
    }

    /// Selected preset slab, whether or not a custom rate overrides it.
    #[must_use]
    pub const fn preset_rate(&self) -> f64 {
        self.preset_rate
    }

    /// Currency rules used by [`CalculatorForm::view`].
    #[must_use]
    pub const fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Returns true if the custom field overrides the preset.
    #[must_use]
    pub fn uses_custom_rate(&self) -> bool {
        !self.custom_rate_text.is_empty()
    }

    /// Amount as a number; empty or unparseable text reads as `0`.
    #[must_use]
    pub fn amount(&self) -> f64 {
        parse_number(&self.amount_text)
    }

    /// Rate in effect: the custom rate if entered, otherwise the preset.
    #[must_use]
    pub fn current_rate(&self) -> f64 {
        if self.uses_custom_rate() {
            parse_number(&self.custom_rate_text)
        } else {
            self.preset_rate
        }
    }

    /// Computes the breakdown for the current inputs.
    ///
    /// # Errors
    ///
    /// Propagates `TaxError` from [`compute`], e.g. a custom rate above 100.
    pub fn result(&self) -> TaxEngineResult<TaxResult> {
        compute(self.amount(), self.current_rate(), self.mode)
    }

    /// Builds the render data for the card.
    #[must_use]
    pub fn view(&self) -> CalculatorView {
        let use_custom = self.uses_custom_rate();
        let presets = self
            .rates
            .presets
            .iter()
            .map(|&rate| PresetButton {
                label: format!("{rate}%"),
                rate,
                selected: !use_custom && (rate - self.preset_rate).abs() < f64::EPSILON,
            })
            .collect();

        let amount_label = match self.mode {
            TaxMode::AddTax => "Original Amount",
            TaxMode::ExtractTax => "Total Amount (with GST)",
        };

        CalculatorView {
            modes: [
                ModeOption::new(TaxMode::AddTax, self.mode),
                ModeOption::new(TaxMode::ExtractTax, self.mode),
            ],
            amount_label,
            amount_text: self.amount_text.clone(),
            presets,
            custom_rate_placeholder: CUSTOM_RATE_PLACEHOLDER,
            custom_rate_text: self.custom_rate_text.clone(),
            results: self.results_section(),
        }
    }

    fn results_section(&self) -> ResultsSection {
        if self.amount() <= 0.0 {
            return ResultsSection::Hidden;
        }

        let rate = self.current_rate();
        match self.result() {
            Ok(result) => {
                let (original_label, total_label) = match self.mode {
                    TaxMode::AddTax => ("Original Amount", "Total Amount (with GST)"),
                    TaxMode::ExtractTax => ("Amount (excl. GST)", "Total Amount"),
                };
                ResultsSection::Breakdown(ResultsView {
                    original_label,
                    original: self.currency.format(result.original),
                    tax_label: format!("GST ({rate}%)"),
                    tax: self.currency.format(result.tax),
                    total_label,
                    total: self.currency.format(result.total),
                    raw: result,
                })
            }
            Err(err) => {
                debug!(%err, "calculation rejected");
                ResultsSection::Rejected(err.to_string())
            }
        }
    }
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::new(&TaxConfig::default())
    }
}
