//! # Page Constants
//!
//! Defaults baked into the binary. Every value here can be overridden by the
//! page config, except the rate bounds.

// =============================================================================
// TAX
// =============================================================================

/// Preset GST slabs offered as buttons.
pub const PRESET_RATES: [f64; 4] = [5.0, 12.0, 18.0, 28.0];

/// Rate selected on load and after a reset.
pub const DEFAULT_RATE: f64 = 18.0;

/// Lowest accepted rate (percent).
pub const RATE_MIN: f64 = 0.0;

/// Highest accepted rate (percent).
pub const RATE_MAX: f64 = 100.0;

// =============================================================================
// CURRENCY
// =============================================================================

/// Display symbol for amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// ISO 4217 code for amounts.
pub const CURRENCY_CODE: &str = "INR";

// =============================================================================
// CURSOR FOLLOWER
// =============================================================================

/// Fraction of the remaining distance the outline covers per frame.
pub const FOLLOWER_SMOOTHING: f64 = 0.15;

/// Outline scale while hovering an interactive element.
pub const HOVER_SCALE: f32 = 1.5;

/// Duration of the outline scale transition.
pub const SCALE_TRANSITION_MS: u32 = 200;

/// Display refresh rate assumed by the headless host.
pub const TARGET_FPS: u32 = 60;
