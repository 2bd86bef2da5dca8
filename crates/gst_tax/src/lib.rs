//! # GST Desk Tax Engine
//!
//! Pure Rust tax logic for the GST Desk calculator.
//!
//! ## Design Principles
//!
//! 1. **Pure functions** - `compute` has no side effects and no hidden state
//! 2. **No degenerate output** - bad input is an error, not `NaN`/`Infinity`
//! 3. **External configuration** - preset slabs and currency in TOML
//!
//! ## Example
//!
//! ```rust
//! use gst_tax::{compute, CurrencyFormat, TaxMode};
//!
//! let result = compute(1000.0, 18.0, TaxMode::AddTax)?;
//! assert_eq!(CurrencyFormat::default().format(result.total), "₹1,180.00");
//! # Ok::<(), gst_tax::TaxError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod engine;
pub mod error;
pub mod mode;
pub mod money;
pub mod rate;

pub use config::TaxConfig;
pub use engine::{compute, TaxQuery, TaxResult};
pub use error::{TaxEngineResult, TaxError};
pub use mode::TaxMode;
pub use money::{CurrencyFormat, Grouping};
pub use rate::{GstRate, RateTable};
