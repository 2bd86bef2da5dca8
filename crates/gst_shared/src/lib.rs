//! # GST Desk Shared
//!
//! Common types used by the tax engine, the widgets and the page host.
//!
//! ## RULE
//!
//! This crate must NEVER depend on widget or host code.
//! If you need a UI type, put it in `gst_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod events;
pub mod math;

pub use constants::{
    CURRENCY_CODE, CURRENCY_SYMBOL, DEFAULT_RATE, FOLLOWER_SMOOTHING, HOVER_SCALE, PRESET_RATES,
    RATE_MAX, RATE_MIN, SCALE_TRANSITION_MS, TARGET_FPS,
};
pub use events::{ElementInfo, ElementKind, PointerEvent, PointerEventKind};
pub use math::{ParsePointError, Point};
