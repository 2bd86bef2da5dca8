//! # GST Desk UI
//!
//! The three widgets of the page, expressed as state machines that a host
//! drives and a renderer reads:
//! - Calculator form with read-time input coercion
//! - Cursor follower with a lagging, exponentially smoothed outline
//! - Light/dark theme toggle
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      UI PIPELINE                        │
//! ├────────────────────────────────────────────────────────┤
//! │  Host Events → Widget State → View Data → Renderer     │
//! │       ↓             ↓              ↓                    │
//! │  Subscriptions  Frame Ticks    Formatting               │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here draws. Widgets never touch the host except through
//! [`CursorHost`], so every side effect is observable in tests.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod calculator;
pub mod cursor;
pub mod error;
pub mod input;
pub mod theme;

pub use animation::{Animation, Easing, ExponentialFollower};
pub use calculator::{
    CalculatorForm, CalculatorView, ModeOption, PresetButton, ResultsSection, ResultsView,
};
pub use cursor::{
    CursorFollower, CursorFrame, CursorHost, FollowerConfig, FollowerState, FrameToken, ListenerId,
};
pub use error::{UiError, UiResult};
pub use input::{parse_number, DeviceProfile, PointerCapability};
pub use theme::{Color, Palette, ThemeIcon, ThemeMode, ThemePreference, ThemeToggle};
