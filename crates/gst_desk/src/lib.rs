//! # GST Desk
//!
//! The GST calculator page, assembled from the tax engine and the widgets.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                              GST DESK                               │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌──────────────┐  │
//! │  │   gst_tax       │────>│   gst_ui        │<────│  gst_shared  │  │
//! │  │                 │     │                 │     │              │  │
//! │  │  • compute      │     │  • Form         │     │  • Events    │  │
//! │  │  • Currency     │     │  • Follower     │     │  • Point     │  │
//! │  │  • Rate table   │     │  • Theme toggle │     │  • Constants │  │
//! │  └─────────────────┘     └────────┬────────┘     └──────────────┘  │
//! │                                   │                                 │
//! │                          ┌────────┴────────┐                        │
//! │                          │   gst_desk      │                        │
//! │                          │  • Page loop    │                        │
//! │                          │  • Pointer bus  │                        │
//! │                          │  • Theme store  │                        │
//! │                          │  • Headless host│                        │
//! │                          └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML page config
//! - `events`: Pointer event bus
//! - `page`: Frame orchestration and page lifecycle
//! - `surface`: Headless cursor host
//! - `theme`: Shared theme store and persistence

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod events;
pub mod page;
pub mod surface;
pub mod theme;

pub use gst_tax as tax;
pub use gst_ui as ui;

pub use config::{PageConfig, ThemeConfig};
pub use error::{ConfigError, ConfigResult, PageError, PageResult};
pub use events::{PointerBus, PointerReceiver, PointerSender};
pub use page::{FrameStats, FrameStatsAccumulator, Page, PageView, TARGET_FRAME_TIME};
pub use surface::HeadlessSurface;
pub use theme::{MemoryThemePersistence, ThemePersistence, ThemeStore};
