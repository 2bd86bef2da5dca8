//! # GST Desk Page
//!
//! Owns the three widgets and runs them one display refresh at a time:
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. DRAIN INPUT                                                      │
//! │    └─ Apply every pending pointer event to the follower             │
//! │                                                                     │
//! │ 2. FIRE DUE FRAMES                                                  │
//! │    ├─ Step the outline toward the pointer                           │
//! │    ├─ Ease the hover scale                                          │
//! │    └─ Follower schedules frame N+1                                  │
//! │                                                                     │
//! │ 3. RECORD STATS                                                     │
//! │    └─ Frame time and events processed                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator form is not frame driven: it recomputes when its view is
//! read.

use std::sync::Arc;
use std::time::{Duration, Instant};

use gst_shared::TARGET_FPS;
use gst_ui::{
    CalculatorForm, CalculatorView, CursorFollower, CursorFrame, FollowerState, Palette,
    ThemeIcon, ThemeMode, ThemeToggle,
};
use tracing::{info, warn};

use crate::config::PageConfig;
use crate::error::{PageError, PageResult};
use crate::events::{PointerBus, PointerReceiver, PointerSender};
use crate::surface::HeadlessSurface;
use crate::theme::{ThemePersistence, ThemeStore};

/// Frame budget at the target refresh rate.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(1_000_000 / TARGET_FPS as u64);

/// Frame timing statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Time spent in the frame, in microseconds.
    pub total_us: u64,
    /// Frame number.
    pub frame: u64,
    /// Pointer events applied this frame.
    pub events_processed: u32,
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of frame times.
    pub total_us_sum: u64,
    /// Min frame time.
    pub min_frame_us: u64,
    /// Max frame time.
    pub max_frame_us: u64,
    /// Frames that exceeded the budget.
    pub frames_over_budget: u64,
    /// Pointer events applied across all frames.
    pub events_processed: u64,
}

impl FrameStatsAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
            events_processed: 0,
        }
    }

    /// Records one frame.
    pub fn record(&mut self, stats: FrameStats) {
        self.frames_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);
        self.events_processed += u64::from(stats.events_processed);

        if u128::from(stats.total_us) > TARGET_FRAME_TIME.as_micros() {
            self.frames_over_budget += 1;
        }
    }

    /// Average frame time in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Fraction of frames over budget.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Logs a one-line summary.
    pub fn log_summary(&self) {
        info!(
            frames = self.frames_recorded,
            avg_ms = self.avg_frame_ms(),
            max_us = self.max_frame_us,
            over_budget = self.frames_over_budget,
            events = self.events_processed,
            "frame statistics"
        );
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a renderer needs to draw the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// The calculator card.
    pub calculator: CalculatorView,
    /// Icon on the theme button.
    pub theme_icon: ThemeIcon,
    /// Accessible label of the theme button.
    pub theme_label: &'static str,
    /// Colours of the applied theme.
    pub palette: Palette,
    /// Custom cursor, when the follower is running.
    pub cursor: Option<CursorFrame>,
}

/// The calculator page.
pub struct Page {
    form: CalculatorForm,
    follower: CursorFollower,
    toggle: ThemeToggle,
    theme: Arc<ThemeStore>,
    surface: HeadlessSurface,
    bus: PointerBus,
    input: PointerReceiver,
    mounted: bool,
    frame_count: u64,
    stats: FrameStatsAccumulator,
}

impl Page {
    /// Creates an unmounted page with its own theme store.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Config` if `config` does not validate.
    pub fn new(config: &PageConfig, surface: HeadlessSurface) -> PageResult<Self> {
        let theme = ThemeStore::shared(config.theme.preference, ThemeMode::Light);
        Self::with_theme_store(config, surface, theme)
    }

    /// Creates an unmounted page sharing an existing theme store.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Config` if `config` does not validate.
    pub fn with_theme_store(
        config: &PageConfig,
        surface: HeadlessSurface,
        theme: Arc<ThemeStore>,
    ) -> PageResult<Self> {
        config.validate()?;
        let bus = PointerBus::default();
        let input = bus.receiver();

        Ok(Self {
            form: CalculatorForm::new(&config.tax()),
            follower: CursorFollower::new(config.follower),
            toggle: ThemeToggle::new(),
            theme,
            surface,
            bus,
            input,
            mounted: false,
            frame_count: 0,
            stats: FrameStatsAccumulator::new(),
        })
    }

    /// Loads the theme, enables the toggle and starts the follower.
    ///
    /// Returns the follower's state; it stays inactive on touch-only hosts.
    ///
    /// # Errors
    ///
    /// Returns `PageError::AlreadyMounted` if the page is mounted.
    pub fn mount(&mut self, persistence: Box<dyn ThemePersistence>) -> PageResult<FollowerState> {
        if self.mounted {
            return Err(PageError::AlreadyMounted);
        }

        let mode = self.theme.init(persistence);
        self.toggle.mount();
        let follower = self.follower.mount(&mut self.surface);
        self.mounted = true;

        info!(?mode, ?follower, "page mounted");
        Ok(follower)
    }

    /// Stops the follower and flushes the theme.
    ///
    /// Returns false if the page was not mounted.
    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        self.follower.unmount(&mut self.surface);
        self.theme.teardown();
        let dropped = self.input.drain().len();
        if dropped > 0 {
            warn!(dropped, "pointer events discarded at unmount");
        }
        self.mounted = false;

        info!(frames = self.frame_count, "page unmounted");
        self.stats.log_summary();
        true
    }

    /// Handle for the host to deliver pointer events.
    #[must_use]
    pub fn pointer_sender(&self) -> PointerSender {
        self.bus.sender()
    }

    /// Runs one display refresh of `dt` seconds.
    ///
    /// Returns the cursor to draw if the follower rendered this frame.
    pub fn tick(&mut self, dt: f32) -> Option<CursorFrame> {
        let start = Instant::now();

        let events = self.input.drain();
        for event in &events {
            self.follower.handle_event(event);
        }

        let mut drawn = None;
        for token in self.surface.take_due_frames() {
            if let Some(frame) = self.follower.on_frame(&mut self.surface, token, dt) {
                drawn = Some(frame);
            }
        }

        self.stats.record(FrameStats {
            total_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            frame: self.frame_count,
            events_processed: u32::try_from(events.len()).unwrap_or(u32::MAX),
        });
        self.frame_count += 1;
        drawn
    }

    /// Clicks the theme button. Returns the new mode, or `None` before mount.
    pub fn click_theme_toggle(&mut self) -> Option<ThemeMode> {
        let next = self.toggle.click(self.theme.mode())?;
        self.theme.set_preference(next.into());
        Some(next)
    }

    /// Builds the render data for the whole page.
    #[must_use]
    pub fn view(&self) -> PageView {
        let mode = self.theme.mode();
        let cursor =
            (self.follower.state() == FollowerState::Active).then(|| self.follower.frame());

        PageView {
            calculator: self.form.view(),
            theme_icon: self.toggle.icon(mode),
            theme_label: ThemeToggle::LABEL,
            palette: Palette::for_mode(mode),
            cursor,
        }
    }

    /// The calculator form.
    #[must_use]
    pub const fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// The calculator form, for input.
    pub fn form_mut(&mut self) -> &mut CalculatorForm {
        &mut self.form
    }

    /// The cursor follower.
    #[must_use]
    pub const fn follower(&self) -> &CursorFollower {
        &self.follower
    }

    /// The cursor follower, for direct control such as warping.
    pub fn follower_mut(&mut self) -> &mut CursorFollower {
        &mut self.follower
    }

    /// The host surface.
    #[must_use]
    pub const fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    /// The theme store.
    #[must_use]
    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    /// Returns true between mount and unmount.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Frames ticked so far.
    #[inline]
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Accumulated frame statistics.
    #[must_use]
    pub const fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryThemePersistence;
    use gst_shared::PointerEvent;

    fn mounted_page() -> Page {
        let mut page = Page::new(&PageConfig::default(), HeadlessSurface::desktop()).unwrap();
        page.mount(Box::new(MemoryThemePersistence::default())).unwrap();
        page
    }

    #[test]
    fn test_target_frame_time() {
        assert_eq!(TARGET_FRAME_TIME, Duration::from_micros(16_666));
    }

    #[test]
    fn test_mount_twice_fails() {
        let mut page = mounted_page();
        let err = page
            .mount(Box::new(MemoryThemePersistence::default()))
            .unwrap_err();
        assert!(matches!(err, PageError::AlreadyMounted));
    }

    #[test]
    fn test_tick_drains_events() {
        let mut page = mounted_page();
        let sender = page.pointer_sender();
        sender.send(PointerEvent::moved(10.0, 0.0));
        sender.send(PointerEvent::moved(100.0, 0.0));

        let frame = page.tick(1.0 / 60.0).unwrap();
        assert_eq!(frame.dot.x, 100.0);
        assert!((frame.outline.x - 15.0).abs() < 1e-12);
        assert_eq!(page.stats().events_processed, 2);
        assert_eq!(page.frame_count(), 1);
    }

    #[test]
    fn test_tick_before_mount_draws_nothing() {
        let mut page = Page::new(&PageConfig::default(), HeadlessSurface::desktop()).unwrap();
        assert!(page.tick(0.016).is_none());
        assert!(page.view().cursor.is_none());
    }

    #[test]
    fn test_stats_accumulator() {
        let mut acc = FrameStatsAccumulator::new();
        for i in 0..100 {
            acc.record(FrameStats {
                total_us: 10_000 + i * 100,
                frame: i,
                events_processed: 1,
            });
        }
        assert_eq!(acc.frames_recorded, 100);
        assert_eq!(acc.min_frame_us, 10_000);
        assert_eq!(acc.max_frame_us, 19_900);
        // 16_700.. are over the 16_666 budget: i in 67..100.
        assert_eq!(acc.frames_over_budget, 33);
        assert!((acc.avg_frame_ms() - 14.95).abs() < 1e-9);
    }
}
