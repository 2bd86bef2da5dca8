//! # Cursor Follower
//!
//! Replaces the system cursor with a dot that tracks the pointer and an
//! outline that trails it.
//!
//! ```text
//!   pointer events ──► raw position ──► dot (immediate)
//!                           │
//!   frame tick ─────────────┴──► outline += (raw - outline) * k
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//!            mount (fine pointer)
//!  Inactive ─────────────────────► Active
//!     ▲                              │
//!     └──────────── unmount ─────────┘
//! ```
//!
//! `mount` hides the system cursor, registers one listener per
//! [`PointerEventKind`] and requests the first frame. `unmount` cancels the
//! pending frame, removes every listener and shows the cursor again. Both
//! are idempotent; the cursor is restored exactly once per activation.

use gst_shared::{
    ElementInfo, Point, PointerEvent, PointerEventKind, FOLLOWER_SMOOTHING, HOVER_SCALE,
    SCALE_TRANSITION_MS,
};
use serde::{Deserialize, Serialize};

use crate::animation::{Animation, Easing, ExponentialFollower};
use crate::error::{UiError, UiResult};
use crate::input::{DeviceProfile, PointerCapability};

/// Handle to a requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(pub u64);

/// Handle to a registered event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Everything the follower needs from its environment.
///
/// A browser host maps these onto `requestAnimationFrame`,
/// `addEventListener` and `document.body.style.cursor`; the headless host
/// records them.
pub trait CursorHost {
    /// Describes the pointing hardware.
    fn device_profile(&self) -> DeviceProfile;

    /// Hides or shows the system cursor.
    fn set_cursor_hidden(&mut self, hidden: bool);

    /// Schedules one callback on the next display refresh.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancels a scheduled callback. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Subscribes to one kind of pointer event.
    fn add_listener(&mut self, kind: PointerEventKind) -> ListenerId;

    /// Unsubscribes a listener. Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);
}

/// The `[follower]` table of the page config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FollowerConfig {
    /// Fraction of the remaining distance covered per frame, in `(0, 1]`.
    pub smoothing: f64,
    /// Outline scale while hovering an interactive element.
    pub hover_scale: f32,
    /// Duration of the scale transition in milliseconds.
    pub scale_duration_ms: u32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            smoothing: FOLLOWER_SMOOTHING,
            hover_scale: HOVER_SCALE,
            scale_duration_ms: SCALE_TRANSITION_MS,
        }
    }
}

impl FollowerConfig {
    /// Checks the smoothing factor and the hover scale.
    ///
    /// # Errors
    ///
    /// - `UiError::InvalidSmoothing` unless `0 < smoothing <= 1`.
    /// - `UiError::InvalidScale` unless the hover scale is positive and finite.
    pub fn validate(&self) -> UiResult<()> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(UiError::InvalidSmoothing(self.smoothing));
        }
        if !(self.hover_scale.is_finite() && self.hover_scale > 0.0) {
            return Err(UiError::InvalidScale(self.hover_scale));
        }
        Ok(())
    }

    /// Scale transition duration in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scale_duration_secs(&self) -> f32 {
        self.scale_duration_ms as f32 / 1000.0
    }
}

/// Whether the follower is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowerState {
    /// Not mounted, or mounted on a device without a hovering pointer.
    #[default]
    Inactive,
    /// Listening to pointer events and animating every frame.
    Active,
}

/// What to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    /// Centre of the dot (the raw pointer position).
    pub dot: Point,
    /// Centre of the trailing outline.
    pub outline: Point,
    /// Outline scale (1.0 at rest).
    pub outline_scale: f32,
    /// False while the pointer is outside the surface.
    pub visible: bool,
}

/// The custom cursor widget.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    config: FollowerConfig,
    state: FollowerState,
    raw: Point,
    outline: ExponentialFollower,
    scale: Animation,
    visible: bool,
    pending_frame: Option<FrameToken>,
    listeners: Vec<ListenerId>,
    frames: u64,
}

impl CursorFollower {
    /// Creates an inactive follower. Call [`mount`](Self::mount) to start it.
    #[must_use]
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            config,
            state: FollowerState::Inactive,
            raw: Point::ORIGIN,
            outline: ExponentialFollower::new(Point::ORIGIN, config.smoothing),
            scale: Animation::new(1.0, Easing::EaseOut)
                .with_duration(config.scale_duration_secs()),
            visible: false,
            pending_frame: None,
            listeners: Vec::with_capacity(PointerEventKind::ALL.len()),
            frames: 0,
        }
    }

    /// Starts the follower if the host has a hovering pointer.
    ///
    /// Returns the resulting state. Mounting an active follower is a no-op.
    pub fn mount<H: CursorHost + ?Sized>(&mut self, host: &mut H) -> FollowerState {
        if self.state == FollowerState::Active {
            return self.state;
        }

        let capability = PointerCapability::detect(host.device_profile());
        if !capability.supports_follower() {
            tracing::debug!(?capability, "cursor follower disabled: no hovering pointer");
            return self.state;
        }

        host.set_cursor_hidden(true);
        for kind in PointerEventKind::ALL {
            self.listeners.push(host.add_listener(kind));
        }
        self.pending_frame = Some(host.request_frame());
        self.visible = true;
        self.state = FollowerState::Active;

        tracing::info!(
            smoothing = self.config.smoothing,
            listeners = self.listeners.len(),
            "cursor follower mounted"
        );
        self.state
    }

    /// Stops the follower and undoes every side effect of [`mount`](Self::mount).
    ///
    /// Returns false if there was nothing to undo.
    pub fn unmount<H: CursorHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.state == FollowerState::Inactive {
            return false;
        }

        if let Some(token) = self.pending_frame.take() {
            host.cancel_frame(token);
        }
        for id in self.listeners.drain(..) {
            host.remove_listener(id);
        }
        host.set_cursor_hidden(false);

        self.visible = false;
        self.state = FollowerState::Inactive;
        tracing::info!(frames = self.frames, "cursor follower unmounted");
        true
    }

    /// Applies one pointer event. Ignored while inactive.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        if self.state == FollowerState::Inactive {
            return;
        }

        match *event {
            PointerEvent::Move { position } => self.raw = position,
            PointerEvent::Enter => self.visible = true,
            PointerEvent::Leave => self.visible = false,
            PointerEvent::Over { target } => self.hover(target, true),
            PointerEvent::Out { target } => self.hover(target, false),
        }
    }

    /// Runs one display refresh tick.
    ///
    /// Returns `None` for stale or cancelled callbacks. Otherwise advances the
    /// outline, eases the scale by `dt` seconds, schedules the next frame and
    /// returns what to draw.
    pub fn on_frame<H: CursorHost + ?Sized>(
        &mut self,
        host: &mut H,
        token: FrameToken,
        dt: f32,
    ) -> Option<CursorFrame> {
        if self.state != FollowerState::Active || self.pending_frame != Some(token) {
            return None;
        }

        self.outline.step(self.raw);
        self.scale.update(dt);
        self.frames += 1;
        self.pending_frame = Some(host.request_frame());

        Some(self.frame())
    }

    /// Moves both the dot and the outline to `position` with no trailing.
    pub fn warp_to(&mut self, position: Point) {
        self.raw = position;
        self.outline.snap(position);
    }

    /// Current drawing state, without advancing anything.
    #[must_use]
    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            dot: self.raw,
            outline: self.outline.position(),
            outline_scale: self.scale.value(),
            visible: self.visible,
        }
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> FollowerState {
        self.state
    }

    /// Returns the last raw pointer position.
    #[must_use]
    pub const fn raw(&self) -> Point {
        self.raw
    }

    /// Returns the smoothed outline position.
    #[must_use]
    pub const fn smoothed(&self) -> Point {
        self.outline.position()
    }

    /// Returns the frame callback currently scheduled, if any.
    #[must_use]
    pub const fn pending_frame(&self) -> Option<FrameToken> {
        self.pending_frame
    }

    /// Number of ticks processed since creation.
    #[must_use]
    pub const fn frames_rendered(&self) -> u64 {
        self.frames
    }

    fn hover(&mut self, target: ElementInfo, entering: bool) {
        if !target.is_interactive() {
            return;
        }
        let scale = if entering { self.config.hover_scale } else { 1.0 };
        self.scale.set_target(scale);
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(FollowerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gst_shared::ElementKind;

    /// Minimal host that only counts calls.
    #[derive(Default)]
    struct CountingHost {
        profile: DeviceProfile,
        hidden: bool,
        next: u64,
        frames_requested: u32,
        frames_cancelled: u32,
        listeners: u32,
    }

    impl CursorHost for CountingHost {
        fn device_profile(&self) -> DeviceProfile {
            self.profile
        }
        fn set_cursor_hidden(&mut self, hidden: bool) {
            self.hidden = hidden;
        }
        fn request_frame(&mut self) -> FrameToken {
            self.next += 1;
            self.frames_requested += 1;
            FrameToken(self.next)
        }
        fn cancel_frame(&mut self, _token: FrameToken) {
            self.frames_cancelled += 1;
        }
        fn add_listener(&mut self, _kind: PointerEventKind) -> ListenerId {
            self.next += 1;
            self.listeners += 1;
            ListenerId(self.next)
        }
        fn remove_listener(&mut self, _id: ListenerId) {
            self.listeners -= 1;
        }
    }

    fn desktop() -> CountingHost {
        CountingHost {
            profile: DeviceProfile::DESKTOP,
            ..CountingHost::default()
        }
    }

    #[test]
    fn test_mount_and_unmount() {
        let mut host = desktop();
        let mut follower = CursorFollower::default();

        assert_eq!(follower.mount(&mut host), FollowerState::Active);
        assert!(host.hidden);
        assert_eq!(host.listeners, 5);
        assert!(follower.pending_frame().is_some());

        assert!(follower.unmount(&mut host));
        assert!(!host.hidden);
        assert_eq!(host.listeners, 0);
        assert_eq!(host.frames_cancelled, 1);
        assert!(!follower.unmount(&mut host));
    }

    #[test]
    fn test_touch_only_stays_inactive() {
        let mut host = CountingHost {
            profile: DeviceProfile::TOUCH_ONLY,
            ..CountingHost::default()
        };
        let mut follower = CursorFollower::default();

        assert_eq!(follower.mount(&mut host), FollowerState::Inactive);
        assert!(!host.hidden);
        assert_eq!(host.frames_requested, 0);
        assert!(!follower.unmount(&mut host));
    }

    #[test]
    fn test_first_tick_covers_fifteen_percent() {
        let mut host = desktop();
        let mut follower = CursorFollower::default();
        follower.mount(&mut host);
        follower.handle_event(&PointerEvent::moved(100.0, 100.0));

        let token = follower.pending_frame().unwrap();
        let frame = follower.on_frame(&mut host, token, 1.0 / 60.0).unwrap();

        assert_eq!(frame.dot, Point::new(100.0, 100.0));
        assert!((frame.outline.x - 15.0).abs() < 1e-12);
        assert!((frame.outline.y - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut host = desktop();
        let mut follower = CursorFollower::default();
        follower.mount(&mut host);
        let first = follower.pending_frame().unwrap();
        assert!(follower.on_frame(&mut host, first, 0.016).is_some());
        assert!(follower.on_frame(&mut host, first, 0.016).is_none());
        assert_eq!(follower.frames_rendered(), 1);
    }

    #[test]
    fn test_hover_scales_outline() {
        let mut host = desktop();
        let mut follower = CursorFollower::default();
        follower.mount(&mut host);

        follower.handle_event(&PointerEvent::Over {
            target: ElementInfo::of(ElementKind::Button),
        });
        for _ in 0..20 {
            let token = follower.pending_frame().unwrap();
            follower.on_frame(&mut host, token, 0.016);
        }
        assert!((follower.frame().outline_scale - 1.5).abs() < 1e-4);

        follower.handle_event(&PointerEvent::Out {
            target: ElementInfo::of(ElementKind::Button),
        });
        for _ in 0..20 {
            let token = follower.pending_frame().unwrap();
            follower.on_frame(&mut host, token, 0.016);
        }
        assert!((follower.frame().outline_scale - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_plain_elements_do_not_scale() {
        let mut host = desktop();
        let mut follower = CursorFollower::default();
        follower.mount(&mut host);
        follower.handle_event(&PointerEvent::Over {
            target: ElementInfo::PLAIN,
        });
        let token = follower.pending_frame().unwrap();
        let frame = follower.on_frame(&mut host, token, 0.1).unwrap();
        assert_eq!(frame.outline_scale, 1.0);
    }

    #[test]
    fn test_enter_leave_visibility() {
        let mut host = desktop();
        let mut follower = CursorFollower::default();
        follower.mount(&mut host);
        assert!(follower.frame().visible);
        follower.handle_event(&PointerEvent::Leave);
        assert!(!follower.frame().visible);
        follower.handle_event(&PointerEvent::Enter);
        assert!(follower.frame().visible);
    }

    #[test]
    fn test_config_validation() {
        assert!(FollowerConfig::default().validate().is_ok());
        for smoothing in [0.0, -0.1, 1.5, f64::NAN] {
            let config = FollowerConfig {
                smoothing,
                ..FollowerConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(UiError::InvalidSmoothing(_))
            ));
        }
        let config = FollowerConfig {
            hover_scale: 0.0,
            ..FollowerConfig::default()
        };
        assert_eq!(config.validate(), Err(UiError::InvalidScale(0.0)));
    }
}
