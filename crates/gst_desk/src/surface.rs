//! # Headless Surface
//!
//! A [`CursorHost`] with no window behind it. Every side effect the follower
//! takes is recorded so tests and the CLI can check that teardown undid it.

use std::collections::BTreeMap;

use gst_shared::PointerEventKind;
use gst_ui::{CursorHost, DeviceProfile, FrameToken, ListenerId};

/// In-memory host.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    profile: DeviceProfile,
    cursor_hidden: bool,
    cursor_restores: u32,
    next_id: u64,
    pending_frames: Vec<FrameToken>,
    frames_requested: u64,
    frames_cancelled: u64,
    listeners: BTreeMap<ListenerId, PointerEventKind>,
}

impl HeadlessSurface {
    /// Creates a surface reporting the given hardware.
    #[must_use]
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Desktop with a mouse.
    #[must_use]
    pub fn desktop() -> Self {
        Self::new(DeviceProfile::DESKTOP)
    }

    /// Returns true while the system cursor is hidden.
    #[must_use]
    pub const fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Times the system cursor went from hidden back to visible.
    #[must_use]
    pub const fn cursor_restores(&self) -> u32 {
        self.cursor_restores
    }

    /// Frame callbacks requested and not yet fired or cancelled.
    #[must_use]
    pub fn pending_frames(&self) -> &[FrameToken] {
        &self.pending_frames
    }

    /// Total frame requests.
    #[must_use]
    pub const fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Total successful cancellations.
    #[must_use]
    pub const fn frames_cancelled(&self) -> u64 {
        self.frames_cancelled
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if some listener is registered for `kind`.
    #[must_use]
    pub fn listens_to(&self, kind: PointerEventKind) -> bool {
        self.listeners.values().any(|&k| k == kind)
    }

    /// Takes the frames due at this refresh.
    ///
    /// Frames requested while these are being handled wait for the next call.
    pub fn take_due_frames(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.pending_frames)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl CursorHost for HeadlessSurface {
    fn device_profile(&self) -> DeviceProfile {
        self.profile
    }

    fn set_cursor_hidden(&mut self, hidden: bool) {
        if self.cursor_hidden && !hidden {
            self.cursor_restores += 1;
        }
        self.cursor_hidden = hidden;
    }

    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id());
        self.pending_frames.push(token);
        self.frames_requested += 1;
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let before = self.pending_frames.len();
        self.pending_frames.retain(|&t| t != token);
        if self.pending_frames.len() < before {
            self.frames_cancelled += 1;
        }
    }

    fn add_listener(&mut self, kind: PointerEventKind) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}
