//! Animation primitives for the cursor follower.
//!
//! Two kinds of motion:
//! - [`ExponentialFollower`]: frame-driven decay toward a moving target,
//!   used for the lagging outline.
//! - [`Animation`]: time-driven tween between two values with an easing
//!   curve, used for the hover scale.

use gst_shared::Point;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Cubic ease-out, close to the CSS `ease-out` curve.
    #[default]
    EaseOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration (200ms, the outline's scale transition).
    pub const DEFAULT_DURATION: f32 = 0.2;

    /// Creates a new animation resting at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Creates an animation with custom duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Sets a new target value, starting animation from current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Advances the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt.max(0.0) / self.duration;
        } else {
            self.progress = 1.0;
        }
        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

/// Discrete exponential decay toward a target point.
///
/// Each [`step`](Self::step) covers `smoothing` of the remaining distance.
/// With `0 < smoothing < 1` the position never overshoots and never lands
/// exactly on a target it did not start on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFollower {
    position: Point,
    smoothing: f64,
}

impl ExponentialFollower {
    /// Creates a follower resting at `start`.
    ///
    /// `smoothing` is clamped to `[0, 1]`; validate user input with
    /// [`FollowerConfig::validate`](crate::cursor::FollowerConfig::validate).
    #[must_use]
    pub fn new(start: Point, smoothing: f64) -> Self {
        Self {
            position: start,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Returns the smoothed position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Moves one frame toward `target` and returns the new position.
    pub fn step(&mut self, target: Point) -> Point {
        self.position = self.position.approach(target, self.smoothing);
        self.position
    }

    /// Jumps straight to `position`.
    pub fn snap(&mut self, position: Point) {
        self.position = position;
    }
}
