//! Input handling for UI.
//!
//! Two concerns live here:
//! - what kind of pointing device the host has
//! - how raw text from numeric fields becomes a number

use serde::{Deserialize, Serialize};

/// Pointing capabilities reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    /// A mouse, trackpad or stylus with hover support is present.
    pub fine_pointer: bool,
    /// The host delivers touch events.
    pub touch_events: bool,
    /// Simultaneous touch points supported (0 = no touchscreen).
    pub max_touch_points: u32,
}

impl DeviceProfile {
    /// Plain desktop: mouse, no touchscreen.
    pub const DESKTOP: Self = Self {
        fine_pointer: true,
        touch_events: false,
        max_touch_points: 0,
    };

    /// Phone or tablet without a pointing device.
    pub const TOUCH_ONLY: Self = Self {
        fine_pointer: false,
        touch_events: true,
        max_touch_points: 5,
    };

    /// Laptop with a touchscreen and a trackpad.
    pub const HYBRID: Self = Self {
        fine_pointer: true,
        touch_events: true,
        max_touch_points: 10,
    };

    /// Returns true if the host can deliver touch input.
    #[must_use]
    pub const fn has_touch(self) -> bool {
        self.touch_events || self.max_touch_points > 0
    }
}

/// Pointer capability class derived from a [`DeviceProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerCapability {
    /// Hovering pointer available.
    Fine,
    /// Touch input only; there is no cursor to decorate.
    TouchOnly,
    /// No pointing input at all.
    None,
}

impl PointerCapability {
    /// Classifies a device profile.
    #[must_use]
    pub const fn detect(profile: DeviceProfile) -> Self {
        if profile.fine_pointer {
            Self::Fine
        } else if profile.has_touch() {
            Self::TouchOnly
        } else {
            Self::None
        }
    }

    /// Returns true if a custom cursor makes sense for this device.
    #[must_use]
    pub const fn supports_follower(self) -> bool {
        matches!(self, Self::Fine)
    }
}

/// Reads a number from a text field.
///
/// Parses the longest numeric prefix after leading whitespace
/// (`"12.5%"` -> `12.5`, `"1e3x"` -> `1000`). Empty, unparseable or
/// non-finite input reads as `0`.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts if it has at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}
