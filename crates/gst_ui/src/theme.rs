//! Light and dark themes, and the button that switches between them.
//!
//! Where the preference is stored is the page's business (see the theme store
//! in `gst_desk`). This module only knows colours and the toggle's behaviour.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` value.
    #[must_use]
    pub const fn rgb_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to `[r, g, b, a]` bytes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_bytes(self) -> [u8; 4] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }
}

impl fmt::Display for Color {
    /// CSS hex notation; alpha is only written when not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_bytes();
        if a == u8::MAX {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Colours a theme assigns to the page's roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Card surface.
    pub surface: Color,
    /// Body text.
    pub foreground: Color,
    /// Secondary text.
    pub muted: Color,
    /// Primary buttons and the total row.
    pub primary: Color,
    /// Tax amount and the cursor.
    pub accent: Color,
    /// Borders and dividers.
    pub border: Color,
}

impl Palette {
    /// Light palette.
    pub const LIGHT: Self = Self {
        background: Color::WHITE,
        surface: Color::rgb_hex(0xF8_FA_FC),
        foreground: Color::rgb_hex(0x0F_17_2A),
        muted: Color::rgb_hex(0x64_74_8B),
        primary: Color::rgb_hex(0x0D_94_88),
        accent: Color::rgb_hex(0xF5_9E_0B),
        border: Color::rgb_hex(0xE2_E8_F0),
    };

    /// Dark palette.
    pub const DARK: Self = Self {
        background: Color::rgb_hex(0x02_06_17),
        surface: Color::rgb_hex(0x0F_17_2A),
        foreground: Color::rgb_hex(0xF8_FA_FC),
        muted: Color::rgb_hex(0x94_A3_B8),
        primary: Color::rgb_hex(0x2D_D4_BF),
        accent: Color::rgb_hex(0xFB_BF_24),
        border: Color::rgb_hex(0x1E_29_3B),
    };

    /// Palette for a mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }
}

/// Theme actually applied to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

impl ThemePreference {
    /// Resolves the preference against the system setting.
    #[must_use]
    pub const fn resolve(self, system: ThemeMode) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
            Self::System => system,
        }
    }
}

impl From<ThemeMode> for ThemePreference {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
        }
    }
}

/// Icon shown on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeIcon {
    /// Sun: switches to light.
    Sun,
    /// Moon: switches to dark.
    Moon,
}

/// The theme toggle button.
///
/// Until mounted the resolved theme is unknown (it is read from storage on
/// load), so the button shows a neutral sun and ignores clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeToggle {
    mounted: bool,
}

impl ThemeToggle {
    /// Accessible label of the button.
    pub const LABEL: &'static str = "Toggle theme";

    /// Creates an unmounted toggle.
    #[must_use]
    pub const fn new() -> Self {
        Self { mounted: false }
    }

    /// Marks the toggle as mounted; the current theme is now trustworthy.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Returns true once mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Icon to show while `current` is applied.
    #[must_use]
    pub const fn icon(&self, current: ThemeMode) -> ThemeIcon {
        match (self.mounted, current) {
            (false, _) | (true, ThemeMode::Dark) => ThemeIcon::Sun,
            (true, ThemeMode::Light) => ThemeIcon::Moon,
        }
    }

    /// Handles a click. Returns the theme to switch to, or `None` before mount.
    #[must_use]
    pub const fn click(&self, current: ThemeMode) -> Option<ThemeMode> {
        if self.mounted {
            Some(current.toggled())
        } else {
            None
        }
    }
}
