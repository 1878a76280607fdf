//! Color palettes for the two display modes.

use serde::Serialize;
use shoplist_core::ThemePreference;
use std::fmt;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colors the presentation layer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Mode this palette belongs to
    pub mode: ThemePreference,
    /// Page background
    pub background: Rgb,
    /// Raised surfaces (dialogs, table header)
    pub surface: Rgb,
    /// Main text
    pub text_primary: Rgb,
    /// De-emphasized text (categories, counts)
    pub text_secondary: Rgb,
    /// Primary actions and highlights
    pub accent: Rgb,
    /// Destructive actions
    pub danger: Rgb,
}

impl Palette {
    /// Palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemePreference) -> Self {
        match mode {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// Light mode colors.
    #[must_use]
    pub fn light() -> Self {
        Self {
            mode: ThemePreference::Light,
            background: Rgb(255, 255, 255),
            surface: Rgb(245, 245, 245),
            text_primary: Rgb(33, 33, 33),
            text_secondary: Rgb(102, 102, 102),
            accent: Rgb(25, 118, 210),
            danger: Rgb(211, 47, 47),
        }
    }

    /// Dark mode colors.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            mode: ThemePreference::Dark,
            background: Rgb(18, 18, 18),
            surface: Rgb(30, 30, 30),
            text_primary: Rgb(255, 255, 255),
            text_secondary: Rgb(179, 179, 179),
            accent: Rgb(144, 202, 249),
            danger: Rgb(244, 67, 54),
        }
    }
}
