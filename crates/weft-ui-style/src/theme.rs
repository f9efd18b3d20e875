//! Theme palettes.
//!
//! A [`Theme`] selects one of two fixed palettes. The lookup is closed: the
//! palettes are baked in and cannot fail or be extended at runtime.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use weft_ui_core::Color;

/// Fixed alert color used for the required marker, identical in both themes.
pub const ALERT: Color = Color::rgb(0xd3, 0x2f, 0x2f);

/// The colors a theme contributes to resolved styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary text color.
    pub text: Color,
    /// Background color.
    pub background: Color,
    /// Secondary background, used for borders drawn around the container.
    pub surface: Color,
}

impl Palette {
    /// Palette for [`Theme::Light`].
    pub const LIGHT: Self = Self {
        text: Color::rgb(0x00, 0x00, 0x00),
        background: Color::rgb(0xf0, 0xf0, 0xf0),
        surface: Color::rgb(0xd9, 0xd9, 0xd9),
    };

    /// Palette for [`Theme::Dark`].
    pub const DARK: Self = Self {
        text: Color::rgb(0xff, 0xff, 0xff),
        background: Color::rgb(0x33, 0x33, 0x33),
        surface: Color::rgb(0x4d, 0x4d, 0x4d),
    };
}

/// Named palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Returns the fixed palette for this theme.
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &Palette::LIGHT,
            Self::Dark => &Palette::DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Error returned when a theme name is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            name if name.eq_ignore_ascii_case("light") => Ok(Self::Light),
            name if name.eq_ignore_ascii_case("dark") => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
