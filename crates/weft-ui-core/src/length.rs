//! Length values for widths and spacing.
//!
//! A [`Length`] is either a pixel magnitude, a percentage of the parent, or
//! an already-unit-qualified string that is passed through to the host
//! rendering layer verbatim. Numeric inputs convert to pixel lengths; string
//! inputs are never reinterpreted.
//!
//! ```
//! use weft_ui_core::length::Length;
//!
//! assert_eq!(Length::from(200).to_string(), "200px");
//! assert_eq!(Length::FULL.to_string(), "100%");
//! assert_eq!(Length::from("50vw").to_string(), "50vw");
//! ```

use crate::error::LengthParseError;
use std::fmt;

/// A presentation length.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    /// A pixel magnitude.
    Px(f32),
    /// A percentage of the parent's size (0.0 to 100.0).
    Percent(f32),
    /// An already-qualified value passed through verbatim (`"50vw"`, `"3em"`).
    Custom(String),
}

impl Length {
    /// The full width of the parent (`100%`).
    pub const FULL: Self = Self::Percent(100.0);

    /// Parses a length from text.
    ///
    /// Recognizes `<number>px`, `<number>%`, and bare numbers (treated as
    /// pixels). Anything else is kept verbatim as [`Length::Custom`], so
    /// values in units this crate does not model still reach the host
    /// unchanged. Only empty input and non-finite numbers fail.
    pub fn parse(input: &str) -> Result<Self, LengthParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LengthParseError::EmptyInput);
        }

        let numeric = |s: &str| -> Option<Result<f32, LengthParseError>> {
            s.trim().parse::<f32>().ok().map(|n| {
                if n.is_finite() {
                    Ok(n)
                } else {
                    Err(LengthParseError::InvalidNumber(s.trim().to_string()))
                }
            })
        };

        if let Some(px) = trimmed.strip_suffix("px") {
            if let Some(n) = numeric(px) {
                return n.map(Self::Px);
            }
        } else if let Some(pct) = trimmed.strip_suffix('%') {
            if let Some(n) = numeric(pct) {
                return n.map(Self::Percent);
            }
        } else if let Some(n) = numeric(trimmed) {
            return n.map(Self::Px);
        }

        Ok(Self::Custom(trimmed.to_string()))
    }

    /// Returns `true` if this is the full-width percentage.
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Percent(p) if *p == 100.0)
    }
}

/// Writes `value` without a trailing `.0` for whole numbers.
fn write_number(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    if value == value.trunc() {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{}", value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => {
                write_number(f, *v)?;
                write!(f, "px")
            }
            Self::Percent(v) => {
                write_number(f, *v)?;
                write!(f, "%")
            }
            Self::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl From<u16> for Length {
    fn from(value: u16) -> Self {
        Self::Px(f32::from(value))
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self::Px(value as f32)
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Self::Custom(value.to_string())
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Self::Custom(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_becomes_px() {
        assert_eq!(Length::from(200).to_string(), "200px");
        assert_eq!(Length::from(12.5f32).to_string(), "12.5px");
        assert_eq!(Length::from(-4).to_string(), "-4px");
    }

    #[test]
    fn test_string_passes_through_verbatim() {
        assert_eq!(Length::from("50vw").to_string(), "50vw");
        assert_eq!(Length::from("calc(100% - 2em)").to_string(), "calc(100% - 2em)");
    }

    #[test]
    fn test_full_width() {
        assert_eq!(Length::FULL.to_string(), "100%");
        assert!(Length::FULL.is_full());
        assert!(!Length::Percent(50.0).is_full());
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(Length::parse("200px"), Ok(Length::Px(200.0)));
        assert_eq!(Length::parse(" 12.5px "), Ok(Length::Px(12.5)));
        assert_eq!(Length::parse("100%"), Ok(Length::Percent(100.0)));
        assert_eq!(Length::parse("200"), Ok(Length::Px(200.0)));
    }

    #[test]
    fn test_parse_unknown_unit_is_custom() {
        assert_eq!(Length::parse("50vw"), Ok(Length::Custom("50vw".to_string())));
        assert_eq!(Length::parse("auto"), Ok(Length::Custom("auto".to_string())));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Length::parse(""), Err(LengthParseError::EmptyInput));
        assert_eq!(Length::parse("   "), Err(LengthParseError::EmptyInput));
        assert_eq!(
            Length::parse("inf"),
            Err(LengthParseError::InvalidNumber("inf".to_string()))
        );
    }

    #[test]
    fn test_display_is_stable() {
        // Resolving the same value twice yields the same qualified text.
        let w = Length::from(200);
        assert_eq!(w.to_string(), w.clone().to_string());
    }
}
