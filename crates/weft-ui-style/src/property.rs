//! Presentation property keys and values.
//!
//! Styles in this crate are ordered lists of ([`Property`], [`Value`])
//! assignments rather than opaque maps, so the order in which defaults and
//! overlays write properties is reproducible and testable. Every property
//! knows its CSS declaration name and every value knows its CSS text, which
//! is how the host rendering layer consumes resolved styles.

use std::fmt;
use weft_ui_core::{Color, Length, TextAttributes};

/// The closed set of presentation property keys this crate resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Text color (`color`).
    Color,
    /// Background color (`background-color`).
    BackgroundColor,
    /// Horizontal extent (`width`).
    Width,
    /// Inner spacing on all edges (`padding`).
    Padding,
    /// Corner rounding (`border-radius`).
    BorderRadius,
    /// Border shorthand (`border`).
    Border,
    /// Focus outline (`outline`).
    Outline,
    /// Text size (`font-size`).
    FontSize,
    /// Text decoration attributes; expands to font/decoration declarations.
    TextStyle,
    /// Spacing below the element (`margin-bottom`).
    MarginBottom,
    /// Spacing left of the element (`margin-left`).
    MarginLeft,
    /// Box model selection (`box-sizing`).
    BoxSizing,
}

impl Property {
    /// Returns the CSS declaration name for this property.
    ///
    /// [`Property::TextStyle`] has no single CSS equivalent; it is expanded
    /// by [`write_declarations`] instead and reports `text-style` here only
    /// for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::Width => "width",
            Self::Padding => "padding",
            Self::BorderRadius => "border-radius",
            Self::Border => "border",
            Self::Outline => "outline",
            Self::FontSize => "font-size",
            Self::TextStyle => "text-style",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::BoxSizing => "box-sizing",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Keyword values for properties that take one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Suppresses the property entirely (`none`).
    None,
    /// Border-box sizing (`border-box`).
    BorderBox,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::BorderBox => write!(f, "border-box"),
        }
    }
}

/// Border line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// A solid line.
    Solid,
    /// A dashed line.
    Dashed,
    /// A dotted line.
    Dotted,
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dashed => write!(f, "dashed"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

/// A border shorthand value: width, line style, and color.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// Border thickness.
    pub width: Length,
    /// Line style.
    pub line: LineStyle,
    /// Border color.
    pub color: Color,
}

impl Border {
    /// Creates a solid border of the given thickness and color.
    pub fn solid(width: impl Into<Length>, color: Color) -> Self {
        Self {
            width: width.into(),
            line: LineStyle::Solid,
            color,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.width, self.line, self.color.to_css())
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A length (widths, spacing, radii, font sizes).
    Length(Length),
    /// A color.
    Color(Color),
    /// A border shorthand.
    Border(Border),
    /// Text decoration attributes.
    Attributes(TextAttributes),
    /// A bare keyword.
    Keyword(Keyword),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(l) => write!(f, "{}", l),
            Self::Color(c) => write!(f, "{}", c.to_css()),
            Self::Border(b) => write!(f, "{}", b),
            Self::Attributes(a) => write!(f, "{}", a),
            Self::Keyword(k) => write!(f, "{}", k),
        }
    }
}

impl From<Length> for Value {
    fn from(value: Length) -> Self {
        Self::Length(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Border> for Value {
    fn from(value: Border) -> Self {
        Self::Border(value)
    }
}

impl From<TextAttributes> for Value {
    fn from(value: TextAttributes) -> Self {
        Self::Attributes(value)
    }
}

impl From<Keyword> for Value {
    fn from(value: Keyword) -> Self {
        Self::Keyword(value)
    }
}

/// Writes the CSS declarations for one property assignment into `out`.
///
/// Most assignments produce exactly one `name: value;` declaration.
/// [`Property::TextStyle`] expands into the CSS font and decoration
/// declarations its flags imply.
pub fn write_declarations(property: Property, value: &Value, out: &mut String) {
    use std::fmt::Write;

    if property == Property::TextStyle {
        if let Value::Attributes(attrs) = value {
            if attrs.contains(TextAttributes::BOLD) {
                out.push_str("font-weight: bold; ");
            }
            if attrs.contains(TextAttributes::ITALIC) {
                out.push_str("font-style: italic; ");
            }
            let mut decorations = Vec::new();
            if attrs.contains(TextAttributes::UNDERLINE) {
                decorations.push("underline");
            }
            if attrs.contains(TextAttributes::STRIKETHROUGH) {
                decorations.push("line-through");
            }
            if !decorations.is_empty() {
                let _ = write!(out, "text-decoration: {}; ", decorations.join(" "));
            }
            return;
        }
    }

    let _ = write!(out, "{}: {}; ", property.name(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn declaration(property: Property, value: &Value) -> String {
        let mut out = String::new();
        write_declarations(property, value, &mut out);
        out.trim_end().to_string()
    }

    #[test]
    fn test_border_display() {
        let border = Border::solid(1, Color::BLACK);
        assert_eq!(border.to_string(), "1px solid #000000");
    }

    #[test]
    fn test_simple_declaration() {
        assert_eq!(
            declaration(Property::Width, &Value::Length(Length::from(200))),
            "width: 200px;"
        );
        assert_eq!(
            declaration(Property::BackgroundColor, &Value::Color(Color::TRANSPARENT)),
            "background-color: transparent;"
        );
        assert_eq!(
            declaration(Property::Outline, &Value::Keyword(Keyword::None)),
            "outline: none;"
        );
    }

    #[test]
    fn test_text_style_expansion() {
        assert_eq!(
            declaration(Property::TextStyle, &Value::Attributes(TextAttributes::BOLD)),
            "font-weight: bold;"
        );
        assert_eq!(
            declaration(
                Property::TextStyle,
                &Value::Attributes(TextAttributes::UNDERLINE | TextAttributes::STRIKETHROUGH),
            ),
            "text-decoration: underline line-through;"
        );
        assert_eq!(
            declaration(Property::TextStyle, &Value::Attributes(TextAttributes::NONE)),
            ""
        );
    }
}
