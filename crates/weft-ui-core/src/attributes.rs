//! Text decoration attributes.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Text decoration attributes as a compact bitfield.
    ///
    /// Attributes combine with bitwise operations:
    ///
    /// ```
    /// use weft_ui_core::attributes::TextAttributes;
    ///
    /// let attrs = TextAttributes::BOLD | TextAttributes::UNDERLINE;
    /// assert!(attrs.contains(TextAttributes::BOLD));
    /// assert!(!attrs.contains(TextAttributes::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttributes: u8 {
        /// Bold text.
        const BOLD          = 0b0000_0001;
        /// Italic text.
        const ITALIC        = 0b0000_0010;
        /// Underlined text.
        const UNDERLINE     = 0b0000_0100;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0000_1000;
    }
}

impl TextAttributes {
    /// No attributes set (alias for `empty()`).
    pub const NONE: Self = Self::empty();

    /// Returns `true` if no attributes are set.
    #[inline]
    pub fn is_none(self) -> bool {
        self.is_empty()
    }

    /// Returns `true` if any attribute is set.
    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_empty()
    }
}

impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(Self::BOLD) {
            parts.push("bold");
        }
        if self.contains(Self::ITALIC) {
            parts.push("italic");
        }
        if self.contains(Self::UNDERLINE) {
            parts.push("underline");
        }
        if self.contains(Self::STRIKETHROUGH) {
            parts.push("strikethrough");
        }

        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_empty() {
        let attrs = TextAttributes::empty();
        assert!(attrs.is_none());
        assert!(!attrs.is_some());
    }

    #[test]
    fn test_attributes_combine() {
        let attrs = TextAttributes::BOLD | TextAttributes::ITALIC;
        assert!(attrs.contains(TextAttributes::BOLD));
        assert!(attrs.contains(TextAttributes::ITALIC));
        assert!(!attrs.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_display() {
        let attrs = TextAttributes::BOLD | TextAttributes::UNDERLINE;
        assert_eq!(attrs.to_string(), "bold, underline");
        assert_eq!(TextAttributes::empty().to_string(), "none");
    }
}
