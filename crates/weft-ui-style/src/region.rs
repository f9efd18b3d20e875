//! Ordered per-region style declarations.

use crate::property::{write_declarations, Property, Value};
use smallvec::SmallVec;

/// The style of one region: an ordered list of property assignments.
///
/// Assignment is last-writer-wins on the property key: [`RegionStyle::set`]
/// replaces an existing entry in place (keeping its original position) and
/// appends otherwise, so iteration order is the order properties were first
/// written. Resolved regions stay small, so entries live inline.
///
/// ```
/// use weft_ui_style::{Property, RegionStyle};
/// use weft_ui_core::Length;
///
/// let mut style = RegionStyle::new();
/// style.set(Property::Width, Length::from(200));
/// style.set(Property::Width, Length::FULL);
/// assert_eq!(style.len(), 1);
/// assert_eq!(style.to_css(), "width: 100%;");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionStyle {
    entries: SmallVec<[(Property, Value); 8]>,
}

impl RegionStyle {
    /// Creates an empty region style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a property, replacing any previous value for the same key.
    pub fn set(&mut self, property: Property, value: impl Into<Value>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == property) {
            entry.1 = value;
        } else {
            self.entries.push((property, value));
        }
    }

    /// Builder-style [`RegionStyle::set`].
    pub fn with(mut self, property: Property, value: impl Into<Value>) -> Self {
        self.set(property, value);
        self
    }

    /// Returns the current value for a property, if assigned.
    pub fn get(&self, property: Property) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    /// Returns `true` if the property has been assigned.
    pub fn contains(&self, property: Property) -> bool {
        self.get(property).is_some()
    }

    /// Number of assigned properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no properties are assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates assignments in write order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &Value)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }

    /// Serializes this region as a CSS declaration block.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (property, value) in self.iter() {
            write_declarations(property, value, &mut out);
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weft_ui_core::{Color, Length};

    #[test]
    fn test_set_appends_in_order() {
        let mut style = RegionStyle::new();
        style.set(Property::Padding, Length::from(10));
        style.set(Property::BackgroundColor, Color::WHITE);

        let keys: Vec<Property> = style.iter().map(|(p, _)| p).collect();
        assert_eq!(keys, vec![Property::Padding, Property::BackgroundColor]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = RegionStyle::new();
        style.set(Property::BackgroundColor, Color::WHITE);
        style.set(Property::Padding, Length::from(10));
        style.set(Property::BackgroundColor, Color::TRANSPARENT);

        assert_eq!(style.len(), 2);
        assert_eq!(
            style.get(Property::BackgroundColor),
            Some(&Value::Color(Color::TRANSPARENT))
        );
        // Replacement keeps the original position.
        let keys: Vec<Property> = style.iter().map(|(p, _)| p).collect();
        assert_eq!(keys, vec![Property::BackgroundColor, Property::Padding]);
    }

    #[test]
    fn test_to_css() {
        let style = RegionStyle::new()
            .with(Property::Color, Color::BLACK)
            .with(Property::FontSize, Length::from(14));
        assert_eq!(style.to_css(), "color: #000000; font-size: 14px;");
    }

    #[test]
    fn test_empty() {
        let style = RegionStyle::new();
        assert!(style.is_empty());
        assert_eq!(style.to_css(), "");
    }
}
