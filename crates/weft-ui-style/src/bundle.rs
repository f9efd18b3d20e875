//! The four-region style bundle and caller overrides.

use crate::region::RegionStyle;
use std::fmt;

/// The four independently styleable regions of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The outer clickable container.
    Container,
    /// The label text.
    Title,
    /// The required marker next to the label.
    Marker,
    /// The editable element.
    Field,
}

impl Region {
    /// All regions, in resolution order.
    pub const ALL: [Self; 4] = [Self::Container, Self::Title, Self::Marker, Self::Field];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => write!(f, "container"),
            Self::Title => write!(f, "title"),
            Self::Marker => write!(f, "marker"),
            Self::Field => write!(f, "field"),
        }
    }
}

/// A resolved style bundle covering all four regions.
///
/// The resolver never returns a partial bundle: every region is populated,
/// even when a region ends up visually identical to the base look.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleBundle {
    /// Container region style.
    pub container: RegionStyle,
    /// Title region style.
    pub title: RegionStyle,
    /// Required-marker region style.
    pub marker: RegionStyle,
    /// Editable-field region style.
    pub field: RegionStyle,
}

impl StyleBundle {
    /// Returns the style for a region.
    pub fn region(&self, region: Region) -> &RegionStyle {
        match region {
            Region::Container => &self.container,
            Region::Title => &self.title,
            Region::Marker => &self.marker,
            Region::Field => &self.field,
        }
    }

    /// Returns the style for a region, mutably.
    pub fn region_mut(&mut self, region: Region) -> &mut RegionStyle {
        match region {
            Region::Container => &mut self.container,
            Region::Title => &mut self.title,
            Region::Marker => &mut self.marker,
            Region::Field => &mut self.field,
        }
    }

    /// Applies caller overrides, producing the final per-region styles.
    ///
    /// An override present for a region wins entirely: none of this bundle's
    /// properties for that region survive, including ones the override does
    /// not mention. Regions without an override are taken from this bundle
    /// unchanged. There is no per-property merging.
    pub fn merged(&self, overrides: &StyleOverrides) -> StyleBundle {
        let pick = |region: Region| {
            overrides
                .get(region)
                .cloned()
                .unwrap_or_else(|| self.region(region).clone())
        };
        StyleBundle {
            container: pick(Region::Container),
            title: pick(Region::Title),
            marker: pick(Region::Marker),
            field: pick(Region::Field),
        }
    }
}

/// Caller-supplied per-region style replacements.
///
/// Each region is an independent whole-region choice: `None` keeps the
/// resolver default, `Some` replaces it completely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleOverrides {
    container: Option<RegionStyle>,
    title: Option<RegionStyle>,
    marker: Option<RegionStyle>,
    field: Option<RegionStyle>,
}

impl StyleOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the container region.
    pub fn container(mut self, style: RegionStyle) -> Self {
        self.container = Some(style);
        self
    }

    /// Replaces the title region.
    pub fn title(mut self, style: RegionStyle) -> Self {
        self.title = Some(style);
        self
    }

    /// Replaces the required-marker region.
    pub fn marker(mut self, style: RegionStyle) -> Self {
        self.marker = Some(style);
        self
    }

    /// Replaces the editable-field region.
    pub fn field(mut self, style: RegionStyle) -> Self {
        self.field = Some(style);
        self
    }

    /// Sets the override for a region by key.
    pub fn set(&mut self, region: Region, style: RegionStyle) {
        *self.slot_mut(region) = Some(style);
    }

    /// Removes the override for a region, restoring the resolver default.
    pub fn unset(&mut self, region: Region) {
        *self.slot_mut(region) = None;
    }

    /// Returns the override for a region, if present.
    pub fn get(&self, region: Region) -> Option<&RegionStyle> {
        match region {
            Region::Container => self.container.as_ref(),
            Region::Title => self.title.as_ref(),
            Region::Marker => self.marker.as_ref(),
            Region::Field => self.field.as_ref(),
        }
    }

    /// Returns `true` if no region is overridden.
    pub fn is_empty(&self) -> bool {
        Region::ALL.iter().all(|r| self.get(*r).is_none())
    }

    fn slot_mut(&mut self, region: Region) -> &mut Option<RegionStyle> {
        match region {
            Region::Container => &mut self.container,
            Region::Title => &mut self.title,
            Region::Marker => &mut self.marker,
            Region::Field => &mut self.field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Property;
    use pretty_assertions::assert_eq;
    use weft_ui_core::{Color, Length};

    fn sample_bundle() -> StyleBundle {
        let mut bundle = StyleBundle::default();
        for region in Region::ALL {
            bundle
                .region_mut(region)
                .set(Property::Color, Color::BLACK);
            bundle
                .region_mut(region)
                .set(Property::Padding, Length::from(10));
        }
        bundle
    }

    #[test]
    fn test_merged_without_overrides_is_identity() {
        let bundle = sample_bundle();
        assert_eq!(bundle.merged(&StyleOverrides::new()), bundle);
    }

    #[test]
    fn test_override_replaces_whole_region() {
        let bundle = sample_bundle();
        let overrides = StyleOverrides::new()
            .title(RegionStyle::new().with(Property::Color, Color::RED));

        let merged = bundle.merged(&overrides);

        // The override wins entirely: resolver padding does not survive.
        assert_eq!(merged.title.len(), 1);
        assert!(!merged.title.contains(Property::Padding));
        // Other regions keep resolver defaults.
        assert_eq!(merged.container, bundle.container);
        assert_eq!(merged.marker, bundle.marker);
        assert_eq!(merged.field, bundle.field);
    }

    #[test]
    fn test_unset_restores_default() {
        let mut overrides = StyleOverrides::new();
        overrides.set(Region::Field, RegionStyle::new());
        assert!(!overrides.is_empty());
        overrides.unset(Region::Field);
        assert!(overrides.is_empty());
    }
}
