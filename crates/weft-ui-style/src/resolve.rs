//! The pure style resolver.
//!
//! [`resolve`] maps a theme, an optional design variant, and an optional
//! width to a fully populated [`StyleBundle`]. The computation is pure and
//! cannot fail: themes are a closed palette lookup, an absent width falls
//! back to full width, and an unrecognized variant name (surfaced as `None`
//! by [`DesignVariant::from_name`]) leaves the base styles standing.
//!
//! Variant overlays are expressed as explicit ordered lists of
//! [`StyleWrite`]s — one (region, property, value) assignment each, applied
//! in fixed region order (container, title, marker, field) with
//! last-writer-wins semantics and no merging with prior overlay state. A
//! new variant must enumerate every property it touches.

use crate::bundle::{Region, StyleBundle};
use crate::property::{Border, Keyword, Property, Value};
use crate::theme::{Palette, Theme, ALERT};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use weft_ui_core::{Color, Length, TextAttributes};

/// Named design preset layered on top of the theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DesignVariant {
    /// Base styles with a transparent container.
    Normal,
    /// Bordered container, bold label, borderless field.
    #[default]
    Awesome,
    /// Base styles with the palette background on the container.
    Forward,
}

impl DesignVariant {
    /// Looks up a variant by name, case-insensitively.
    ///
    /// Returns `None` for unrecognized names; callers passing the result to
    /// [`resolve`] get the base (un-overlaid) bundle rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("normal") {
            Some(Self::Normal)
        } else if name.eq_ignore_ascii_case("awesome") {
            Some(Self::Awesome)
        } else if name.eq_ignore_ascii_case("forward") {
            Some(Self::Forward)
        } else {
            None
        }
    }
}

impl fmt::Display for DesignVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Awesome => write!(f, "awesome"),
            Self::Forward => write!(f, "forward"),
        }
    }
}

/// Error returned when a variant name is not recognized.
///
/// Strict counterpart to the lenient [`DesignVariant::from_name`], for
/// configuration boundaries that want to reject typos instead of silently
/// falling back to the base look.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown design variant `{0}` (expected `normal`, `awesome`, or `forward`)")]
pub struct ParseVariantError(pub String);

impl FromStr for DesignVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseVariantError(s.trim().to_string()))
    }
}

/// One (region, property, value) assignment in a variant overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleWrite {
    /// Region the write targets.
    pub region: Region,
    /// Property being assigned.
    pub property: Property,
    /// Value being assigned.
    pub value: Value,
}

impl StyleWrite {
    fn new(region: Region, property: Property, value: impl Into<Value>) -> Self {
        Self {
            region,
            property,
            value: value.into(),
        }
    }
}

/// Returns the overlay writes for a variant, in application order.
///
/// The order is fixed at container, title, marker, field; within a region,
/// writes appear in the order they are applied.
pub fn overlay_writes(variant: DesignVariant, palette: &Palette) -> SmallVec<[StyleWrite; 9]> {
    use Property as P;
    use Region as R;

    let mut writes = SmallVec::new();
    match variant {
        DesignVariant::Normal => {
            writes.push(StyleWrite::new(
                R::Container,
                P::BackgroundColor,
                Color::TRANSPARENT,
            ));
        }
        DesignVariant::Awesome => {
            writes.push(StyleWrite::new(
                R::Container,
                P::BackgroundColor,
                palette.background,
            ));
            writes.push(StyleWrite::new(
                R::Container,
                P::Border,
                Border::solid(1, palette.surface),
            ));
            writes.push(StyleWrite::new(
                R::Container,
                P::BorderRadius,
                Length::from(15),
            ));
            writes.push(StyleWrite::new(
                R::Title,
                P::TextStyle,
                TextAttributes::BOLD,
            ));
            writes.push(StyleWrite::new(
                R::Marker,
                P::TextStyle,
                TextAttributes::BOLD,
            ));
            writes.push(StyleWrite::new(
                R::Field,
                P::BackgroundColor,
                palette.background,
            ));
            writes.push(StyleWrite::new(R::Field, P::Color, palette.text));
            writes.push(StyleWrite::new(R::Field, P::Border, Keyword::None));
            writes.push(StyleWrite::new(R::Field, P::Outline, Keyword::None));
        }
        DesignVariant::Forward => {
            writes.push(StyleWrite::new(
                R::Container,
                P::BackgroundColor,
                palette.background,
            ));
        }
    }
    writes
}

/// Resolves the width shared by the container and field regions.
fn resolve_width(width: Option<&Length>) -> Length {
    width.cloned().unwrap_or(Length::FULL)
}

/// Builds the base bundle all variants start from.
fn base_bundle(palette: &Palette, width: &Length) -> StyleBundle {
    let mut bundle = StyleBundle::default();

    let container = &mut bundle.container;
    container.set(Property::Padding, Length::from(10));
    container.set(Property::BorderRadius, Length::from(5));
    container.set(Property::BackgroundColor, palette.background);
    container.set(Property::Width, width.clone());

    let title = &mut bundle.title;
    title.set(Property::FontSize, Length::from(14));
    title.set(Property::MarginBottom, Length::from(5));
    title.set(Property::Color, palette.text);

    let marker = &mut bundle.marker;
    marker.set(Property::Color, ALERT);
    marker.set(Property::MarginLeft, Length::from(2));

    let field = &mut bundle.field;
    field.set(Property::Padding, Length::from(8));
    field.set(Property::BorderRadius, Length::from(3));
    field.set(Property::Border, Border::solid(1, palette.text));
    field.set(Property::BackgroundColor, palette.background);
    field.set(Property::Color, palette.text);
    field.set(Property::Width, width.clone());
    field.set(Property::BoxSizing, Keyword::BorderBox);

    bundle
}

/// Resolves default styles for all four regions.
///
/// `variant == None` (an unrecognized variant name) applies no overlay and
/// returns the base bundle; this is a silent fallback, not a failure. The
/// same width value is written to both the container and field regions.
pub fn resolve(theme: Theme, variant: Option<DesignVariant>, width: Option<&Length>) -> StyleBundle {
    let palette = theme.palette();
    let width = resolve_width(width);
    let mut bundle = base_bundle(palette, &width);

    if let Some(variant) = variant {
        for write in overlay_writes(variant, palette) {
            bundle.region_mut(write.region).set(write.property, write.value);
        }
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weft_ui_core::Color;

    fn all_variants() -> [Option<DesignVariant>; 4] {
        [
            None,
            Some(DesignVariant::Normal),
            Some(DesignVariant::Awesome),
            Some(DesignVariant::Forward),
        ]
    }

    #[test]
    fn test_all_regions_always_populated() {
        for theme in [Theme::Light, Theme::Dark] {
            for variant in all_variants() {
                for width in [None, Some(Length::from(200))] {
                    let bundle = resolve(theme, variant, width.as_ref());
                    for region in Region::ALL {
                        assert!(
                            !bundle.region(region).is_empty(),
                            "{region} empty for {theme} / {variant:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let a = resolve(Theme::Dark, Some(DesignVariant::Awesome), Some(&Length::from(200)));
        let b = resolve(Theme::Dark, Some(DesignVariant::Awesome), Some(&Length::from(200)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_width_fallback_is_full() {
        let bundle = resolve(Theme::Light, Some(DesignVariant::Awesome), None);
        assert_eq!(
            bundle.container.get(Property::Width),
            Some(&Value::Length(Length::FULL))
        );
        assert_eq!(
            bundle.field.get(Property::Width),
            Some(&Value::Length(Length::FULL))
        );
    }

    #[test]
    fn test_width_shared_between_container_and_field() {
        for width in [Length::from(200), Length::from("50vw")] {
            let bundle = resolve(Theme::Light, Some(DesignVariant::Normal), Some(&width));
            assert_eq!(
                bundle.container.get(Property::Width),
                Some(&Value::Length(width.clone()))
            );
            assert_eq!(
                bundle.field.get(Property::Width),
                Some(&Value::Length(width))
            );
        }
    }

    #[test]
    fn test_numeric_width_renders_in_pixels() {
        let bundle = resolve(Theme::Light, None, Some(&Length::from(200)));
        match bundle.field.get(Property::Width) {
            Some(value) => assert_eq!(value.to_string(), "200px"),
            None => panic!("field width missing"),
        }
    }

    #[test]
    fn test_normal_makes_container_transparent() {
        let bundle = resolve(Theme::Light, Some(DesignVariant::Normal), None);
        assert_eq!(
            bundle.container.get(Property::BackgroundColor),
            Some(&Value::Color(Color::TRANSPARENT))
        );
        // Only the container is touched; the field keeps its base border.
        assert_eq!(
            bundle.field.get(Property::Border),
            Some(&Value::Border(Border::solid(1, Theme::Light.palette().text)))
        );
    }

    #[test]
    fn test_awesome_overlay() {
        let palette = Theme::Dark.palette();
        let bundle = resolve(Theme::Dark, Some(DesignVariant::Awesome), None);

        assert_eq!(
            bundle.container.get(Property::Border),
            Some(&Value::Border(Border::solid(1, palette.surface)))
        );
        assert_eq!(
            bundle.container.get(Property::BorderRadius),
            Some(&Value::Length(Length::from(15)))
        );
        assert_eq!(
            bundle.title.get(Property::TextStyle),
            Some(&Value::Attributes(TextAttributes::BOLD))
        );
        assert_eq!(
            bundle.marker.get(Property::TextStyle),
            Some(&Value::Attributes(TextAttributes::BOLD))
        );
        assert_eq!(
            bundle.field.get(Property::Border),
            Some(&Value::Keyword(Keyword::None))
        );
        assert_eq!(
            bundle.field.get(Property::Outline),
            Some(&Value::Keyword(Keyword::None))
        );
    }

    #[test]
    fn test_forward_only_touches_container_background() {
        let base = resolve(Theme::Light, None, None);
        let forward = resolve(Theme::Light, Some(DesignVariant::Forward), None);

        // The base already paints the palette background, so forward is
        // observably identical to it.
        assert_eq!(base, forward);
    }

    #[test]
    fn test_unknown_variant_name_resolves_to_base() {
        let variant = DesignVariant::from_name("sparkly");
        assert_eq!(variant, None);

        let bundle = resolve(Theme::Light, variant, None);
        assert_eq!(bundle, resolve(Theme::Light, None, None));
        assert!(!bundle.container.contains(Property::Border));
    }

    #[test]
    fn test_overlay_writes_region_order() {
        let writes = overlay_writes(DesignVariant::Awesome, Theme::Light.palette());
        let regions: Vec<Region> = writes.iter().map(|w| w.region).collect();

        // Fixed order: container writes first, then title, marker, field.
        let mut sorted = regions.clone();
        sorted.sort_by_key(|r| Region::ALL.iter().position(|x| x == r));
        assert_eq!(regions, sorted);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!(DesignVariant::from_name(" Awesome "), Some(DesignVariant::Awesome));
        assert_eq!("forward".parse(), Ok(DesignVariant::Forward));
        assert_eq!(
            "sparkly".parse::<DesignVariant>(),
            Err(ParseVariantError("sparkly".to_string()))
        );
    }

    #[test]
    fn test_default_variant_is_awesome() {
        assert_eq!(DesignVariant::default(), DesignVariant::Awesome);
    }
}
