//! Theme palettes and style resolution for Weft UI.
//!
//! This crate turns a `(theme, design variant, width)` triple into concrete
//! per-region presentation styles for the labeled text-field control:
//!
//! - [`theme`]: the closed light/dark palette lookup
//! - [`property`]: typed property keys and values with CSS serialization
//! - [`region`]: ordered, last-writer-wins per-region style declarations
//! - [`bundle`]: the four-region [`StyleBundle`] and caller [`StyleOverrides`]
//! - [`resolve`]: the pure resolver and its variant overlay write-lists
//!
//! # Example
//!
//! ```
//! use weft_ui_style::{resolve, DesignVariant, Property, Theme};
//! use weft_ui_core::Length;
//!
//! let width = Length::from(200);
//! let bundle = resolve(Theme::Dark, Some(DesignVariant::Awesome), Some(&width));
//!
//! let field_width = bundle.field.get(Property::Width).unwrap();
//! assert_eq!(field_width.to_string(), "200px");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod bundle;
pub mod property;
pub mod region;
pub mod resolve;
pub mod theme;

pub use bundle::{Region, StyleBundle, StyleOverrides};
pub use property::{Border, Keyword, LineStyle, Property, Value};
pub use region::RegionStyle;
pub use resolve::{overlay_writes, resolve, DesignVariant, ParseVariantError, StyleWrite};
pub use theme::{Palette, ParseThemeError, Theme, ALERT};
