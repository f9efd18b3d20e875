//! Weft UI: renderer-agnostic themeable form controls for Rust.
//!
//! This crate re-exports the Weft UI member crates:
//! - [`core`]: presentation value types (colors, lengths, text attributes)
//! - [`style`]: theme palettes and the pure style resolver
//! - [`widgets`]: interactive controls and their event contracts
//!
//! # Example
//!
//! ```
//! use weft_ui::prelude::*;
//!
//! let field = Field::builder()
//!     .title("Name")
//!     .theme(Theme::Dark)
//!     .design(DesignVariant::Awesome)
//!     .width(200)
//!     .build();
//!
//! let view = field.view();
//! assert!(view.container.to_css().contains("width: 200px;"));
//! ```

pub use weft_ui_core as core;
pub use weft_ui_style as style;
pub use weft_ui_widgets as widgets;

/// Commonly used types from all member crates.
pub mod prelude {
    pub use weft_ui_core::{Color, Length, TextAttributes};
    pub use weft_ui_style::{
        resolve, DesignVariant, Property, Region, RegionStyle, StyleBundle, StyleOverrides, Theme,
    };
    pub use weft_ui_widgets::{
        ChangeEvent, EventResult, Field, FieldView, FocusHandle, KeyEvent, PointerEvent,
    };
}
