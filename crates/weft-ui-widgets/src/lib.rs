//! Interactive form controls for Weft UI.
//!
//! This crate provides the control-surface layer: headless widgets that
//! merge caller style overrides over resolved defaults, describe their view
//! for a host rendering layer, and re-dispatch host events to caller
//! callbacks.
//!
//! # Module Structure
//!
//! - [`event`]: pointer, change, and key event types plus [`EventResult`]
//! - [`focus`]: the shared [`FocusHandle`] for editable elements
//! - [`field`]: the labeled single-line text [`Field`] control
//!
//! # Example
//!
//! ```
//! use weft_ui_widgets::prelude::*;
//!
//! let field = Field::builder()
//!     .title("Email")
//!     .input_type("email")
//!     .required(true)
//!     .theme(Theme::Dark)
//!     .on_change_text(|value| println!("value: {value}"))
//!     .build();
//!
//! let view = field.view();
//! assert_eq!(view.marker.text, " *");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod event;
pub mod field;
pub mod focus;

// Re-exports for convenience
pub use event::{
    ChangeEvent, EventResult, Key, KeyEvent, Modifiers, PointerButton, PointerEvent,
};
pub use field::{Field, FieldBuilder, FieldView, InputView, TextView, REQUIRED_MARKER};
pub use focus::FocusHandle;

/// Commonly used types for building and driving controls.
pub mod prelude {
    pub use crate::event::{ChangeEvent, EventResult, KeyEvent, PointerEvent};
    pub use crate::field::{Field, FieldView};
    pub use crate::focus::FocusHandle;
    pub use weft_ui_core::{Color, Length, TextAttributes};
    pub use weft_ui_style::{DesignVariant, RegionStyle, StyleOverrides, Theme};
}
