//! Core presentation value types for Weft UI.
//!
//! This crate provides the fundamental value types shared by the Weft UI
//! component crates:
//!
//! - [`color`]: RGBA color representation with hex and CSS serialization
//! - [`length`]: pixel/percent/pass-through length values
//! - [`attributes`]: text decoration attributes (bold, italic, etc.)
//! - [`error`]: parse-error types for the above
//!
//! # Examples
//!
//! ```
//! use weft_ui_core::{Color, Length, TextAttributes};
//!
//! let ink = Color::from_hex("#333333").unwrap();
//! assert!(!ink.is_transparent());
//!
//! let width = Length::from(200);
//! assert_eq!(width.to_string(), "200px");
//!
//! let emphasis = TextAttributes::BOLD | TextAttributes::ITALIC;
//! assert!(emphasis.contains(TextAttributes::BOLD));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod attributes;
pub mod color;
pub mod error;
pub mod length;

// Re-export commonly used types at the crate root for convenience
pub use attributes::TextAttributes;
pub use color::Color;
pub use error::{ColorParseError, LengthParseError};
pub use length::Length;
