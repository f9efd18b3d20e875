//! Labeled single-line text field control.
//!
//! [`Field`] is a headless control: it owns no value state and paints
//! nothing. The caller supplies the displayed value and the per-region
//! style overrides; the host rendering layer consumes [`Field::view`] and
//! feeds pointer, change, and key events back into the dispatch methods.
//!
//! - A missing value always renders as the empty string; the control is
//!   never in an uncontrolled mode.
//! - Pressing anywhere in the container invokes `on_press` (if any) and
//!   then transfers focus to the editable element, in that order.
//! - A change invokes `on_change` with the raw event and then
//!   `on_change_text` with just the new string, in that order.
//!
//! # Example
//!
//! ```
//! use weft_ui_widgets::field::Field;
//! use weft_ui_widgets::event::PointerEvent;
//! use weft_ui_style::{DesignVariant, Theme};
//!
//! let field = Field::builder()
//!     .title("Name")
//!     .value("Ada")
//!     .theme(Theme::Dark)
//!     .design(DesignVariant::Awesome)
//!     .width(200)
//!     .build();
//!
//! field.handle_press(&PointerEvent::primary(3.0, 7.0));
//! assert!(field.focus_handle().is_focused());
//! ```

use crate::event::{ChangeEvent, EventResult, KeyEvent, PointerEvent};
use crate::focus::FocusHandle;
use weft_ui_core::Length;
use weft_ui_style::{resolve, DesignVariant, RegionStyle, StyleBundle, StyleOverrides, Theme};

/// Suffix appended to the title when the field is required.
pub const REQUIRED_MARKER: &str = " *";

type ChangeCallback = Box<dyn Fn(&ChangeEvent) + Send + Sync>;
type TextCallback = Box<dyn Fn(&str) + Send + Sync>;
type PressCallback = Box<dyn Fn(&PointerEvent) + Send + Sync>;
type KeyCallback = Box<dyn Fn(&KeyEvent) + Send + Sync>;

/// A themeable, labeled single-line text field.
pub struct Field {
    /// Label text; an empty title removes the label node from the view.
    title: String,
    /// Input type passed through verbatim to the host's editable element.
    input_type: String,
    /// Caller-owned value; `None` displays as the empty string.
    value: Option<String>,
    /// Whether the editable element rejects edits.
    read_only: bool,
    /// Whether the required marker shows its suffix.
    required: bool,
    /// Palette selector.
    theme: Theme,
    /// Design variant; `None` (an unrecognized name) keeps the base look.
    design: Option<DesignVariant>,
    /// Optional width shared by the container and field regions.
    width: Option<Length>,
    /// Whole-region style replacements.
    overrides: StyleOverrides,
    /// Focus handle for the editable element.
    focus: FocusHandle,
    /// Raw change callback.
    on_change: Option<ChangeCallback>,
    /// Convenience text-value callback, invoked after `on_change`.
    on_change_text: Option<TextCallback>,
    /// Container press callback, invoked before focus transfer.
    on_press: Option<PressCallback>,
    /// Key-down callback, forwarded unmodified.
    on_key_down: Option<KeyCallback>,
    /// Key-up callback, forwarded unmodified.
    on_key_up: Option<KeyCallback>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("title", &self.title)
            .field("input_type", &self.input_type)
            .field("value", &self.value)
            .field("read_only", &self.read_only)
            .field("required", &self.required)
            .field("theme", &self.theme)
            .field("design", &self.design)
            .field("width", &self.width)
            .field("overrides", &self.overrides)
            .field("focus", &self.focus)
            .field("on_change", &self.on_change.as_ref().map(|_| "<callback>"))
            .field(
                "on_change_text",
                &self.on_change_text.as_ref().map(|_| "<callback>"),
            )
            .field("on_press", &self.on_press.as_ref().map(|_| "<callback>"))
            .field("on_key_down", &self.on_key_down.as_ref().map(|_| "<callback>"))
            .field("on_key_up", &self.on_key_up.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    /// Creates a field with default configuration.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            input_type: "text".to_string(),
            value: None,
            read_only: false,
            required: false,
            theme: Theme::default(),
            design: Some(DesignVariant::default()),
            width: None,
            overrides: StyleOverrides::default(),
            focus: FocusHandle::new(),
            on_change: None,
            on_change_text: None,
            on_press: None,
            on_key_down: None,
            on_key_up: None,
        }
    }

    /// Creates a builder for constructing a field.
    pub fn builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the label text.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the label text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the input type passed through to the host.
    #[inline]
    pub fn input_type(&self) -> &str {
        &self.input_type
    }

    /// Returns the caller-supplied value, if any.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the value as displayed: the supplied value or `""`.
    #[inline]
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Sets the caller-owned value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Clears the caller-owned value; the field displays `""`.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Returns true if the field is read-only.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Sets the read-only state.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Returns true if the required marker shows its suffix.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Sets the required state.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Returns the theme.
    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Returns the design variant, if a recognized one is configured.
    #[inline]
    pub fn design(&self) -> Option<DesignVariant> {
        self.design
    }

    /// Sets the design variant.
    pub fn set_design(&mut self, design: DesignVariant) {
        self.design = Some(design);
    }

    /// Sets the design variant by name.
    ///
    /// An unrecognized name selects the base (un-overlaid) look.
    pub fn set_design_name(&mut self, name: &str) {
        self.design = DesignVariant::from_name(name);
    }

    /// Returns the configured width, if any.
    #[inline]
    pub fn width(&self) -> Option<&Length> {
        self.width.as_ref()
    }

    /// Sets the width shared by the container and field regions.
    pub fn set_width(&mut self, width: impl Into<Length>) {
        self.width = Some(width.into());
    }

    /// Clears the width; the control spans its parent.
    pub fn clear_width(&mut self) {
        self.width = None;
    }

    /// Replaces the style overrides.
    pub fn set_overrides(&mut self, overrides: StyleOverrides) {
        self.overrides = overrides;
    }

    /// Returns the focus handle for the editable element.
    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus
    }

    // ========================================================================
    // Style resolution
    // ========================================================================

    /// Computes the final per-region styles for the current configuration.
    ///
    /// Defaults are recomputed from the current props on every call and the
    /// caller's overrides applied with whole-region precedence; there is no
    /// cached state to invalidate.
    pub fn styles(&self) -> StyleBundle {
        resolve(self.theme, self.design, self.width.as_ref()).merged(&self.overrides)
    }

    /// Builds the view the host renders.
    ///
    /// The title node is present only for a non-empty title. The marker node
    /// is always present so that toggling `required` never changes the
    /// node structure; its text is [`REQUIRED_MARKER`] when required and
    /// `""` otherwise.
    pub fn view(&self) -> FieldView {
        let styles = self.styles();
        let title = (!self.title.is_empty()).then(|| TextView {
            text: self.title.clone(),
            style: styles.title,
        });
        let marker_text = if self.required { REQUIRED_MARKER } else { "" };

        FieldView {
            container: styles.container,
            title,
            marker: TextView {
                text: marker_text.to_string(),
                style: styles.marker,
            },
            input: InputView {
                input_type: self.input_type.clone(),
                value: self.display_value().to_string(),
                read_only: self.read_only,
                style: styles.field,
            },
        }
    }

    // ========================================================================
    // Event dispatch
    // ========================================================================

    /// Handles an activation anywhere inside the container.
    ///
    /// Invokes `on_press` first (if registered), then unconditionally
    /// transfers focus to the editable element.
    pub fn handle_press(&self, event: &PointerEvent) -> EventResult {
        tracing::trace!(x = f64::from(event.x), y = f64::from(event.y), "field container pressed");
        if let Some(on_press) = &self.on_press {
            on_press(event);
        }
        self.focus.focus();
        EventResult::Handled
    }

    /// Handles a value change from the host's editable element.
    ///
    /// Forwards the raw event to `on_change` first, then the new string
    /// value to `on_change_text`.
    pub fn handle_change(&self, event: &ChangeEvent) -> EventResult {
        tracing::trace!(len = event.value.len(), "field value changed");
        if let Some(on_change) = &self.on_change {
            on_change(event);
        }
        if let Some(on_change_text) = &self.on_change_text {
            on_change_text(&event.value);
        }
        EventResult::Handled
    }

    /// Forwards a key-down event unmodified.
    pub fn handle_key_down(&self, event: &KeyEvent) -> EventResult {
        if let Some(on_key_down) = &self.on_key_down {
            on_key_down(event);
            return EventResult::Handled;
        }
        EventResult::Ignored
    }

    /// Forwards a key-up event unmodified.
    pub fn handle_key_up(&self, event: &KeyEvent) -> EventResult {
        if let Some(on_key_up) = &self.on_key_up {
            on_key_up(event);
            return EventResult::Handled;
        }
        EventResult::Ignored
    }
}

// ============================================================================
// View output
// ============================================================================

/// A text node with its final style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    /// The text content.
    pub text: String,
    /// The resolved style for this node.
    pub style: RegionStyle,
}

/// The editable element with its final style.
#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    /// Input type, passed through verbatim.
    pub input_type: String,
    /// Displayed value; never absent.
    pub value: String,
    /// Whether the element rejects edits.
    pub read_only: bool,
    /// The resolved style for this node.
    pub style: RegionStyle,
}

/// The complete view of a field, consumed by the host rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    /// Final container style.
    pub container: RegionStyle,
    /// Label node, present only for a non-empty title.
    pub title: Option<TextView>,
    /// Required-marker node, always present.
    pub marker: TextView,
    /// The editable element.
    pub input: InputView,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing [`Field`] controls.
pub struct FieldBuilder {
    inner: Field,
}

impl Default for FieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self {
            inner: Field::new(),
        }
    }

    /// Sets the label text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = title.into();
        self
    }

    /// Sets the input type passed through to the host.
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.inner.input_type = input_type.into();
        self
    }

    /// Sets the caller-owned value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.inner.value = Some(value.into());
        self
    }

    /// Sets the read-only state.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.inner.read_only = read_only;
        self
    }

    /// Sets the required state.
    pub fn required(mut self, required: bool) -> Self {
        self.inner.required = required;
        self
    }

    /// Sets the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.inner.theme = theme;
        self
    }

    /// Sets the design variant.
    pub fn design(mut self, design: DesignVariant) -> Self {
        self.inner.design = Some(design);
        self
    }

    /// Sets the design variant by name; unknown names select the base look.
    pub fn design_name(mut self, name: &str) -> Self {
        self.inner.design = DesignVariant::from_name(name);
        self
    }

    /// Sets the width shared by the container and field regions.
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.inner.width = Some(width.into());
        self
    }

    /// Sets per-region style overrides.
    pub fn style(mut self, overrides: StyleOverrides) -> Self {
        self.inner.overrides = overrides;
        self
    }

    /// Uses a host-created focus handle instead of a fresh one.
    ///
    /// Lets the host keep its own clone to mirror or drive focus externally.
    pub fn focus_handle(mut self, handle: FocusHandle) -> Self {
        self.inner.focus = handle;
        self
    }

    /// Sets the raw change callback.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.inner.on_change = Some(Box::new(callback));
        self
    }

    /// Sets the text-value callback, invoked after the raw change callback.
    pub fn on_change_text<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.inner.on_change_text = Some(Box::new(callback));
        self
    }

    /// Sets the container press callback, invoked before focus transfer.
    pub fn on_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PointerEvent) + Send + Sync + 'static,
    {
        self.inner.on_press = Some(Box::new(callback));
        self
    }

    /// Sets the key-down callback.
    pub fn on_key_down<F>(mut self, callback: F) -> Self
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        self.inner.on_key_down = Some(Box::new(callback));
        self
    }

    /// Sets the key-up callback.
    pub fn on_key_up<F>(mut self, callback: F) -> Self
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        self.inner.on_key_up = Some(Box::new(callback));
        self
    }

    /// Builds the field.
    pub fn build(self) -> Field {
        self.inner
    }
}
