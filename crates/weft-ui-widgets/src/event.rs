//! Event types delivered by the host rendering layer.
//!
//! The host owns the actual input devices; controls in this crate only see
//! the events the host feeds into their dispatch methods and report back
//! whether an event was consumed.

use std::fmt;

/// Keyboard modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key is pressed.
    pub shift: bool,
    /// Control key is pressed.
    pub ctrl: bool,
    /// Alt key is pressed.
    pub alt: bool,
    /// Meta/Super/Command key is pressed.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub const fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut write_mod = |f: &mut fmt::Formatter<'_>, s: &str| -> fmt::Result {
            if !first {
                write!(f, "+")?;
            }
            first = false;
            write!(f, "{}", s)
        };

        if self.ctrl {
            write_mod(f, "Ctrl")?;
        }
        if self.alt {
            write_mod(f, "Alt")?;
        }
        if self.shift {
            write_mod(f, "Shift")?;
        }
        if self.meta {
            write_mod(f, "Meta")?;
        }
        Ok(())
    }
}

/// Keyboard key identifiers forwarded from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Escape,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::Enter => write!(f, "Enter"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Tab => write!(f, "Tab"),
            Self::Escape => write!(f, "Escape"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new key event.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a key event with no modifiers.
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Creates a key event for a character.
    pub const fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// The middle button.
    Middle,
    /// Additional buttons (numbered).
    Other(u8),
}

/// A pointer event on a rendered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The button involved.
    pub button: PointerButton,
    /// X coordinate, in the host's units.
    pub x: f32,
    /// Y coordinate, in the host's units.
    pub y: f32,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates a new pointer event.
    pub const fn new(button: PointerButton, x: f32, y: f32, modifiers: Modifiers) -> Self {
        Self {
            button,
            x,
            y,
            modifiers,
        }
    }

    /// Creates a primary-button event at the given position.
    pub const fn primary(x: f32, y: f32) -> Self {
        Self::new(PointerButton::Primary, x, y, Modifiers::NONE)
    }

    /// Returns true if this is a primary-button event.
    pub const fn is_primary(&self) -> bool {
        matches!(self.button, PointerButton::Primary)
    }
}

/// A value-change event from the host's editable element.
///
/// Carries the raw new value; the host constructs one whenever the
/// underlying value changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The new text value.
    pub value: String,
}

impl ChangeEvent {
    /// Creates a new change event.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was consumed, should not propagate further.
    Handled,
    /// Event was not consumed, should propagate to the parent.
    Ignored,
}

impl EventResult {
    /// Returns true if the event was handled.
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    /// Returns true if the event was ignored.
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_display() {
        assert_eq!(KeyEvent::new(Key::Char('a'), Modifiers::CTRL).to_string(), "Ctrl+a");
        assert_eq!(KeyEvent::plain(Key::Enter).to_string(), "Enter");
    }

    #[test]
    fn test_pointer_primary() {
        assert!(PointerEvent::primary(4.0, 2.0).is_primary());
        let secondary = PointerEvent::new(PointerButton::Secondary, 0.0, 0.0, Modifiers::NONE);
        assert!(!secondary.is_primary());
    }

    #[test]
    fn test_event_result_from_bool() {
        assert!(EventResult::from(true).is_handled());
        assert!(EventResult::from(false).is_ignored());
    }
}
