//! Focus handles for interactive controls.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared handle to one focusable element's focus state.
///
/// Each control owns exactly one handle for its editable element, created
/// when the control is built. The handle exposes a `focus()` capability and
/// nothing else mutable; it is not a general pointer into the host's
/// element tree. Clones observe the same state, so the host can keep a
/// clone to mirror focus into its own rendering (or to focus the element by
/// external means, e.g. platform-level tab navigation).
///
/// Focusing an already-focused handle is a no-op.
#[derive(Clone, Default)]
pub struct FocusHandle {
    focused: Arc<AtomicBool>,
}

impl FocusHandle {
    /// Creates a new, unfocused handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfers focus to the element this handle refers to.
    pub fn focus(&self) {
        if !self.focused.swap(true, Ordering::Relaxed) {
            tracing::trace!("focus gained");
        }
    }

    /// Removes focus from the element this handle refers to.
    pub fn blur(&self) {
        if self.focused.swap(false, Ordering::Relaxed) {
            tracing::trace!("focus lost");
        }
    }

    /// Returns true if the element currently has focus.
    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::Relaxed)
    }

    /// Returns true if two handles refer to the same element.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.focused, &other.focused)
    }
}

impl fmt::Debug for FocusHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusHandle")
            .field("focused", &self.is_focused())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unfocused() {
        assert!(!FocusHandle::new().is_focused());
    }

    #[test]
    fn test_focus_and_blur() {
        let handle = FocusHandle::new();
        handle.focus();
        assert!(handle.is_focused());
        handle.blur();
        assert!(!handle.is_focused());
    }

    #[test]
    fn test_focus_is_idempotent() {
        let handle = FocusHandle::new();
        handle.focus();
        handle.focus();
        assert!(handle.is_focused());
    }

    #[test]
    fn test_clones_share_state() {
        let handle = FocusHandle::new();
        let clone = handle.clone();
        clone.focus();
        assert!(handle.is_focused());
        assert!(handle.ptr_eq(&clone));
        assert!(!handle.ptr_eq(&FocusHandle::new()));
    }
}
