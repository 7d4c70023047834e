//! In-memory form controls.
//!
//! Headless stand-ins for toolkit widgets: useful for server-side rendering,
//! scripted UIs and tests.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Control, ControlKind};

struct ControlState {
    content: String,
    kind: ControlKind,
    selected: bool,
}

/// An in-memory control with shared, mutable state.
///
/// Clones share state, the way two references to the same widget would:
/// editing one clone is visible through every other. Equality is identity,
/// so two separately created controls with the same content are not equal.
///
/// # Example
///
/// ```rust
/// use formbind_core::{Control, MemoryControl};
///
/// let input = MemoryControl::text("al");
/// let bound = input.clone();
/// input.set_content("alice");
/// assert_eq!(bound.content(), "alice");
/// assert_eq!(input, bound);
/// assert_ne!(input, MemoryControl::text("alice"));
/// ```
#[derive(Clone)]
pub struct MemoryControl {
    state: Rc<RefCell<ControlState>>,
}

impl MemoryControl {
    fn with_state(content: impl Into<String>, kind: ControlKind, selected: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(ControlState {
                content: content.into(),
                kind,
                selected,
            })),
        }
    }

    /// A single-valued control (text input, text area, select).
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_state(content, ControlKind::Single, false)
    }

    /// An exclusive-choice control (radio button).
    pub fn choice(content: impl Into<String>, selected: bool) -> Self {
        Self::with_state(content, ControlKind::ExclusiveChoice, selected)
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.state.borrow_mut().content = content.into();
    }

    pub fn set_selected(&self, selected: bool) {
        self.state.borrow_mut().selected = selected;
    }

    /// Select this control and deselect the others, like clicking a radio
    /// button in a group.
    pub fn select_among(&self, group: &[MemoryControl]) {
        for other in group {
            other.set_selected(false);
        }
        self.set_selected(true);
    }
}

impl Control for MemoryControl {
    fn content(&self) -> String {
        self.state.borrow().content.clone()
    }

    fn kind(&self) -> ControlKind {
        self.state.borrow().kind
    }

    fn is_selected(&self) -> bool {
        self.state.borrow().selected
    }
}

impl PartialEq for MemoryControl {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for MemoryControl {}

impl fmt::Debug for MemoryControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryControl")
            .field("content", &state.content)
            .field("kind", &state.kind)
            .field("selected", &state.selected)
            .finish()
    }
}
