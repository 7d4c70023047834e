//! The control trait: what the registry needs from a mounted form control.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// How a control participates in its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// One control per field: text inputs, text areas, selects.
    Single,
    /// Several controls share one field and at most one is selected
    /// (radio buttons sharing a name).
    ExclusiveChoice,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Single => write!(f, "single"),
            ControlKind::ExclusiveChoice => write!(f, "exclusive-choice"),
        }
    }
}

/// A handle to a live, mounted form control.
///
/// The registry never inspects a handle beyond these three queries, so any
/// UI toolkit's element reference can be adapted with a thin wrapper.
///
/// # Example
///
/// ```rust
/// use formbind_core::{Control, ControlKind};
///
/// struct Checkbox {
///     value: String,
///     checked: bool,
/// }
///
/// impl Control for Checkbox {
///     fn content(&self) -> String {
///         self.value.clone()
///     }
///
///     fn kind(&self) -> ControlKind {
///         ControlKind::ExclusiveChoice
///     }
///
///     fn is_selected(&self) -> bool {
///         self.checked
///     }
/// }
/// ```
pub trait Control {
    /// The control's current content.
    fn content(&self) -> String;

    /// Whether the control is a single control or a member of an
    /// exclusive-choice group.
    fn kind(&self) -> ControlKind {
        ControlKind::Single
    }

    /// Whether the control is currently selected. Only consulted for
    /// exclusive-choice controls.
    fn is_selected(&self) -> bool {
        false
    }
}

// Blanket implementations for references and smart pointers

impl<T: Control + ?Sized> Control for &T {
    fn content(&self) -> String {
        (**self).content()
    }

    fn kind(&self) -> ControlKind {
        (**self).kind()
    }

    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
}

impl<T: Control + ?Sized> Control for Box<T> {
    fn content(&self) -> String {
        self.as_ref().content()
    }

    fn kind(&self) -> ControlKind {
        self.as_ref().kind()
    }

    fn is_selected(&self) -> bool {
        self.as_ref().is_selected()
    }
}

impl<T: Control + ?Sized> Control for Rc<T> {
    fn content(&self) -> String {
        self.as_ref().content()
    }

    fn kind(&self) -> ControlKind {
        self.as_ref().kind()
    }

    fn is_selected(&self) -> bool {
        self.as_ref().is_selected()
    }
}
