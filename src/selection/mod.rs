//! Selection state
//!
//! Two interaction profiles share one controller type:
//!
//! - **Single** (radio): every tap is an immediate commit, the selected value
//!   lives with the caller and may be free text outside the option list.
//! - **Multi** (checkbox): taps edit a pending set that is reset from the
//!   committed set whenever the modal opens, and only surfaces on Apply.
//!
//! The profile is chosen once when the controller is built and never
//! changes afterwards.

mod multi;
mod single;

pub use multi::{MultiSelect, PendingSelection};
pub use single::SingleSelect;

/// Interaction mode of a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One value, committed on tap
    #[default]
    Single,
    /// Any number of values, committed on Apply
    Multi,
}

impl SelectionMode {
    /// Map a multi-select flag to a mode
    #[must_use]
    pub const fn from_multi(multi: bool) -> Self {
        if multi { Self::Multi } else { Self::Single }
    }

    /// Check if this is multi-select mode
    #[must_use]
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::Multi)
    }
}

/// How many of the visible rows are pending
///
/// Only a rendering hint for the select-all checkbox. Toggling is always
/// all-or-nothing: anything short of `All` selects every visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    /// No visible row is selected
    None,
    /// Some but not all visible rows are selected
    Partial,
    /// Every visible row is selected
    All,
}

/// Committed value(s) supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    /// Current single-select value
    Single(Option<String>),
    /// Committed multi-select values
    Multi(Vec<String>),
}

impl SelectionValue {
    /// Build a value for `mode` from a list of preselected labels
    ///
    /// Single-select keeps only the first label.
    #[must_use]
    pub fn from_values(mode: SelectionMode, values: Vec<String>) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(values.into_iter().next()),
            SelectionMode::Multi => Self::Multi(values),
        }
    }
}

/// Selection controller for one modal
#[derive(Debug, Clone)]
pub enum SelectionController {
    /// Radio behavior
    Single(SingleSelect),
    /// Checkbox behavior with pending edits
    Multi(MultiSelect),
}

impl SelectionController {
    /// Build a controller for the given committed value
    #[must_use]
    pub fn new(value: SelectionValue) -> Self {
        match value {
            SelectionValue::Single(current) => Self::Single(SingleSelect::new(current)),
            SelectionValue::Multi(committed) => Self::Multi(MultiSelect::new(committed)),
        }
    }

    /// Mode of this controller
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multi(_) => SelectionMode::Multi,
        }
    }

    /// Replace the committed value
    ///
    /// A value for the other mode is ignored.
    pub fn set_value(&mut self, value: SelectionValue) {
        match (self, value) {
            (Self::Single(single), SelectionValue::Single(current)) => single.set_current(current),
            (Self::Multi(multi), SelectionValue::Multi(committed)) => multi.set_committed(committed),
            _ => {}
        }
    }

    /// Called on the hidden to visible edge
    pub fn on_open(&mut self) {
        if let Self::Multi(multi) = self {
            multi.open();
        }
    }

    /// Called on the visible to hidden edge
    pub fn on_close(&mut self) {
        if let Self::Multi(multi) = self {
            multi.close();
        }
    }

    /// Whether a row with this label renders as checked
    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        match self {
            Self::Single(single) => single.is_selected(label),
            Self::Multi(multi) => multi.is_selected(label),
        }
    }
}
