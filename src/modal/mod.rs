//! Selection modal
//!
//! The presentation-independent shell of a picker: it combines the filter
//! and the selection controller behind the prop/signal contract that a
//! screen uses to drive it.
//!
//! Props flow in through setters (`set_visible`, `set_options`,
//! `set_query`, `set_value`). Signals flow out as [`ModalEvent`] values
//! returned from the interaction methods. The modal never hides itself and
//! never stores the query on its own initiative: the caller reacts to
//! events and feeds the resulting props back in.
//!
//! # Examples
//!
//! ```
//! use picklist::modal::{ModalEvent, SelectionModal};
//!
//! let options = vec!["Shell".to_string(), "Petron".to_string()];
//! let mut modal = SelectionModal::multi("Brands", options, vec![]);
//! modal.set_visible(true);
//!
//! assert!(modal.tap(1).is_none());
//! assert_eq!(
//!     modal.apply(),
//!     Some(ModalEvent::CommitMulti(vec!["Petron".to_string()]))
//! );
//! ```

mod events;

pub use events::ModalEvent;

use crate::filter::{DisplayRow, FilterRules, filter_rows};
use crate::selection::{SelectAllState, SelectionController, SelectionMode, SelectionValue};

/// A filterable selection modal
#[derive(Debug, Clone)]
pub struct SelectionModal {
    header: String,
    options: Vec<String>,
    query: String,
    visible: bool,
    rules: FilterRules,
    controller: SelectionController,
    rows: Vec<DisplayRow>,
}

impl SelectionModal {
    /// Create a modal for the given committed value
    #[must_use]
    pub fn new(header: impl Into<String>, options: Vec<String>, value: SelectionValue) -> Self {
        let mut modal = Self {
            header: header.into(),
            options,
            query: String::new(),
            visible: false,
            rules: FilterRules::default(),
            controller: SelectionController::new(value),
            rows: Vec::new(),
        };
        modal.refilter();
        modal
    }

    /// Create a single-select modal
    #[must_use]
    pub fn single(header: impl Into<String>, options: Vec<String>, current: Option<String>) -> Self {
        Self::new(header, options, SelectionValue::Single(current))
    }

    /// Create a multi-select modal
    #[must_use]
    pub fn multi(header: impl Into<String>, options: Vec<String>, committed: Vec<String>) -> Self {
        Self::new(header, options, SelectionValue::Multi(committed))
    }

    /// Use custom filter rules
    #[must_use]
    pub fn with_rules(mut self, rules: FilterRules) -> Self {
        self.rules = rules;
        self.refilter();
        self
    }

    fn refilter(&mut self) {
        self.rows = filter_rows(&self.options, &self.query, self.mode(), &self.rules);
    }

    // ------------------------------------------------------------------
    // Props
    // ------------------------------------------------------------------

    /// Show or hide the modal
    ///
    /// The hidden to visible edge reseeds the pending selection from the
    /// committed value; the opposite edge discards it. Setting the same
    /// value twice does nothing.
    pub fn set_visible(&mut self, visible: bool) {
        match (self.visible, visible) {
            (false, true) => self.controller.on_open(),
            (true, false) => self.controller.on_close(),
            _ => {}
        }
        self.visible = visible;
    }

    /// Replace the option universe
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.refilter();
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Replace the committed value(s)
    pub fn set_value(&mut self, value: SelectionValue) {
        self.controller.set_value(value);
    }

    /// Replace the header text
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.controller.mode()
    }

    #[must_use]
    pub const fn controller(&self) -> &SelectionController {
        &self.controller
    }

    // ------------------------------------------------------------------
    // Derived view state
    // ------------------------------------------------------------------

    /// Rows currently visible
    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// True when the caller must render the empty-state message
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `label` renders as checked
    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.controller.is_selected(label)
    }

    fn visible_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    /// Select-all checkbox state, or `None` in single-select mode
    #[must_use]
    pub fn select_all_state(&self) -> Option<SelectAllState> {
        match &self.controller {
            SelectionController::Multi(multi) => {
                Some(multi.select_all_state(&self.visible_labels()))
            }
            SelectionController::Single(_) => None,
        }
    }

    /// Number of pending labels (multi) or 0/1 for the current value (single)
    #[must_use]
    pub fn selected_count(&self) -> usize {
        match &self.controller {
            SelectionController::Multi(multi) => multi.pending().map_or(0, |p| p.len()),
            SelectionController::Single(single) => usize::from(single.current().is_some()),
        }
    }

    // ------------------------------------------------------------------
    // Interactions
    // ------------------------------------------------------------------

    /// Report a keystroke in the query field
    ///
    /// The modal does not store `text`; the caller is expected to pass it
    /// back through [`SelectionModal::set_query`].
    #[must_use]
    pub fn edit_query(&self, text: impl Into<String>) -> ModalEvent {
        ModalEvent::QueryChanged(text.into())
    }

    /// Tap the visible row at `index`
    ///
    /// Single-select returns a commit for the row's label and leaves all
    /// state untouched. Multi-select toggles the label in the pending set
    /// and returns `None`. Out-of-range taps and taps on a hidden modal do
    /// nothing.
    pub fn tap(&mut self, index: usize) -> Option<ModalEvent> {
        if !self.visible {
            return None;
        }
        let label = self.rows.get(index)?.label.clone();
        match &mut self.controller {
            SelectionController::Single(single) => Some(ModalEvent::CommitSingle(single.tap(&label))),
            SelectionController::Multi(multi) => {
                multi.toggle(&label);
                None
            }
        }
    }

    /// Toggle select-all over the visible rows
    ///
    /// Returns `false` when nothing happened (single-select, hidden, or no
    /// visible rows).
    pub fn toggle_select_all(&mut self) -> bool {
        if !self.visible || self.rows.is_empty() {
            return false;
        }
        let visible: Vec<String> = self.rows.iter().map(|row| row.label.clone()).collect();
        let visible: Vec<&str> = visible.iter().map(String::as_str).collect();
        match &mut self.controller {
            SelectionController::Multi(multi) => {
                multi.toggle_all(&visible);
                true
            }
            SelectionController::Single(_) => false,
        }
    }

    /// Apply pending edits (multi-select only)
    #[must_use]
    pub fn apply(&self) -> Option<ModalEvent> {
        if !self.visible {
            return None;
        }
        match &self.controller {
            SelectionController::Multi(multi) => Some(ModalEvent::CommitMulti(multi.apply())),
            SelectionController::Single(_) => None,
        }
    }

    /// Ask the caller to close the modal
    ///
    /// Raised for the close control, a backdrop tap or the back key. The
    /// modal stays visible until the caller calls `set_visible(false)`.
    #[must_use]
    pub const fn request_dismiss(&self) -> ModalEvent {
        ModalEvent::DismissRequested
    }
}
