//! Checkbox-style selection with pending edits

use super::SelectAllState;
use indexmap::IndexSet;

/// Labels chosen during one modal presentation
///
/// Insertion order is kept so Apply reports values in the order the user
/// picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingSelection {
    labels: IndexSet<String>,
}

impl PendingSelection {
    /// Seed a pending selection from the committed values
    #[must_use]
    pub fn reconcile(committed: &[String]) -> Self {
        Self {
            labels: committed.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    fn toggle(&mut self, label: &str) {
        if !self.labels.shift_remove(label) {
            self.labels.insert(label.to_string());
        }
    }

    fn to_vec(&self) -> Vec<String> {
        self.labels.iter().cloned().collect()
    }
}

/// Multi-select profile
///
/// `committed` mirrors the caller's value. `pending` only exists while the
/// modal is visible.
#[derive(Debug, Clone, Default)]
pub struct MultiSelect {
    committed: Vec<String>,
    pending: Option<PendingSelection>,
}

impl MultiSelect {
    #[must_use]
    pub const fn new(committed: Vec<String>) -> Self {
        Self {
            committed,
            pending: None,
        }
    }

    /// Replace the caller-owned committed values
    ///
    /// Pending edits of an open modal are left alone; they are reseeded on
    /// the next open.
    pub fn set_committed(&mut self, committed: Vec<String>) {
        self.committed = committed;
    }

    #[must_use]
    pub fn committed(&self) -> &[String] {
        &self.committed
    }

    /// Pending selection, if the modal is open
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a presentation with pending reset to the committed values
    pub fn open(&mut self) {
        self.pending = Some(PendingSelection::reconcile(&self.committed));
    }

    /// End a presentation, discarding pending edits
    pub fn close(&mut self) {
        self.pending = None;
    }

    /// Flip membership of one label in the pending set
    pub fn toggle(&mut self, label: &str) {
        if let Some(pending) = self.pending.as_mut() {
            pending.toggle(label);
        }
    }

    /// Checked state is read from pending, never from committed
    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.pending.as_ref().is_some_and(|p| p.contains(label))
    }

    /// Classify the visible rows against the pending set
    #[must_use]
    pub fn select_all_state(&self, visible: &[&str]) -> SelectAllState {
        let selected = visible.iter().filter(|l| self.is_selected(l)).count();
        if visible.is_empty() || selected == 0 {
            SelectAllState::None
        } else if selected == visible.len() {
            SelectAllState::All
        } else {
            SelectAllState::Partial
        }
    }

    /// Select or deselect every visible row
    ///
    /// If all visible labels are pending they are removed, otherwise every
    /// visible label is added. Labels outside `visible` are untouched.
    pub fn toggle_all(&mut self, visible: &[&str]) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if visible.iter().all(|label| pending.contains(label)) {
            for label in visible {
                pending.labels.shift_remove(*label);
            }
        } else {
            for label in visible {
                pending.labels.insert((*label).to_string());
            }
        }
    }

    /// Commit payload for Apply
    #[must_use]
    pub fn apply(&self) -> Vec<String> {
        self.pending
            .as_ref()
            .map_or_else(Vec::new, PendingSelection::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::labels;

    fn pending_labels(multi: &MultiSelect) -> Vec<String> {
        multi.apply()
    }

    #[test]
    fn test_reconcile_dedups_committed() {
        let pending = PendingSelection::reconcile(&labels(&["Shell", "Shell", "Petron"]));
        assert_eq!(pending.len(), 2);
        assert_eq!(pending.iter().collect::<Vec<_>>(), vec!["Shell", "Petron"]);
    }

    #[test]
    fn test_toggle_is_noop_when_closed() {
        let mut multi = MultiSelect::new(vec![]);
        multi.toggle("Shell");

        assert!(!multi.is_open());
        assert!(multi.apply().is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut multi = MultiSelect::new(vec![]);
        multi.open();

        multi.toggle("Shell");
        assert!(multi.is_selected("Shell"));

        multi.toggle("Shell");
        assert!(!multi.is_selected("Shell"));
    }

    #[test]
    fn test_pending_does_not_touch_committed() {
        let mut multi = MultiSelect::new(labels(&["Shell"]));
        multi.open();
        multi.toggle("Shell");
        multi.toggle("Caltex");

        assert_eq!(multi.committed(), labels(&["Shell"]).as_slice());
        assert_eq!(pending_labels(&multi), labels(&["Caltex"]));
    }

    #[test]
    fn test_reopen_resets_pending() {
        let mut multi = MultiSelect::new(labels(&["Shell"]));
        multi.open();
        multi.toggle("Caltex");
        multi.close();

        multi.open();
        assert_eq!(pending_labels(&multi), labels(&["Shell"]));
    }

    #[test]
    fn test_toggle_all_scoped_to_visible() {
        let mut multi = MultiSelect::new(labels(&["A"]));
        multi.open();

        multi.toggle_all(&["B", "C"]);
        assert_eq!(pending_labels(&multi), labels(&["A", "B", "C"]));

        multi.toggle_all(&["B", "C"]);
        assert_eq!(pending_labels(&multi), labels(&["A"]));
    }

    #[test]
    fn test_toggle_all_completes_partial_selection() {
        let mut multi = MultiSelect::new(labels(&["B"]));
        multi.open();

        assert_eq!(multi.select_all_state(&["B", "C"]), SelectAllState::Partial);
        multi.toggle_all(&["B", "C"]);
        assert_eq!(multi.select_all_state(&["B", "C"]), SelectAllState::All);
        assert_eq!(pending_labels(&multi), labels(&["B", "C"]));
    }

    #[test]
    fn test_toggle_all_with_nothing_visible() {
        let mut multi = MultiSelect::new(labels(&["A"]));
        multi.open();

        multi.toggle_all(&[]);
        assert_eq!(pending_labels(&multi), labels(&["A"]));
        assert_eq!(multi.select_all_state(&[]), SelectAllState::None);
    }

    #[test]
    fn test_set_committed_applies_on_next_open() {
        let mut multi = MultiSelect::new(vec![]);
        multi.open();
        multi.set_committed(labels(&["Unioil"]));
        assert!(!multi.is_selected("Unioil"));

        multi.close();
        multi.open();
        assert!(multi.is_selected("Unioil"));
    }
}
