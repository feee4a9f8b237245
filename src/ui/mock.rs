//! Mock picker for testing

use super::error::Result;
use super::traits::{Picker, PickerConfig};
use super::types::PickerResult;
use crate::modal::{ModalEvent, SelectionModal};

/// One scripted user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockStep {
    /// Replace the query text
    Type(String),
    /// Tap the visible row at this index
    Tap(usize),
    /// Toggle select-all
    SelectAll,
    /// Press Apply
    Apply,
    /// Press close / back
    Dismiss,
}

/// Mock picker that replays scripted interactions against a real modal
///
/// Useful for testing without requiring user interaction. A script that
/// runs out without a commit or dismissal is reported as aborted.
#[derive(Debug, Clone, Default)]
pub struct MockPicker {
    /// Interactions to replay, in order
    pub steps: Vec<MockStep>,
}

impl MockPicker {
    /// Create a new mock picker with a script
    #[must_use]
    pub const fn new(steps: Vec<MockStep>) -> Self {
        Self { steps }
    }
}

impl Picker for MockPicker {
    fn run(&self, config: PickerConfig) -> Result<PickerResult> {
        let mut modal = SelectionModal::new(config.header, config.options, config.value)
            .with_rules(config.rules);
        modal.set_query(config.query);
        modal.set_visible(true);

        for step in &self.steps {
            let event = match step {
                MockStep::Type(text) => Some(modal.edit_query(text.clone())),
                MockStep::Tap(index) => modal.tap(*index),
                MockStep::SelectAll => {
                    modal.toggle_select_all();
                    None
                }
                MockStep::Apply => modal.apply(),
                MockStep::Dismiss => Some(modal.request_dismiss()),
            };

            match event {
                Some(ModalEvent::QueryChanged(text)) => modal.set_query(text),
                Some(ModalEvent::CommitSingle(label)) => {
                    modal.set_visible(false);
                    return Ok(PickerResult::committed(vec![label]));
                }
                Some(ModalEvent::CommitMulti(labels)) => {
                    modal.set_visible(false);
                    return Ok(PickerResult::committed(labels));
                }
                Some(ModalEvent::DismissRequested) => {
                    modal.set_visible(false);
                    return Ok(PickerResult::aborted());
                }
                None => {}
            }
        }

        Ok(PickerResult::aborted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionValue;
    use crate::testing::{brands, labels};

    #[test]
    fn test_mock_single_free_text() {
        let picker = MockPicker::new(vec![MockStep::Type("Flying V".into()), MockStep::Tap(0)]);
        let config = PickerConfig::new("Brand", brands(), SelectionValue::Single(None));
        let result = picker.run(config).unwrap();

        assert!(!result.aborted);
        assert_eq!(result.selected, vec!["Flying V"]);
    }

    #[test]
    fn test_mock_multi_apply() {
        let picker = MockPicker::new(vec![
            MockStep::Type("oil".into()),
            MockStep::SelectAll,
            MockStep::Apply,
        ]);
        let config = PickerConfig::new(
            "Brands",
            brands(),
            SelectionValue::Multi(labels(&["Shell"])),
        );
        let result = picker.run(config).unwrap();

        assert_eq!(result.selected, labels(&["Shell", "Seaoil", "Unioil"]));
    }

    #[test]
    fn test_mock_dismissed() {
        let picker = MockPicker::new(vec![MockStep::Tap(0), MockStep::Dismiss]);
        let config = PickerConfig::new("Brands", brands(), SelectionValue::Multi(vec![]));
        let result = picker.run(config).unwrap();

        assert!(result.aborted);
        assert!(result.selected.is_empty());
    }

    #[test]
    fn test_mock_script_runs_out() {
        let picker = MockPicker::default();
        let config = PickerConfig::new("Brand", brands(), SelectionValue::Single(None));
        assert!(picker.run(config).unwrap().aborted);
    }
}
