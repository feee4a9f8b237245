//! Core traits for UI abstraction layer

use super::error::Result;
use super::types::{PickerLabels, PickerResult};
use crate::config::PicklistConfig;
use crate::filter::FilterRules;
use crate::selection::{SelectionMode, SelectionValue};

/// Configuration for a picker session
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Header text of the modal
    pub header: String,
    /// Option universe
    pub options: Vec<String>,
    /// Committed value(s); also decides the selection mode
    pub value: SelectionValue,
    /// Initial query text
    pub query: String,
    /// Filtering rules
    pub rules: FilterRules,
    /// Create-row suffix and empty-state message
    pub labels: PickerLabels,
    /// Maximum query length accepted by the search field
    pub max_query_len: usize,
}

impl PickerConfig {
    /// Create a basic picker configuration
    #[must_use]
    pub fn new(header: impl Into<String>, options: Vec<String>, value: SelectionValue) -> Self {
        Self {
            header: header.into(),
            options,
            value,
            query: String::new(),
            rules: FilterRules::default(),
            labels: PickerLabels::default(),
            max_query_len: 50,
        }
    }

    /// Take rules, labels and query bound from the application config
    #[must_use]
    pub fn with_settings(mut self, settings: &PicklistConfig) -> Self {
        self.rules = settings.filter_rules();
        self.labels = PickerLabels {
            create_suffix: settings.create_suffix.clone(),
            empty_message: settings.empty_message.clone(),
        };
        self.max_query_len = settings.max_query_len;
        self
    }

    /// Set the initial query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set filtering rules
    #[must_use]
    pub fn with_rules(mut self, rules: FilterRules) -> Self {
        self.rules = rules;
        self
    }

    /// Selection mode implied by the value
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self.value {
            SelectionValue::Single(_) => SelectionMode::Single,
            SelectionValue::Multi(_) => SelectionMode::Multi,
        }
    }
}

/// Trait for picker implementations
///
/// This trait abstracts away the specific picker backend,
/// allowing the terminal UI to be swapped out for a mock in tests
/// or other front ends in the future.
pub trait Picker {
    /// Run the picker with given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the picker cannot be initialized or
    /// if the operation fails.
    fn run(&self, config: PickerConfig) -> Result<PickerResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_value() {
        let single = PickerConfig::new("Brand", vec![], SelectionValue::Single(None));
        let multi = PickerConfig::new("Brands", vec![], SelectionValue::Multi(vec![]));

        assert_eq!(single.mode(), SelectionMode::Single);
        assert_eq!(multi.mode(), SelectionMode::Multi);
    }

    #[test]
    fn test_with_settings() {
        let mut settings = PicklistConfig::default();
        settings.reserved_prefix.clear();
        settings.create_suffix = "[new]".to_string();
        settings.max_query_len = 12;

        let config = PickerConfig::new("Brand", vec![], SelectionValue::Single(None))
            .with_settings(&settings)
            .with_query("sh");

        assert_eq!(config.rules, FilterRules::permissive());
        assert_eq!(config.labels.create_suffix, "[new]");
        assert_eq!(config.max_query_len, 12);
        assert_eq!(config.query, "sh");
    }
}
