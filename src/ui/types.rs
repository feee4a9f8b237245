//! Common types for UI abstraction layer

/// Text shown by the picker besides the options themselves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLabels {
    /// Suffix after a synthesized "add new" row
    pub create_suffix: String,
    /// Message shown when no row matches the query
    pub empty_message: String,
}

impl Default for PickerLabels {
    fn default() -> Self {
        Self {
            create_suffix: "(Add New)".to_string(),
            empty_message: "No results found".to_string(),
        }
    }
}

/// Result from a picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerResult {
    /// Committed labels (one for single-select)
    pub selected: Vec<String>,
    /// Whether the picker was dismissed without a commit
    pub aborted: bool,
}

impl PickerResult {
    /// Create result with committed labels
    #[must_use]
    pub const fn committed(selected: Vec<String>) -> Self {
        Self {
            selected,
            aborted: false,
        }
    }

    /// Create result for a dismissed picker
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            selected: Vec::new(),
            aborted: true,
        }
    }
}
