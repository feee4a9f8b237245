//! Option filtering
//!
//! Turns an option universe and a query into the rows a picker shows.
//! Matching is a case-insensitive substring test. In single-select mode a
//! query with no exact match gets a synthesized "create" row so the user can
//! commit free text.

use crate::selection::SelectionMode;

/// Prefix excluded from filtered results unless configured otherwise
pub const DEFAULT_RESERVED_PREFIX: &str = "add";

/// Kind of a display row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A real option from the universe
    Option,
    /// Synthesized from the query text (single-select only)
    Create,
}

/// A row visible in the picker list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Label committed when the row is tapped
    pub label: String,
    /// Whether the row is a real option or a create row
    pub kind: RowKind,
}

impl DisplayRow {
    /// Create a row for a real option
    #[must_use]
    pub fn option(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: RowKind::Option,
        }
    }

    /// Create a synthesized "add new" row
    #[must_use]
    pub fn create(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: RowKind::Create,
        }
    }

    /// Check if this is a synthesized create row
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self.kind, RowKind::Create)
    }
}

/// Tunable filtering rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRules {
    /// Labels starting with this prefix (ignoring case) are hidden from
    /// non-empty query results. `None` disables the exclusion.
    pub reserved_prefix: Option<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            reserved_prefix: Some(DEFAULT_RESERVED_PREFIX.to_string()),
        }
    }
}

impl FilterRules {
    /// Rules without any reserved-prefix exclusion
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            reserved_prefix: None,
        }
    }

    /// Build rules from a configured prefix; an empty prefix disables it
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            reserved_prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
        }
    }

    fn is_reserved(&self, label_lower: &str) -> bool {
        self.reserved_prefix
            .as_deref()
            .is_some_and(|prefix| label_lower.starts_with(&prefix.to_lowercase()))
    }
}

/// Check whether two labels are equal, ignoring case
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Compute the visible rows for `options` under `query`
///
/// An empty query returns every option in order. A non-empty query keeps
/// the options containing it (ignoring case) minus reserved-prefix labels,
/// and in single-select mode prepends a create row when no option equals
/// the query exactly (ignoring case).
#[must_use]
pub fn filter_rows(
    options: &[String],
    query: &str,
    mode: SelectionMode,
    rules: &FilterRules,
) -> Vec<DisplayRow> {
    if query.is_empty() {
        return options.iter().map(DisplayRow::option).collect();
    }

    let needle = query.to_lowercase();
    let mut rows: Vec<DisplayRow> = options
        .iter()
        .filter(|label| {
            let lower = label.to_lowercase();
            lower.contains(&needle) && !rules.is_reserved(&lower)
        })
        .map(DisplayRow::option)
        .collect();

    if mode == SelectionMode::Single
        && !options.iter().any(|label| eq_ignore_case(label, query))
    {
        rows.insert(0, DisplayRow::create(query));
    }

    rows
}
