//! Radio-style selection

/// Single-select profile
///
/// Holds a copy of the caller's current value for rendering. Tapping a row
/// never changes it; the caller decides what to do with the commit and
/// pushes the new value back through [`SingleSelect::set_current`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelect {
    current: Option<String>,
}

impl SingleSelect {
    #[must_use]
    pub const fn new(current: Option<String>) -> Self {
        Self { current }
    }

    /// Replace the caller-owned current value
    pub fn set_current(&mut self, current: Option<String>) {
        self.current = current;
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Exact, case-sensitive comparison with the current value
    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.current.as_deref() == Some(label)
    }

    /// Commit payload for a tapped row
    #[must_use]
    pub fn tap(&self, label: &str) -> String {
        label.to_string()
    }
}
