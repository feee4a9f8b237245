//! Signals raised by a selection modal

/// Outbound signal from a [`SelectionModal`](super::SelectionModal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// The query field was edited; carries the new text
    QueryChanged(String),
    /// A row was tapped in single-select mode
    CommitSingle(String),
    /// Apply was pressed in multi-select mode; carries the pending labels
    CommitMulti(Vec<String>),
    /// Close control, backdrop or back key; the caller decides
    DismissRequested,
}

impl ModalEvent {
    /// Check if this event carries a commit
    #[must_use]
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::CommitSingle(_) | Self::CommitMulti(_))
    }

    /// Committed labels, if this is a commit
    #[must_use]
    pub fn into_committed(self) -> Option<Vec<String>> {
        match self {
            Self::CommitSingle(label) => Some(vec![label]),
            Self::CommitMulti(labels) => Some(labels),
            Self::QueryChanged(_) | Self::DismissRequested => None,
        }
    }
}
