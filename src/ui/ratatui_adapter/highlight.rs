//! Match highlighting for visible rows
//!
//! Row filtering is a plain substring test (see [`crate::filter`]); nucleo
//! is only used here to find which characters of a label the query hit.

use nucleo::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32String};

/// Computes matched character positions for row labels
pub struct MatchHighlighter {
    matcher: Matcher,
}

impl MatchHighlighter {
    /// Create a new highlighter
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Character indices of `label` matched by `query`
    ///
    /// Returns an empty list for an empty query or no match.
    pub fn indices(&mut self, label: &str, query: &str) -> Vec<u32> {
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Substring,
        );
        let haystack = Utf32String::from(label);
        let mut indices = Vec::new();
        if pattern
            .indices(haystack.slice(..), &mut self.matcher, &mut indices)
            .is_none()
        {
            return Vec::new();
        }
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

impl Default for MatchHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_indices() {
        let mut highlighter = MatchHighlighter::new();
        assert_eq!(highlighter.indices("Caltex", "LT"), vec![2, 3]);
        assert_eq!(highlighter.indices("Seaoil", "oil"), vec![3, 4, 5]);
    }

    #[test]
    fn test_no_match_or_empty_query() {
        let mut highlighter = MatchHighlighter::new();
        assert!(highlighter.indices("Shell", "xyz").is_empty());
        assert!(highlighter.indices("Shell", "").is_empty());
    }
}
