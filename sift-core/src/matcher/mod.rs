//! Exact substring occurrence counting.
//!
//! Two interchangeable strategies implement [`ExactMatcher`]:
//!
//! - [`BadCharacter`]: aligns the pattern's end, compares right to left and
//!   skips ahead using the last position of the offending byte in the pattern
//! - [`FailureFunction`]: scans left to right and falls back through the
//!   pattern's longest proper prefix-suffix table on mismatch
//!
//! Both count overlapping occurrences and must agree on every input. Matching
//! is byte-wise and case-sensitive; callers lower-case text and pattern.
//!
//! When one pattern is searched in many texts (ranking, frequency counts),
//! compile it once with [`Pattern::compile`] and reuse the tables.

pub mod bad_character;
pub mod failure_function;

pub use bad_character::{BadCharacter, BadCharacterPattern};
pub use failure_function::{FailureFunction, FailureFunctionPattern};

use sift_types::MatcherKind;

/// Counts occurrences of a pattern in a text.
///
/// Returns 0 when the pattern is empty, the text is empty, or the pattern is
/// longer than the text.
pub trait ExactMatcher {
    /// Counts (possibly overlapping) occurrences of `pattern` in `text`.
    fn count(&self, text: &str, pattern: &str) -> usize;
}

impl ExactMatcher for MatcherKind {
    #[inline]
    fn count(&self, text: &str, pattern: &str) -> usize {
        match self {
            MatcherKind::BadCharacter => BadCharacter.count(text, pattern),
            MatcherKind::FailureFunction => FailureFunction.count(text, pattern),
        }
    }
}

/// Counts occurrences of `pattern` in `text` with the given strategy.
///
/// # Example
///
/// ```
/// use sift_core::matcher::count_occurrences;
/// use sift_types::MatcherKind;
///
/// let text = "the rental car rental agency";
/// assert_eq!(count_occurrences(MatcherKind::BadCharacter, text, "rental"), 2);
/// assert_eq!(count_occurrences(MatcherKind::FailureFunction, text, "rental"), 2);
/// ```
#[inline]
pub fn count_occurrences(kind: MatcherKind, text: &str, pattern: &str) -> usize {
    kind.count(text, pattern)
}

/// A pattern with its search tables precomputed.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Last-occurrence table form.
    BadCharacter(BadCharacterPattern),
    /// Failure-function form.
    FailureFunction(FailureFunctionPattern),
}

impl Pattern {
    /// Builds the tables for `pattern` using the selected strategy.
    pub fn compile(kind: MatcherKind, pattern: &str) -> Self {
        match kind {
            MatcherKind::BadCharacter => Self::BadCharacter(BadCharacterPattern::new(pattern)),
            MatcherKind::FailureFunction => {
                Self::FailureFunction(FailureFunctionPattern::new(pattern))
            }
        }
    }

    /// Counts occurrences of the compiled pattern in `text`.
    #[inline]
    pub fn count_in(&self, text: &str) -> usize {
        match self {
            Self::BadCharacter(p) => p.count_in(text.as_bytes()),
            Self::FailureFunction(p) => p.count_in(text.as_bytes()),
        }
    }
}

#[cfg(test)]
pub(crate) fn naive_count(text: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() || pattern.len() > text.len() {
        return 0;
    }
    text.windows(pattern.len()).filter(|w| *w == pattern).count()
}
