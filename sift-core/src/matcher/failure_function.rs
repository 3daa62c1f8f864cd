//! Failure-function scan.
//!
//! `failure[i]` is the length of the longest proper prefix of
//! `pattern[..=i]` that is also its suffix. The scan never moves backwards in
//! the text: on a mismatch, or after a complete match, the pattern index
//! falls back to `failure[j - 1]`, so overlapping occurrences are counted.

use smallvec::SmallVec;

use super::ExactMatcher;

/// Failure-function strategy with no precomputed state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailureFunction;

impl ExactMatcher for FailureFunction {
    #[inline]
    fn count(&self, text: &str, pattern: &str) -> usize {
        FailureFunctionPattern::new(pattern).count_in(text.as_bytes())
    }
}

/// A pattern with its failure table.
#[derive(Debug, Clone)]
pub struct FailureFunctionPattern {
    pattern: Box<[u8]>,
    failure: SmallVec<[usize; 32]>,
}

impl FailureFunctionPattern {
    /// Builds the failure table for `pattern`.
    pub fn new(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        Self {
            pattern: bytes.into(),
            failure: failure_table(bytes),
        }
    }

    /// The longest proper prefix-suffix length for each pattern prefix.
    #[inline(always)]
    pub fn failure(&self) -> &[usize] {
        &self.failure
    }

    /// Counts occurrences of the pattern in `text`.
    pub fn count_in(&self, text: &[u8]) -> usize {
        let pattern = &self.pattern[..];
        let n = text.len();
        let m = pattern.len();
        if m == 0 || n == 0 || m > n {
            return 0;
        }

        let mut count = 0;
        let mut i = 0usize;
        let mut j = 0usize;
        while i < n {
            if pattern[j] == text[i] {
                i += 1;
                j += 1;
            }

            if j == m {
                count += 1;
                j = self.failure[j - 1];
            } else if i < n && pattern[j] != text[i] {
                if j != 0 {
                    j = self.failure[j - 1];
                } else {
                    i += 1;
                }
            }
        }

        count
    }
}

fn failure_table(pattern: &[u8]) -> SmallVec<[usize; 32]> {
    let m = pattern.len();
    let mut failure: SmallVec<[usize; 32]> = SmallVec::from_elem(0, m);
    let mut len = 0usize;
    let mut i = 1usize;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            failure[i] = len;
            i += 1;
        } else if len != 0 {
            len = failure[len - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }

    failure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::naive_count;

    #[test]
    fn failure_table_values() {
        assert_eq!(FailureFunctionPattern::new("aabaaab").failure(), &[0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(FailureFunctionPattern::new("abcd").failure(), &[0, 0, 0, 0]);
        assert_eq!(FailureFunctionPattern::new("aaaa").failure(), &[0, 1, 2, 3]);
        assert!(FailureFunctionPattern::new("").failure().is_empty());
    }

    #[test]
    fn counts_simple_occurrences() {
        assert_eq!(FailureFunction.count("car rental car", "car"), 2);
        assert_eq!(FailureFunction.count("rental", "rental"), 1);
        assert_eq!(FailureFunction.count("toronto", "to"), 2);
    }

    #[test]
    fn overlapping_after_full_match() {
        for (text, pattern) in [("aaaaa", "aaa"), ("abcabcabc", "abcabc"), ("aabaabaa", "aabaa")] {
            assert_eq!(
                FailureFunction.count(text, pattern),
                naive_count(text.as_bytes(), pattern.as_bytes()),
                "{pattern:?} in {text:?}"
            );
        }
    }

    #[test]
    fn long_pattern_spills_table() {
        let pattern = "ab".repeat(40);
        let text = "ab".repeat(50);
        assert_eq!(FailureFunction.count(&text, &pattern), 11);
    }
}
