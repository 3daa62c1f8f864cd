//! Single-table bad-character scan.
//!
//! For each alignment `s` the pattern is compared against
//! `text[s..s + m]` from its last byte backwards.
//!
//! - Mismatch at pattern index `j` on byte `c`: shift by
//!   `max(1, j - last[c])`, lining up the rightmost `c` in the pattern.
//! - Full match: count it, then shift by `m - last[c]` where `c` is the byte
//!   just past the window (or by 1 at the end of the text). No occurrence can
//!   start inside that shift, so overlapping matches are still found.
//!
//! This is the bad-character rule alone, without the good-suffix table:
//! sublinear on typical text, O(n·m) in the worst case.

use super::ExactMatcher;

/// Bad-character strategy with no precomputed state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadCharacter;

impl ExactMatcher for BadCharacter {
    #[inline]
    fn count(&self, text: &str, pattern: &str) -> usize {
        BadCharacterPattern::new(pattern).count_in(text.as_bytes())
    }
}

/// A pattern with its last-occurrence table.
#[derive(Debug, Clone)]
pub struct BadCharacterPattern {
    pattern: Box<[u8]>,
    /// Last index of each byte in the pattern, -1 when absent
    last: [isize; 256],
}

impl BadCharacterPattern {
    /// Builds the last-occurrence table for `pattern`.
    pub fn new(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        let mut last = [-1isize; 256];
        for (i, &b) in bytes.iter().enumerate() {
            last[b as usize] = i as isize;
        }
        Self {
            pattern: bytes.into(),
            last,
        }
    }

    /// Last index of `b` in the pattern, or -1.
    #[inline(always)]
    pub fn last_occurrence(&self, b: u8) -> isize {
        self.last[b as usize]
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
        let mut s = 0usize;
        while s <= n - m {
            // `j` is one past the pattern index being compared
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[s + j - 1] {
                j -= 1;
            }

            let shift = if j == 0 {
                count += 1;
                if s + m < n {
                    m as isize - self.last_occurrence(text[s + m])
                } else {
                    1
                }
            } else {
                let mismatch = j - 1;
                mismatch as isize - self.last_occurrence(text[s + mismatch])
            };
            s += shift.max(1) as usize;
        }

        count
    }
}
