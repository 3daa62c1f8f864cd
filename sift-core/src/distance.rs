//! Levenshtein edit distance.
//!
//! Insertions, deletions and substitutions cost 1; equal characters cost 0.
//! The (|a|+1) × (|b|+1) dynamic-programming table is evaluated row by row,
//! keeping only the previous and current rows.

use smallvec::SmallVec;

type Row = SmallVec<[usize; 32]>;

/// Computes the Levenshtein distance between `a` and `b`, by `char`.
///
/// The result is symmetric, zero exactly when the strings are equal, at least
/// the difference of their lengths, and obeys the triangle inequality.
///
/// # Example
///
/// ```
/// use sift_core::distance::distance;
///
/// assert_eq!(distance("rentl", "rent"), 1);
/// assert_eq!(distance("rentl", "rental"), 1);
/// assert_eq!(distance("kitten", "sitting"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b: SmallVec<[char; 32]> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    // Row 0: transforming "" into each prefix of b
    let mut prev: Row = (0..=b.len()).collect();
    let mut curr: Row = SmallVec::from_elem(0, b.len() + 1);

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        core::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Returns the distance if it does not exceed `max`.
#[inline]
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la.abs_diff(lb) > max {
        return None;
    }
    Some(distance(a, b)).filter(|&d| d <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("rental", "rental"), 0);
    }

    #[test]
    fn against_empty() {
        assert_eq!(distance("", "car"), 3);
        assert_eq!(distance("car", ""), 3);
    }

    #[test]
    fn single_edits() {
        assert_eq!(distance("rentl", "rental"), 1); // insertion
        assert_eq!(distance("rental", "rentl"), 1); // deletion
        assert_eq!(distance("budjet", "budget"), 1); // substitution
    }

    #[test]
    fn known_values() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("rentl", "rent"), 1);
        assert_eq!(distance("vehicl", "vehicle"), 1);
    }

    #[test]
    fn symmetric_on_samples() {
        let words = ["toronto", "tornado", "canada", "can", "", "pric", "price"];
        for a in words {
            for b in words {
                assert_eq!(distance(a, b), distance(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("é", ""), 1);
    }

    #[test]
    fn within_bound() {
        assert_eq!(distance_within("rentl", "rental", 1), Some(1));
        assert_eq!(distance_within("rentl", "car", 2), None);
        assert_eq!(distance_within("a", "abcd", 2), None);
        assert_eq!(distance_within("same", "same", 0), Some(0));
    }
}
