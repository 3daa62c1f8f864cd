//! Prefix completion over a trie.

use sift_types::Completions;

use crate::trie::Trie;

/// Enumerates stored words sharing a prefix.
///
/// Borrows the trie, so it can sit on top of a standalone
/// [`VocabularyIndex`](crate::VocabularyIndex) or the vocabulary of an
/// [`InvertedIndex`](crate::InvertedIndex) alike.
#[derive(Debug, Clone, Copy)]
pub struct PrefixCompletion<'t> {
    trie: &'t Trie,
}

impl<'t> PrefixCompletion<'t> {
    /// Wraps `trie`.
    #[inline]
    pub const fn new(trie: &'t Trie) -> Self {
        Self { trie }
    }

    /// Every stored word starting with the lower-cased `prefix`, sorted.
    ///
    /// The empty prefix enumerates the whole vocabulary.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.trie.words_with_prefix(&prefix.trim().to_lowercase())
    }

    /// The first `max` completions plus the total number available.
    pub fn complete_limited(&self, prefix: &str, max: usize) -> Completions {
        let mut words = self.complete(prefix);
        let total = words.len();
        words.truncate(max);
        Completions { words, total }
    }

    /// Number of stored words starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        let mut n = 0;
        self.trie
            .for_each_with_prefix(&prefix.trim().to_lowercase(), |_, _| n += 1);
        n
    }
}
