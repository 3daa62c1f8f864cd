//! Vocabulary membership and spelling correction.
//!
//! [`VocabularyIndex`] owns the [`Trie`] holding every distinct token and
//! answers three questions about a query word: is it stored, which stored
//! words are within a given edit distance, and (combining both) is it spelled
//! correctly.
//!
//! Suggestions are computed by brute force: the query is compared against
//! every vocabulary token. That is O(V · |w| · |t|) per call, fine for
//! vocabularies of a few hundred thousand tokens and not optimized beyond
//! the cheap length-difference bound.

use log::trace;
use sift_types::{SearchConfig, SpellCheck, Suggestion};

use crate::analyzer::normalize_query;
use crate::completion::PrefixCompletion;
use crate::distance::distance_within;
use crate::trie::{NodeId, Trie};

/// Trie-backed vocabulary with fuzzy suggestions.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    trie: Trie,
    config: SearchConfig,
}

impl VocabularyIndex {
    /// Creates an empty vocabulary with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty vocabulary with custom configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            trie: Trie::new(),
            config,
        }
    }

    /// The active configuration.
    #[inline(always)]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of distinct tokens.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if no token has been inserted.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The underlying trie.
    #[inline(always)]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    #[inline(always)]
    pub(crate) fn trie_mut(&mut self) -> &mut Trie {
        &mut self.trie
    }

    /// Removes every token.
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Inserts a pre-cleaned token and returns its node.
    #[inline]
    pub fn insert(&mut self, token: &str) -> NodeId {
        self.trie.insert(token)
    }

    /// Returns `true` if the lower-cased `word` is in the vocabulary.
    ///
    /// Empty queries are never contained.
    pub fn contains(&self, word: &str) -> bool {
        normalize_query(word).is_some_and(|w| self.trie.contains(&w))
    }

    /// All tokens in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.trie.words_with_prefix("")
    }

    /// Prefix completion over this vocabulary.
    #[inline]
    pub fn completion(&self) -> PrefixCompletion<'_> {
        PrefixCompletion::new(&self.trie)
    }

    /// Tokens within `max_distance` of `word`, closest first.
    ///
    /// Ties are broken lexicographically, so the result is deterministic.
    /// At most `limit` tokens are returned.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_core::VocabularyIndex;
    ///
    /// let vocabulary: VocabularyIndex = ["rental", "rent", "car"].into_iter().collect();
    /// assert_eq!(vocabulary.suggest("rentl", 1, 10), ["rent", "rental"]);
    /// ```
    pub fn suggest(&self, word: &str, max_distance: usize, limit: usize) -> Vec<String> {
        self.suggest_with_distance(word, max_distance, limit)
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    /// Like [`suggest`](Self::suggest), keeping each token's distance.
    pub fn suggest_with_distance(
        &self,
        word: &str,
        max_distance: usize,
        limit: usize,
    ) -> Vec<Suggestion> {
        let Some(word) = normalize_query(word) else {
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        // The walk is lexicographic; the stable sort below keeps that order
        // among equal distances.
        self.trie.for_each(|token, _| {
            if let Some(d) = distance_within(&word, token, max_distance) {
                suggestions.push(Suggestion::new(token, d));
            }
        });
        suggestions.sort_by_key(|s| s.distance);
        suggestions.truncate(limit);
        suggestions
    }

    /// Checks `word` against the vocabulary.
    ///
    /// When it is missing, the closest `suggestion_limit` tokens within
    /// `max_edit_distance` are attached.
    pub fn check_spelling(&self, word: &str) -> SpellCheck {
        let Some(normalized) = normalize_query(word) else {
            return SpellCheck {
                word: String::new(),
                found: false,
                suggestions: Vec::new(),
            };
        };

        let found = self.trie.contains(&normalized);
        let suggestions = if found {
            Vec::new()
        } else {
            self.suggest_with_distance(
                &normalized,
                self.config.max_edit_distance,
                self.config.suggestion_limit,
            )
        };
        trace!(
            "spell check {normalized:?}: found={found}, {} suggestions",
            suggestions.len()
        );

        SpellCheck {
            word: normalized,
            found,
            suggestions,
        }
    }
}

impl<S: AsRef<str>> Extend<S> for VocabularyIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for VocabularyIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        vocabulary.extend(iter);
        vocabulary
    }
}
