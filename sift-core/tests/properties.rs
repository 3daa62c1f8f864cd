//! Property-based tests using proptest.
//!
//! The two exact matchers are checked against a naive scanner, edit distance
//! against its metric laws, and the trie and engine against simple models.

use std::collections::BTreeSet;

use proptest::prelude::*;
use sift_core::distance::distance;
use sift_core::{
    count_occurrences, Corpus, Document, MatcherKind, QueryFrequencyTracker, Sift, Trie,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words over a small alphabet so that collisions and overlaps are common.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,6}").unwrap()
}

/// Text over the same small alphabet with separators.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc ]{0,64}").unwrap()
}

/// Tokenized documents.
fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(word_strategy(), 0..8), 1..8)
}

/// O(n·m) reference: counts every alignment where the pattern matches.
fn naive_count(text: &str, pattern: &str) -> usize {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    if pattern.is_empty() || pattern.len() > text.len() {
        return 0;
    }
    text.windows(pattern.len()).filter(|w| *w == pattern).count()
}

fn engine_of(corpus: &[Vec<String>]) -> Sift {
    let mut engine = Sift::new();
    for (i, tokens) in corpus.iter().enumerate() {
        engine
            .add(Document::from_tokens(format!("doc{i}"), tokens.iter().cloned()))
            .unwrap();
    }
    engine
}

// ============================================================================
// MATCHER PROPERTIES
// ============================================================================

proptest! {
    /// Both strategies agree with the naive scanner on every input.
    #[test]
    fn prop_matchers_agree_with_naive(text in text_strategy(), pattern in "[abc]{0,4}") {
        let expected = naive_count(&text, &pattern);
        prop_assert_eq!(count_occurrences(MatcherKind::BadCharacter, &text, &pattern), expected);
        prop_assert_eq!(count_occurrences(MatcherKind::FailureFunction, &text, &pattern), expected);
    }

    /// Agreement also holds for arbitrary UTF-8, matched byte-wise.
    #[test]
    fn prop_matchers_agree_on_unicode(text in "\\PC{0,40}", pattern in "\\PC{1,3}") {
        let expected = naive_count(&text, &pattern);
        prop_assert_eq!(count_occurrences(MatcherKind::BadCharacter, &text, &pattern), expected);
        prop_assert_eq!(count_occurrences(MatcherKind::FailureFunction, &text, &pattern), expected);
    }

    /// A pattern longer than the text never matches.
    #[test]
    fn prop_long_pattern_never_matches(text in "[abc]{0,5}", extra in "[abc]{1,3}") {
        let pattern = format!("{text}{extra}");
        prop_assert_eq!(count_occurrences(MatcherKind::BadCharacter, &text, &pattern), 0);
        prop_assert_eq!(count_occurrences(MatcherKind::FailureFunction, &text, &pattern), 0);
    }
}

// ============================================================================
// EDIT DISTANCE PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_distance_symmetric(a in "\\PC{0,10}", b in "\\PC{0,10}") {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn prop_distance_zero_iff_equal(a in "[abc]{0,8}", b in "[abc]{0,8}") {
        prop_assert_eq!(distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_distance_bounded_by_lengths(a in "\\PC{0,10}", b in "\\PC{0,10}") {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    #[test]
    fn prop_distance_triangle_inequality(
        a in "[abc]{0,7}",
        b in "[abc]{0,7}",
        c in "[abc]{0,7}",
    ) {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }
}

// ============================================================================
// TRIE PROPERTIES
// ============================================================================

proptest! {
    /// Inserted words are contained; nothing else is.
    #[test]
    fn prop_trie_membership(
        words in prop::collection::vec(word_strategy(), 0..20),
        probe in word_strategy(),
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        for word in &words {
            prop_assert!(trie.contains(word));
        }
        prop_assert_eq!(trie.contains(&probe), words.contains(&probe));
    }

    /// The empty prefix lists every distinct word once, sorted.
    #[test]
    fn prop_trie_enumeration(words in prop::collection::vec(word_strategy(), 0..20)) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        let expected: Vec<String> = words.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(trie.words_with_prefix(""), expected.clone());
        prop_assert_eq!(trie.len(), expected.len());
        prop_assert_eq!(trie.count_terminals(), expected.len());
    }

    /// Prefix enumeration is exactly the filtered word set.
    #[test]
    fn prop_trie_prefix_filter(
        words in prop::collection::vec(word_strategy(), 0..20),
        prefix in "[abc]{0,2}",
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(trie.words_with_prefix(&prefix), expected);
    }
}

// ============================================================================
// ENGINE PROPERTIES
// ============================================================================

proptest! {
    /// Token search matches a linear scan over the documents.
    #[test]
    fn prop_search_matches_scan(corpus in corpus_strategy(), token in word_strategy()) {
        let engine = engine_of(&corpus);
        let expected: Vec<(u32, usize)> = corpus
            .iter()
            .enumerate()
            .filter_map(|(i, tokens)| {
                let n = tokens.iter().filter(|t| **t == token).count();
                (n > 0).then_some((i as u32, n))
            })
            .collect();
        prop_assert_eq!(engine.search(&token).per_document, expected);
    }

    /// AND search returns exactly the documents containing every token.
    #[test]
    fn prop_search_all_matches_scan(
        corpus in corpus_strategy(),
        tokens in prop::collection::vec(word_strategy(), 1..4),
    ) {
        let engine = engine_of(&corpus);
        let expected: Vec<u32> = corpus
            .iter()
            .enumerate()
            .filter(|(_, doc)| tokens.iter().all(|t| doc.contains(t)))
            .map(|(i, _)| i as u32)
            .collect();
        prop_assert_eq!(engine.search_all(&tokens), expected);
    }

    /// Suggestions are sorted by (distance, token) and within the bound.
    #[test]
    fn prop_suggestions_ordered(corpus in corpus_strategy(), word in word_strategy(), max in 0usize..3) {
        let engine = engine_of(&corpus);
        let suggestions = engine.index().vocabulary().suggest_with_distance(&word, max, usize::MAX);
        for s in &suggestions {
            prop_assert!(s.distance <= max);
            prop_assert_eq!(s.distance, distance(&word, &s.token));
        }
        for pair in suggestions.windows(2) {
            prop_assert!((pair[0].distance, &pair[0].token) < (pair[1].distance, &pair[1].token));
        }
    }

    /// Ranking is a stable sort by score of ingestion order.
    #[test]
    fn prop_rank_stable(corpus in corpus_strategy(), keyword in word_strategy()) {
        let engine = engine_of(&corpus);
        let ranked = engine.rank(&[keyword.as_str()]);
        prop_assert_eq!(ranked.len(), corpus.len());
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].doc_id < pair[1].doc_id)
            );
        }
    }

    /// `top_n` returns min(n, distinct) entries in descending count order.
    #[test]
    fn prop_top_n_shape(searches in prop::collection::vec(word_strategy(), 0..30), n in 0usize..10) {
        let mut corpus = Corpus::new();
        corpus.add("doc", "abc cab").unwrap();
        let mut tracker = QueryFrequencyTracker::default();
        for token in &searches {
            tracker.record(&corpus, token);
        }
        let distinct = searches.iter().collect::<BTreeSet<_>>().len();
        let top = tracker.top_n(n);
        prop_assert_eq!(top.len(), n.min(distinct));
        for pair in top.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        prop_assert_eq!(tracker.total_searches(), searches.len());
    }
}
