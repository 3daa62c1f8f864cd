//! Search history and popularity.
//!
//! Every tracked search bumps a per-token counter, counts the token's
//! occurrences across the corpus, and appends a timestamped
//! [`SearchRecord`]. The most searched tokens can then be listed with
//! [`QueryFrequencyTracker::top_n`].

use chrono::Utc;
use log::trace;
use rustc_hash::FxHashMap;
use sift_types::{MatcherKind, SearchConfig, SearchRecord};

use crate::analyzer::normalize_query;
use crate::corpus::Corpus;

#[derive(Debug, Clone, Copy)]
struct SearchCount {
    count: usize,
    /// Position of the token's first search; breaks ties in `top_n`
    first_seen: usize,
}

/// Histogram of searched tokens plus a log of every search.
#[derive(Debug, Clone)]
pub struct QueryFrequencyTracker {
    counts: FxHashMap<String, SearchCount>,
    history: Vec<SearchRecord>,
    matcher: MatcherKind,
}

impl Default for QueryFrequencyTracker {
    fn default() -> Self {
        Self::new(SearchConfig::default().tracking_matcher)
    }
}

impl QueryFrequencyTracker {
    /// Creates an empty tracker counting occurrences with `matcher`.
    pub fn new(matcher: MatcherKind) -> Self {
        Self {
            counts: FxHashMap::default(),
            history: Vec::new(),
            matcher,
        }
    }

    /// Records a search for `token` and returns its corpus-wide occurrences.
    ///
    /// The token is trimmed and lower-cased. An empty token is not recorded
    /// and returns 0.
    pub fn record(&mut self, corpus: &Corpus, token: &str) -> usize {
        let Some(token) = normalize_query(token) else {
            return 0;
        };

        let occurrences = corpus.total_occurrences(&token, self.matcher);
        let first_seen = self.counts.len();
        self.counts
            .entry(token.clone())
            .or_insert(SearchCount {
                count: 0,
                first_seen,
            })
            .count += 1;
        trace!("tracked search {token:?}: {occurrences} occurrences");

        self.history.push(SearchRecord {
            token,
            timestamp: Utc::now(),
            occurrences,
        });
        occurrences
    }

    /// The `n` most searched tokens with their search counts.
    ///
    /// Sorted by descending count; tokens with equal counts keep the order in
    /// which they were first searched.
    pub fn top_n(&self, n: usize) -> Vec<(String, usize)> {
        if n == 0 {
            return Vec::new();
        }
        let mut entries: Vec<(&String, &SearchCount)> = self.counts.iter().collect();
        entries.sort_unstable_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then_with(|| a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .take(n)
            .map(|(token, entry)| (token.clone(), entry.count))
            .collect()
    }

    /// How many times `token` was searched.
    pub fn search_frequency(&self, token: &str) -> usize {
        normalize_query(token)
            .and_then(|t| self.counts.get(&t))
            .map_or(0, |entry| entry.count)
    }

    /// Every recorded search, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[SearchRecord] {
        &self.history
    }

    /// Number of recorded searches.
    #[inline(always)]
    pub fn total_searches(&self) -> usize {
        self.history.len()
    }

    /// Number of distinct searched tokens.
    #[inline(always)]
    pub fn unique_searches(&self) -> usize {
        self.counts.len()
    }

    /// Forgets every search.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.history.clear();
    }
}
